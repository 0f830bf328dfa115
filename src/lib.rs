//! mvckit - a notification-driven MVC application kernel.
//!
//! Applications are organized into named cores. Each core is an isolated
//! triad of registries behind one facade: a model caching named proxies
//! (application data), a view caching mediators (view adapters) and the
//! observer lists they subscribe to, and a controller mapping notification
//! names to commands. Components communicate only by broadcasting
//! notifications, never by holding references to each other.
//!
//! # Architecture
//!
//! - **payload**: type-erased shared value handle passed through the framework
//! - **messaging**: notifications, observers, and the notifier trait
//! - **components**: the proxy/mediator/command traits and stock bases
//! - **registry**: the per-core model, view, and controller multitons
//! - **facade**: single entry point fronting one core's registries
//! - **error**: custom error types for precise error handling
//! - **config**: observability configuration from environment variables
//! - **observability**: tracing setup and activity metrics
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use mvckit::{BaseProxy, Facade, Payload, Proxy};
//!
//! let facade = Facade::get_instance("QuickStartCore");
//!
//! facade.register_proxy(Arc::new(BaseProxy::with_data(
//!     "colors",
//!     Payload::new(vec!["red".to_string(), "green".to_string(), "blue".to_string()]),
//! )));
//!
//! let colors = facade.retrieve_proxy("colors").unwrap();
//! let data = colors.data().unwrap();
//! assert_eq!(data.downcast_ref::<Vec<String>>().unwrap().len(), 3);
//!
//! Facade::remove_core("QuickStartCore");
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod facade;
pub mod messaging;
pub mod observability;
pub mod payload;
pub mod registry;

pub use components::{
    BaseMediator, BaseProxy, Command, CommandFactory, MacroCommand, Mediator, Proxy,
};
pub use config::Config;
pub use error::{ConfigError, PayloadError};
pub use facade::Facade;
pub use messaging::{CoreLink, Notification, Notifier, NotifyContext, Observer};
pub use observability::{CoreMetrics, MetricsSummary};
pub use payload::Payload;
pub use registry::{Controller, Model, View};
