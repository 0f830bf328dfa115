//! The per-core registries: model (proxies), view (mediators and observers),
//! and controller (command mappings).
//!
//! Each registry is a multiton: one process-global instance per core key,
//! created on first use and discarded with `remove_*`. A facade normally
//! fronts all three, but they remain usable on their own.

pub mod controller;
pub mod model;
pub mod view;

pub use controller::Controller;
pub use model::Model;
pub use view::View;
