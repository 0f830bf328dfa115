//! Application-facing building blocks: proxies, mediators, and commands.

pub mod command;
pub mod mediator;
pub mod proxy;
pub mod traits;

pub use command::{CommandFactory, MacroCommand};
pub use mediator::BaseMediator;
pub use proxy::BaseProxy;
pub use traits::{Command, Mediator, Proxy};
