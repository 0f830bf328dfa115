//! Notification types and observer plumbing.

pub mod notification;
pub mod notifier;
pub mod observer;

pub use notification::Notification;
pub use notifier::{CoreLink, Notifier};
pub use observer::{NotifyContext, Observer};
