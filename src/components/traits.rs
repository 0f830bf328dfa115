//! Trait seams for the three component roles.
//!
//! The registries store components behind these traits, enabling different
//! implementations (the stock bases, application-specific types, test
//! doubles). All three extend [`Notifier`] so a registered component can
//! broadcast into its owning core.

use crate::messaging::notification::Notification;
use crate::messaging::notifier::Notifier;
use crate::payload::Payload;

/// A named, shared holder of opaque application data.
///
/// The data slot uses interior mutability: one holder of a shared handle may
/// replace the payload while another observes it. The name is fixed at
/// construction. Implementors typically also encapsulate fetching and
/// manipulating the data they hold, broadcasting notifications when it
/// changes.
pub trait Proxy: Notifier {
    /// The registration name. Immutable for the lifetime of the instance.
    fn name(&self) -> &str;

    /// The current payload, or `None` if none was ever set.
    fn data(&self) -> Option<Payload>;

    /// Replace the payload. Last write wins; there is no merging.
    fn set_data(&self, data: Payload);

    /// Called by the model registry after this proxy is registered.
    fn on_register(&self) {}

    /// Called by the model registry after this proxy is removed.
    fn on_remove(&self) {}
}

/// A named adapter between the framework and an arbitrary view component.
///
/// Mediators declare the notification names they care about; the view
/// subscribes them on registration and routes matching notifications to
/// [`handle_notification`](Mediator::handle_notification).
pub trait Mediator: Notifier {
    /// The registration name. Immutable for the lifetime of the instance.
    fn name(&self) -> &str;

    /// The wrapped view component, if one is attached.
    fn view_component(&self) -> Option<Payload>;

    /// Replace the wrapped view component.
    fn set_view_component(&self, component: Payload);

    /// Notification names this mediator wants routed to it.
    fn notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    /// React to a notification named in the interest list.
    fn handle_notification(&self, _notification: &Notification) {}

    /// Called by the view registry after this mediator is registered.
    fn on_register(&self) {}

    /// Called by the view registry after this mediator is removed.
    fn on_remove(&self) {}
}

/// A unit of work executed in response to a notification.
///
/// Commands are created fresh by their factory for every execution, attached
/// to the dispatching core, then run once.
pub trait Command: Notifier {
    /// Perform the work this command encapsulates.
    fn execute(&self, notification: &Notification);
}
