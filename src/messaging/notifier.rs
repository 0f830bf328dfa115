//! Outbound notification support for framework components.
//!
//! Proxies, mediators, and commands all need to broadcast notifications into
//! the core that owns them, but they are constructed before that core is
//! known. Each component embeds a [`CoreLink`] that stays unattached until
//! the component is registered; registration points the link at the owning
//! core's key.

use std::sync::{Arc, RwLock};

use crate::facade::Facade;
use crate::messaging::notification::Notification;
use crate::payload::Payload;

/// A late-bound handle tying a component to its owning core.
///
/// Attaching stores the core key; the facade is resolved by key on every
/// send, so a link never keeps a removed core alive.
#[derive(Debug, Default)]
pub struct CoreLink {
    key: RwLock<Option<String>>,
}

impl CoreLink {
    /// Create an unattached link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the link at a core. Re-attaching replaces the previous key.
    pub fn attach(&self, key: &str) {
        if let Ok(mut slot) = self.key.write() {
            *slot = Some(key.to_string());
        }
    }

    /// The attached core key, if any.
    pub fn key(&self) -> Option<String> {
        if let Ok(slot) = self.key.read() {
            slot.clone()
        } else {
            None
        }
    }

    /// Whether the link has been attached to a core.
    pub fn is_attached(&self) -> bool {
        self.key().is_some()
    }

    /// Resolve the facade for the attached core.
    ///
    /// `None` when unattached or when the core has since been removed.
    pub fn facade(&self) -> Option<Arc<Facade>> {
        self.key().and_then(|key| Facade::instance(&key))
    }
}

/// Sending side of the notification system.
///
/// Implementors supply [`core_link`](Notifier::core_link); everything else is
/// provided. Sending from an unattached component, or after its core was
/// removed, drops the notification with a warning rather than panicking.
pub trait Notifier: Send + Sync {
    /// The link tying this component to its core.
    fn core_link(&self) -> &CoreLink;

    /// Attach this component to the core identified by `key`.
    ///
    /// Called by the registries during registration; applications rarely call
    /// this directly.
    fn initialize_notifier(&self, key: &str) {
        self.core_link().attach(key);
    }

    /// The facade of the owning core, if this component is attached.
    fn facade(&self) -> Option<Arc<Facade>> {
        self.core_link().facade()
    }

    /// Broadcast a prebuilt notification through the owning core.
    fn send(&self, notification: Notification) {
        match self.facade() {
            Some(facade) => facade.notify_observers(&notification),
            None => tracing::warn!(
                notification = %notification.name(),
                "Dropping notification from detached notifier"
            ),
        }
    }

    /// Broadcast a notification with only a name.
    fn send_notification(&self, name: &str) {
        self.send(Notification::new(name));
    }

    /// Broadcast a notification with a payload body.
    fn send_notification_with_body(&self, name: &str, body: Payload) {
        self.send(Notification::new(name).with_body(body));
    }

    /// Broadcast a notification with a payload body and a kind discriminator.
    fn send_notification_with_kind(&self, name: &str, body: Payload, kind: &str) {
        self.send(Notification::new(name).with_body(body).with_kind(kind));
    }
}
