//! Stock mediator implementation.

use std::sync::RwLock;

use crate::components::traits::Mediator;
use crate::messaging::notifier::{CoreLink, Notifier};
use crate::payload::Payload;

/// A mediator with no interests and a no-op handler.
///
/// Useful on its own when only the named view-component slot is needed, or
/// embedded in a richer mediator that delegates the accessors and overrides
/// the notification methods.
#[derive(Debug)]
pub struct BaseMediator {
    name: String,
    view: RwLock<Option<Payload>>,
    link: CoreLink,
}

impl BaseMediator {
    /// Sentinel name used when no name is supplied.
    pub const NAME: &'static str = "Mediator";

    /// Create a mediator with the given name and no view component.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            view: RwLock::new(None),
            link: CoreLink::new(),
        }
    }

    /// Create a mediator wrapping the given view component.
    pub fn with_view(name: impl Into<String>, view: Payload) -> Self {
        Self {
            name: name.into(),
            view: RwLock::new(Some(view)),
            link: CoreLink::new(),
        }
    }
}

impl Default for BaseMediator {
    fn default() -> Self {
        Self::new(Self::NAME)
    }
}

impl Notifier for BaseMediator {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Mediator for BaseMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn view_component(&self) -> Option<Payload> {
        if let Ok(slot) = self.view.read() {
            slot.clone()
        } else {
            None
        }
    }

    fn set_view_component(&self, component: Payload) {
        if let Ok(mut slot) = self.view.write() {
            *slot = Some(component);
        }
    }
}
