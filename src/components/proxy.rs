//! Stock proxy implementation.

use std::sync::RwLock;

use crate::components::traits::Proxy;
use crate::messaging::notifier::{CoreLink, Notifier};
use crate::payload::Payload;

/// A plain named data holder.
///
/// `BaseProxy` covers the common case where a proxy is just a slot for one
/// value. Types with richer behavior either embed one and delegate, or
/// implement [`Proxy`] directly.
///
/// # Example
///
/// ```
/// use mvckit::{BaseProxy, Payload, Proxy};
///
/// let proxy = BaseProxy::new("colors");
/// proxy.set_data(Payload::new(vec!["red".to_string(), "green".to_string()]));
/// assert_eq!(proxy.name(), "colors");
/// ```
#[derive(Debug)]
pub struct BaseProxy {
    name: String,
    data: RwLock<Option<Payload>>,
    link: CoreLink,
}

impl BaseProxy {
    /// Sentinel name used when no name is supplied.
    pub const NAME: &'static str = "Proxy";

    /// Create a proxy with the given name and no data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: RwLock::new(None),
            link: CoreLink::new(),
        }
    }

    /// Create a proxy with both name and data set.
    pub fn with_data(name: impl Into<String>, data: Payload) -> Self {
        Self {
            name: name.into(),
            data: RwLock::new(Some(data)),
            link: CoreLink::new(),
        }
    }
}

impl Default for BaseProxy {
    fn default() -> Self {
        Self::new(Self::NAME)
    }
}

impl Notifier for BaseProxy {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Proxy for BaseProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> Option<Payload> {
        if let Ok(slot) = self.data.read() {
            slot.clone()
        } else {
            None
        }
    }

    fn set_data(&self, data: Payload) {
        if let Ok(mut slot) = self.data.write() {
            *slot = Some(data);
        }
    }
}
