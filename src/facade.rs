//! Single entry point to a core.
//!
//! A facade fronts the model, view, and controller for one core key. Most
//! applications talk only to the facade: register components, send
//! notifications, and let the registries do the bookkeeping.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::components::command::CommandFactory;
use crate::components::traits::{Mediator, Proxy};
use crate::messaging::notification::Notification;
use crate::payload::Payload;
use crate::registry::controller::Controller;
use crate::registry::model::Model;
use crate::registry::view::View;

static INSTANCE_MAP: Lazy<RwLock<HashMap<String, Arc<Facade>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// The facade for one named core.
///
/// Creating a facade creates the core's three registries. Facades are
/// multitons: `get_instance` returns the same shared instance for a key
/// until [`remove_core`](Facade::remove_core) tears the whole core down.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mvckit::{BaseProxy, Facade, Payload};
///
/// let facade = Facade::get_instance("DocExampleCore");
/// facade.register_proxy(Arc::new(BaseProxy::with_data(
///     "colors",
///     Payload::new(vec!["red".to_string()]),
/// )));
/// assert!(facade.has_proxy("colors"));
/// Facade::remove_core("DocExampleCore");
/// ```
pub struct Facade {
    key: String,
    model: Arc<Model>,
    view: Arc<View>,
    controller: Arc<Controller>,
}

impl Facade {
    /// Get the facade for `key`, creating the core if this is the first use.
    pub fn get_instance(key: &str) -> Arc<Facade> {
        if let Ok(map) = INSTANCE_MAP.read() {
            if let Some(existing) = map.get(key) {
                return Arc::clone(existing);
            }
        }
        let mut map = INSTANCE_MAP
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            map.entry(key.to_string())
                .or_insert_with(|| Arc::new(Facade::new(key))),
        )
    }

    /// Look up an existing facade without creating one.
    pub fn instance(key: &str) -> Option<Arc<Facade>> {
        if let Ok(map) = INSTANCE_MAP.read() {
            map.get(key).cloned()
        } else {
            None
        }
    }

    /// Whether a core exists for `key`.
    pub fn has_core(key: &str) -> bool {
        if let Ok(map) = INSTANCE_MAP.read() {
            map.contains_key(key)
        } else {
            false
        }
    }

    /// Tear down the core for `key`: its model, view, controller, and
    /// facade. Unknown keys are ignored.
    pub fn remove_core(key: &str) {
        Model::remove_model(key);
        View::remove_view(key);
        Controller::remove_controller(key);
        if let Ok(mut map) = INSTANCE_MAP.write() {
            if map.remove(key).is_some() {
                tracing::info!(core = %key, "Core removed");
            }
        }
    }

    fn new(key: &str) -> Self {
        tracing::info!(core = %key, "Initializing core");
        Self {
            key: key.to_string(),
            model: Model::get_instance(key),
            view: View::get_instance(key),
            controller: Controller::get_instance(key),
        }
    }

    /// The core key this facade fronts.
    pub fn key(&self) -> &str {
        &self.key
    }

    // Command mappings.

    /// Map a notification name to a command factory.
    pub fn register_command(&self, notification_name: &str, factory: CommandFactory) {
        self.controller.register_command(notification_name, factory);
    }

    /// Whether a command is mapped to `notification_name`.
    pub fn has_command(&self, notification_name: &str) -> bool {
        self.controller.has_command(notification_name)
    }

    /// Unmap a notification name from its command.
    pub fn remove_command(&self, notification_name: &str) {
        self.controller.remove_command(notification_name);
    }

    // Proxies.

    /// Register a proxy with the core's model.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        self.model.register_proxy(proxy);
    }

    /// Retrieve a proxy by name.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.retrieve_proxy(name)
    }

    /// Whether a proxy is registered under `name`.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.model.has_proxy(name)
    }

    /// Remove a proxy by name, returning it.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.remove_proxy(name)
    }

    // Mediators.

    /// Register a mediator with the core's view.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        self.view.register_mediator(mediator);
    }

    /// Retrieve a mediator by name.
    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.retrieve_mediator(name)
    }

    /// Whether a mediator is registered under `name`.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.view.has_mediator(name)
    }

    /// Remove a mediator by name, returning it.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.remove_mediator(name)
    }

    // Notifications.

    /// Dispatch a notification to its registered observers.
    pub fn notify_observers(&self, notification: &Notification) {
        self.view.notify_observers(notification);
    }

    /// Build and dispatch a notification in one step.
    pub fn send(&self, notification: Notification) {
        self.notify_observers(&notification);
    }

    /// Dispatch a notification with only a name.
    pub fn send_notification(&self, name: &str) {
        self.send(Notification::new(name));
    }

    /// Dispatch a notification with a payload body.
    pub fn send_notification_with_body(&self, name: &str, body: Payload) {
        self.send(Notification::new(name).with_body(body));
    }

    /// Dispatch a notification with a payload body and a kind discriminator.
    pub fn send_notification_with_kind(&self, name: &str, body: Payload, kind: &str) {
        self.send(Notification::new(name).with_body(body).with_kind(kind));
    }
}

impl std::fmt::Debug for Facade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Facade").field("key", &self.key).finish()
    }
}
