//! Command mapping registry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::components::command::CommandFactory;
use crate::components::traits::Command;
use crate::messaging::notification::Notification;
use crate::messaging::notifier::Notifier;
use crate::messaging::observer::{NotifyContext, Observer};
use crate::observability;
use crate::registry::view::View;

static INSTANCE_MAP: Lazy<RwLock<HashMap<String, Arc<Controller>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Maps notification names to command factories for one core.
///
/// When a name is first mapped, the controller subscribes an observer on the
/// core's view; the observer resolves the controller by key at dispatch
/// time, so nothing in the view pins the controller alive.
pub struct Controller {
    key: String,
    view: Arc<View>,
    command_map: RwLock<HashMap<String, CommandFactory>>,
}

impl Controller {
    /// Get the controller for `key`, creating it if this is the first use.
    pub fn get_instance(key: &str) -> Arc<Controller> {
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
                .or_insert_with(|| Arc::new(Controller::new(key))),
        )
    }

    /// Discard the controller for `key`. Unknown keys are ignored.
    pub fn remove_controller(key: &str) {
        if let Ok(mut map) = INSTANCE_MAP.write() {
            if map.remove(key).is_some() {
                tracing::debug!(core = %key, "Controller removed");
            }
        }
    }

    /// Look up an existing controller without creating one.
    fn instance(key: &str) -> Option<Arc<Controller>> {
        if let Ok(map) = INSTANCE_MAP.read() {
            map.get(key).cloned()
        } else {
            None
        }
    }

    fn new(key: &str) -> Self {
        tracing::debug!(core = %key, "Controller created");
        Self {
            key: key.to_string(),
            view: View::get_instance(key),
            command_map: RwLock::new(HashMap::new()),
        }
    }

    /// The core key this controller belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Map `notification_name` to a command factory.
    ///
    /// Re-mapping a name replaces the factory; the view observer is only
    /// registered the first time.
    pub fn register_command(&self, notification_name: &str, factory: CommandFactory) {
        let newly_mapped = if let Ok(mut map) = self.command_map.write() {
            map.insert(notification_name.to_string(), factory).is_none()
        } else {
            false
        };

        if newly_mapped {
            let key = self.key.clone();
            self.view.register_observer(
                notification_name,
                Observer::new(NotifyContext::Controller, move |note| {
                    if let Some(controller) = Controller::instance(&key) {
                        controller.execute_command(note);
                    }
                }),
            );
        }
        tracing::debug!(
            core = %self.key,
            notification = %notification_name,
            replaced = !newly_mapped,
            "Command registered"
        );
    }

    /// Instantiate and run the command mapped to the notification's name.
    /// Unmapped names are ignored.
    pub fn execute_command(&self, notification: &Notification) {
        let factory = if let Ok(map) = self.command_map.read() {
            map.get(notification.name()).cloned()
        } else {
            None
        };

        if let Some(factory) = factory {
            let command = factory();
            command.initialize_notifier(&self.key);
            tracing::trace!(
                core = %self.key,
                notification = %notification.name(),
                "Executing command"
            );
            observability::metrics().record_command_executed();
            command.execute(notification);
        }
    }

    /// Whether a command is mapped to `notification_name`.
    pub fn has_command(&self, notification_name: &str) -> bool {
        if let Ok(map) = self.command_map.read() {
            map.contains_key(notification_name)
        } else {
            false
        }
    }

    /// Unmap `notification_name` and unsubscribe the controller's observer
    /// for it. Unknown names are ignored.
    pub fn remove_command(&self, notification_name: &str) {
        let removed = if let Ok(mut map) = self.command_map.write() {
            map.remove(notification_name).is_some()
        } else {
            false
        };
        if removed {
            self.view
                .remove_observer(notification_name, &NotifyContext::Controller);
            tracing::debug!(
                core = %self.key,
                notification = %notification_name,
                "Command removed"
            );
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = if let Ok(map) = self.command_map.read() {
            map.len()
        } else {
            0
        };
        f.debug_struct("Controller")
            .field("key", &self.key)
            .field("commands", &count)
            .finish()
    }
}
