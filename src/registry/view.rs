//! Mediator registry and notification dispatcher.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::components::traits::Mediator;
use crate::messaging::notification::Notification;
use crate::messaging::notifier::Notifier;
use crate::messaging::observer::{NotifyContext, Observer};
use crate::observability;

static INSTANCE_MAP: Lazy<RwLock<HashMap<String, Arc<View>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// The dispatch hub for one core.
///
/// Holds the mediator registry and the observer lists for every notification
/// name. Dispatch runs against a snapshot of the relevant list, so observers
/// may register or remove mediators and observers mid-notification without
/// deadlocking or invalidating the iteration.
pub struct View {
    key: String,
    mediator_map: RwLock<HashMap<String, Arc<dyn Mediator>>>,
    observer_map: RwLock<HashMap<String, Vec<Observer>>>,
}

impl View {
    /// Get the view for `key`, creating it if this is the first use.
    pub fn get_instance(key: &str) -> Arc<View> {
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
                .or_insert_with(|| Arc::new(View::new(key))),
        )
    }

    /// Discard the view for `key`. Unknown keys are ignored.
    pub fn remove_view(key: &str) {
        if let Ok(mut map) = INSTANCE_MAP.write() {
            if map.remove(key).is_some() {
                tracing::debug!(core = %key, "View removed");
            }
        }
    }

    fn new(key: &str) -> Self {
        tracing::debug!(core = %key, "View created");
        Self {
            key: key.to_string(),
            mediator_map: RwLock::new(HashMap::new()),
            observer_map: RwLock::new(HashMap::new()),
        }
    }

    /// The core key this view belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append an observer to the list for `notification_name`.
    pub fn register_observer(&self, notification_name: &str, observer: Observer) {
        if let Ok(mut map) = self.observer_map.write() {
            map.entry(notification_name.to_string())
                .or_default()
                .push(observer);
        }
    }

    /// Drop every observer for `notification_name` owned by `context`.
    /// Emptied lists are deleted.
    pub fn remove_observer(&self, notification_name: &str, context: &NotifyContext) {
        if let Ok(mut map) = self.observer_map.write() {
            if let Some(observers) = map.get_mut(notification_name) {
                observers.retain(|observer| !observer.compare_notify_context(context));
                if observers.is_empty() {
                    map.remove(notification_name);
                }
            }
        }
    }

    /// Invoke the observers registered for the notification's name, in
    /// registration order.
    pub fn notify_observers(&self, notification: &Notification) {
        // Snapshot the list so observers can re-enter this view.
        let observers: Vec<Observer> = if let Ok(map) = self.observer_map.read() {
            map.get(notification.name()).cloned().unwrap_or_default()
        } else {
            Vec::new()
        };

        tracing::trace!(
            core = %self.key,
            notification = %notification.name(),
            observers = observers.len(),
            "Dispatching notification"
        );
        observability::metrics().record_notification_dispatched(observers.len());

        for observer in &observers {
            observer.notify_observer(notification);
        }
    }

    /// Register a mediator under its name and subscribe it to its declared
    /// interests.
    ///
    /// The first registration of a name wins; a duplicate is ignored. The
    /// mediator's notifier is attached to this core before `on_register`
    /// runs.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        let name = mediator.name().to_string();
        if let Ok(mut map) = self.mediator_map.write() {
            if map.contains_key(&name) {
                tracing::debug!(core = %self.key, mediator = %name, "Mediator already registered");
                return;
            }
            map.insert(name.clone(), Arc::clone(&mediator));
        } else {
            return;
        }

        mediator.initialize_notifier(&self.key);

        let interests = mediator.notification_interests();
        if !interests.is_empty() {
            let target = Arc::clone(&mediator);
            let observer = Observer::new(NotifyContext::Mediator(name.clone()), move |note| {
                target.handle_notification(note);
            });
            for interest in &interests {
                self.register_observer(interest, observer.clone());
            }
        }

        tracing::debug!(
            core = %self.key,
            mediator = %name,
            interests = interests.len(),
            "Mediator registered"
        );
        observability::metrics().record_mediator_registered();
        mediator.on_register();
    }

    /// Retrieve the mediator registered under `name`.
    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        if let Ok(map) = self.mediator_map.read() {
            map.get(name).cloned()
        } else {
            None
        }
    }

    /// Whether a mediator is registered under `name`.
    pub fn has_mediator(&self, name: &str) -> bool {
        if let Ok(map) = self.mediator_map.read() {
            map.contains_key(name)
        } else {
            false
        }
    }

    /// Remove the mediator registered under `name`, unsubscribe its
    /// observers, invoke its `on_remove` hook, and return it.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        let removed = if let Ok(mut map) = self.mediator_map.write() {
            map.remove(name)
        } else {
            None
        };
        if let Some(mediator) = &removed {
            let context = NotifyContext::Mediator(name.to_string());
            for interest in mediator.notification_interests() {
                self.remove_observer(&interest, &context);
            }
            mediator.on_remove();
            tracing::debug!(core = %self.key, mediator = %name, "Mediator removed");
        }
        removed
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mediators = if let Ok(map) = self.mediator_map.read() {
            map.len()
        } else {
            0
        };
        let subscribed = if let Ok(map) = self.observer_map.read() {
            map.len()
        } else {
            0
        };
        f.debug_struct("View")
            .field("key", &self.key)
            .field("mediators", &mediators)
            .field("subscribed_names", &subscribed)
            .finish()
    }
}
