//! Proxy registry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::components::traits::Proxy;
use crate::messaging::notifier::Notifier;
use crate::observability;

static INSTANCE_MAP: Lazy<RwLock<HashMap<String, Arc<Model>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Registry of [`Proxy`] instances for one core, keyed by proxy name.
///
/// Registration hands every caller the same shared instance back on lookup,
/// so data written through one handle is observable through another.
pub struct Model {
    key: String,
    proxy_map: RwLock<HashMap<String, Arc<dyn Proxy>>>,
}

impl Model {
    /// Get the model for `key`, creating it if this is the first use.
    pub fn get_instance(key: &str) -> Arc<Model> {
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
                .or_insert_with(|| Arc::new(Model::new(key))),
        )
    }

    /// Discard the model for `key`. Unknown keys are ignored.
    pub fn remove_model(key: &str) {
        if let Ok(mut map) = INSTANCE_MAP.write() {
            if map.remove(key).is_some() {
                tracing::debug!(core = %key, "Model removed");
            }
        }
    }

    fn new(key: &str) -> Self {
        tracing::debug!(core = %key, "Model created");
        Self {
            key: key.to_string(),
            proxy_map: RwLock::new(HashMap::new()),
        }
    }

    /// The core key this model belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register a proxy under its name, replacing any previous holder of
    /// that name. Attaches the proxy's notifier to this core, then invokes
    /// `on_register`.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        proxy.initialize_notifier(&self.key);
        let name = proxy.name().to_string();
        if let Ok(mut map) = self.proxy_map.write() {
            map.insert(name.clone(), Arc::clone(&proxy));
        }
        tracing::debug!(core = %self.key, proxy = %name, "Proxy registered");
        observability::metrics().record_proxy_registered();
        proxy.on_register();
    }

    /// Retrieve the proxy registered under `name`.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        if let Ok(map) = self.proxy_map.read() {
            map.get(name).cloned()
        } else {
            None
        }
    }

    /// Whether a proxy is registered under `name`.
    pub fn has_proxy(&self, name: &str) -> bool {
        if let Ok(map) = self.proxy_map.read() {
            map.contains_key(name)
        } else {
            false
        }
    }

    /// Remove the proxy registered under `name`, invoke its `on_remove`
    /// hook, and return it. `None` if the name is unknown.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        let removed = if let Ok(mut map) = self.proxy_map.write() {
            map.remove(name)
        } else {
            None
        };
        if let Some(proxy) = &removed {
            proxy.on_remove();
            tracing::debug!(core = %self.key, proxy = %name, "Proxy removed");
        }
        removed
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = if let Ok(map) = self.proxy_map.read() {
            map.len()
        } else {
            0
        };
        f.debug_struct("Model")
            .field("key", &self.key)
            .field("proxies", &count)
            .finish()
    }
}
