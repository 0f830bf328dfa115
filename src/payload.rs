//! Opaque payload handle shared between proxies, mediators, and notifications.
//!
//! Application data moves through the framework without the framework knowing
//! its type. `Payload` wraps any `Send + Sync` value behind a shared pointer,
//! so cloning a payload aliases the same value rather than copying it. The
//! concrete type is recovered at the edges with the downcast accessors.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{PayloadError, PayloadResult};

/// A cheaply cloneable, type-erased handle to an application value.
///
/// The source type name is captured at construction so mismatched downcasts
/// can report what the payload actually holds.
///
/// # Example
///
/// ```
/// use mvckit::Payload;
///
/// let payload = Payload::new(vec!["red".to_string(), "green".to_string()]);
/// let colors = payload.downcast_ref::<Vec<String>>().unwrap();
/// assert_eq!(colors[0], "red");
/// ```
#[derive(Clone)]
pub struct Payload {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Payload {
    /// Wrap a value in a shared, type-erased handle.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Check whether the payload holds a value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the payload as `T`, or `None` if it holds a different type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Get a shared pointer to the payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::TypeMismatch` naming the stored and requested
    /// types when the payload holds something else.
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> PayloadResult<Arc<T>> {
        Arc::clone(&self.value)
            .downcast::<T>()
            .map_err(|_| PayloadError::TypeMismatch {
                stored: self.type_name,
                requested: std::any::type_name::<T>(),
            })
    }

    /// Name of the type the payload was constructed from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether two payloads alias the same underlying value.
    pub fn shares_value(&self, other: &Payload) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("type", &self.type_name)
            .finish()
    }
}
