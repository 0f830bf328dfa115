//! The message envelope broadcast through a core.
//!
//! A `Notification` carries a required name, an optional opaque body, and an
//! optional `kind` discriminator for observers that multiplex several
//! variants of the same notification name.

use std::fmt;

use crate::payload::Payload;

/// An immutable, named message with an optional payload.
///
/// Notifications are built with the `with_*` constructors and then handed to
/// a facade or view for dispatch:
///
/// ```
/// use mvckit::{Notification, Payload};
///
/// let note = Notification::new("user/saved")
///     .with_body(Payload::new("user-42".to_string()))
///     .with_kind("create");
/// assert_eq!(note.name(), "user/saved");
/// ```
#[derive(Debug, Clone)]
pub struct Notification {
    name: String,
    body: Option<Payload>,
    kind: Option<String>,
}

impl Notification {
    /// Create a notification with a name and no body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    /// Attach a payload body.
    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a kind discriminator.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The notification name. Observers are keyed by this value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The payload body, if one was attached.
    pub fn body(&self) -> Option<&Payload> {
        self.body.as_ref()
    }

    /// Borrow the body as `T`. `None` if there is no body or it holds a
    /// different type.
    pub fn body_as<T: std::any::Any>(&self) -> Option<&T> {
        self.body.as_ref()?.downcast_ref::<T>()
    }

    /// The kind discriminator, if one was attached.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification[{}]", self.name)?;
        match &self.body {
            Some(body) => write!(f, " body: {}", body.type_name())?,
            None => write!(f, " body: none")?,
        }
        match &self.kind {
            Some(kind) => write!(f, " kind: {}", kind),
            None => write!(f, " kind: none"),
        }
    }
}
