//! Observer entries held in a view's dispatch table.

use std::fmt;
use std::sync::Arc;

use crate::messaging::notification::Notification;

/// Callback invoked when a matching notification is dispatched.
pub type NotifyFn = Arc<dyn Fn(&Notification) + Send + Sync>;

/// Identity of the component that owns an observer registration.
///
/// Observer lists are pruned by owner, not by callback identity: removing a
/// mediator drops every observer whose context names that mediator, and
/// unmapping a command drops the controller's observer for that notification
/// name. Contexts compare by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotifyContext {
    /// The core's controller, dispatching mapped commands.
    Controller,
    /// A mediator, identified by its registered name.
    Mediator(String),
    /// A caller-chosen tag for observers registered directly.
    Token(String),
}

/// A notify callback paired with the context that registered it.
#[derive(Clone)]
pub struct Observer {
    context: NotifyContext,
    notify: NotifyFn,
}

impl Observer {
    /// Create an observer owned by `context`.
    pub fn new(
        context: NotifyContext,
        notify: impl Fn(&Notification) + Send + Sync + 'static,
    ) -> Self {
        Self {
            context,
            notify: Arc::new(notify),
        }
    }

    /// Invoke the callback with the given notification.
    pub fn notify_observer(&self, notification: &Notification) {
        (self.notify)(notification);
    }

    /// Check whether this observer is owned by the given context.
    pub fn compare_notify_context(&self, context: &NotifyContext) -> bool {
        &self.context == context
    }

    /// The owning context.
    pub fn context(&self) -> &NotifyContext {
        &self.context
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .finish()
    }
}
