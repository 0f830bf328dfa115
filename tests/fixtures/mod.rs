//! Shared test components.
//!
//! In-memory proxies, mediators, and commands that record what the framework
//! does to them, so the suites can verify lifecycle hooks, dispatch order,
//! and notifier attachment.

// Each suite uses a subset of these.
#![allow(dead_code)]

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use mvckit::{Command, CoreLink, Mediator, Notification, Notifier, Payload, Proxy, View};

/// Data value stored by `RecordingProxy::on_register`.
pub const ON_REGISTER_CALLED: &str = "onRegister called";

/// Data value stored by `RecordingProxy::on_remove`.
pub const ON_REMOVE_CALLED: &str = "onRemove called";

/// Proxy that writes into its own data slot when its lifecycle hooks run.
pub struct RecordingProxy {
    name: String,
    data: RwLock<Option<Payload>>,
    link: CoreLink,
}

impl RecordingProxy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: RwLock::new(None),
            link: CoreLink::new(),
        }
    }
}

impl Notifier for RecordingProxy {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Proxy for RecordingProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> Option<Payload> {
        self.data.read().unwrap().clone()
    }

    fn set_data(&self, data: Payload) {
        *self.data.write().unwrap() = Some(data);
    }

    fn on_register(&self) {
        self.set_data(Payload::new(ON_REGISTER_CALLED.to_string()));
    }

    fn on_remove(&self) {
        self.set_data(Payload::new(ON_REMOVE_CALLED.to_string()));
    }
}

/// Proxy that broadcasts a notification as soon as it is registered.
pub struct AnnouncingProxy {
    name: String,
    announcement: String,
    data: RwLock<Option<Payload>>,
    link: CoreLink,
}

impl AnnouncingProxy {
    pub fn new(name: impl Into<String>, announcement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            announcement: announcement.into(),
            data: RwLock::new(None),
            link: CoreLink::new(),
        }
    }
}

impl Notifier for AnnouncingProxy {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Proxy for AnnouncingProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> Option<Payload> {
        self.data.read().unwrap().clone()
    }

    fn set_data(&self, data: Payload) {
        *self.data.write().unwrap() = Some(data);
    }

    fn on_register(&self) {
        self.send_notification(&self.announcement);
    }
}

/// Mediator that appends every handled notification name to a shared log.
pub struct EchoMediator {
    name: String,
    interests: Vec<String>,
    log: Arc<Mutex<Vec<String>>>,
    view: RwLock<Option<Payload>>,
    link: CoreLink,
}

impl EchoMediator {
    pub fn new(
        name: impl Into<String>,
        interests: Vec<String>,
        log: Arc<Mutex<Vec<String>>>,
    ) -> Self {
        Self {
            name: name.into(),
            interests,
            log,
            view: RwLock::new(None),
            link: CoreLink::new(),
        }
    }
}

impl Notifier for EchoMediator {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Mediator for EchoMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn view_component(&self) -> Option<Payload> {
        self.view.read().unwrap().clone()
    }

    fn set_view_component(&self, component: Payload) {
        *self.view.write().unwrap() = Some(component);
    }

    fn notification_interests(&self) -> Vec<String> {
        self.interests.clone()
    }

    fn handle_notification(&self, notification: &Notification) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, notification.name()));
    }
}

/// Mediator that registers a companion mediator while handling a
/// notification, exercising re-entrant view access during dispatch.
pub struct ReentrantMediator {
    name: String,
    interest: String,
    core_key: String,
    companion: Mutex<Option<Arc<dyn Mediator>>>,
    view: RwLock<Option<Payload>>,
    link: CoreLink,
}

impl ReentrantMediator {
    pub fn new(
        name: impl Into<String>,
        interest: impl Into<String>,
        core_key: impl Into<String>,
        companion: Arc<dyn Mediator>,
    ) -> Self {
        Self {
            name: name.into(),
            interest: interest.into(),
            core_key: core_key.into(),
            companion: Mutex::new(Some(companion)),
            view: RwLock::new(None),
            link: CoreLink::new(),
        }
    }
}

impl Notifier for ReentrantMediator {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Mediator for ReentrantMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn view_component(&self) -> Option<Payload> {
        self.view.read().unwrap().clone()
    }

    fn set_view_component(&self, component: Payload) {
        *self.view.write().unwrap() = Some(component);
    }

    fn notification_interests(&self) -> Vec<String> {
        vec![self.interest.clone()]
    }

    fn handle_notification(&self, _notification: &Notification) {
        if let Some(companion) = self.companion.lock().unwrap().take() {
            View::get_instance(&self.core_key).register_mediator(companion);
        }
    }
}

/// Input for `DoublingCommand`: the command writes `value * 2` into `result`.
pub struct DoublerInput {
    pub value: i32,
    pub result: AtomicI32,
}

impl DoublerInput {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            result: AtomicI32::new(0),
        }
    }

    pub fn result(&self) -> i32 {
        self.result.load(Ordering::SeqCst)
    }
}

/// Command that doubles the notification body's input value.
pub struct DoublingCommand {
    link: CoreLink,
}

impl DoublingCommand {
    pub fn new() -> Self {
        Self {
            link: CoreLink::new(),
        }
    }
}

impl Notifier for DoublingCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for DoublingCommand {
    fn execute(&self, notification: &Notification) {
        if let Some(input) = notification.body_as::<DoublerInput>() {
            input.result.store(input.value * 2, Ordering::SeqCst);
        }
    }
}

/// Input for the macro command steps: one slot per step result.
pub struct SequenceInput {
    pub value: i32,
    pub doubled: AtomicI32,
    pub squared: AtomicI32,
}

impl SequenceInput {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            doubled: AtomicI32::new(0),
            squared: AtomicI32::new(0),
        }
    }
}

/// First macro step: writes `value * 2` into `doubled`.
pub struct DoubleStep {
    link: CoreLink,
}

impl DoubleStep {
    pub fn new() -> Self {
        Self {
            link: CoreLink::new(),
        }
    }
}

impl Notifier for DoubleStep {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for DoubleStep {
    fn execute(&self, notification: &Notification) {
        if let Some(input) = notification.body_as::<SequenceInput>() {
            input.doubled.store(input.value * 2, Ordering::SeqCst);
        }
    }
}

/// Second macro step: writes `value * value` into `squared`.
pub struct SquareStep {
    link: CoreLink,
}

impl SquareStep {
    pub fn new() -> Self {
        Self {
            link: CoreLink::new(),
        }
    }
}

impl Notifier for SquareStep {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for SquareStep {
    fn execute(&self, notification: &Notification) {
        if let Some(input) = notification.body_as::<SequenceInput>() {
            input.squared.store(input.value * input.value, Ordering::SeqCst);
        }
    }
}
