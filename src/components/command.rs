//! Command execution helpers.

use std::sync::{Arc, Mutex};

use crate::components::traits::Command;
use crate::messaging::notification::Notification;
use crate::messaging::notifier::{CoreLink, Notifier};

/// Produces a fresh command instance for each execution.
pub type CommandFactory = Arc<dyn Fn() -> Box<dyn Command> + Send + Sync>;

/// A command that runs an ordered list of sub-commands.
///
/// Sub-commands execute first-in first-out, each created by its factory,
/// attached to the same core, and handed the same notification. The list
/// drains as it runs, so a macro command executes its sequence once.
pub struct MacroCommand {
    link: CoreLink,
    sub_commands: Mutex<Vec<CommandFactory>>,
}

impl MacroCommand {
    pub fn new() -> Self {
        Self {
            link: CoreLink::new(),
            sub_commands: Mutex::new(Vec::new()),
        }
    }

    /// Append a sub-command factory to the execution sequence.
    pub fn add_sub_command(&self, factory: CommandFactory) {
        if let Ok(mut subs) = self.sub_commands.lock() {
            subs.push(factory);
        }
    }

    /// Number of queued sub-commands.
    pub fn sub_command_count(&self) -> usize {
        if let Ok(subs) = self.sub_commands.lock() {
            subs.len()
        } else {
            0
        }
    }
}

impl Default for MacroCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for MacroCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for MacroCommand {
    fn execute(&self, notification: &Notification) {
        let factories: Vec<CommandFactory> = if let Ok(mut subs) = self.sub_commands.lock() {
            subs.drain(..).collect()
        } else {
            Vec::new()
        };

        let key = self.core_link().key();
        for factory in factories {
            let command = factory();
            if let Some(key) = &key {
                command.initialize_notifier(key);
            }
            command.execute(notification);
        }
    }
}
