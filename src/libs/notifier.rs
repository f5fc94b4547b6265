//! Notification sinks for controller outcomes.
//!
//! The controller never prints on its own. It hands every outcome to a
//! [`Notifier`], so the terminal front end and tests can decide what a
//! notification turns into.

use crate::libs::messages::{self, Level, Message};
use crate::{msg_error, msg_info, msg_success, msg_warning};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: Level,
    pub message: Message,
}

impl Notification {
    pub fn new(level: Level, message: Message) -> Self {
        Self { level, message }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", messages::decorate(self.level, self.message.clone()))
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);

    fn info(&mut self, message: Message) {
        self.notify(Notification::new(Level::Info, message));
    }

    fn success(&mut self, message: Message) {
        self.notify(Notification::new(Level::Success, message));
    }

    fn warning(&mut self, message: Message) {
        self.notify(Notification::new(Level::Warning, message));
    }

    fn error(&mut self, message: Message) {
        self.notify(Notification::new(Level::Error, message));
    }
}

/// Writes notifications to the terminal through the `msg_*` macros.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            Level::Info => msg_info!(notification.message),
            Level::Success => msg_success!(notification.message),
            Level::Warning => msg_warning!(notification.message),
            Level::Error => msg_error!(notification.message),
        }
    }
}

/// Keeps notifications in memory, oldest first.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notifications: Vec<Notification>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
