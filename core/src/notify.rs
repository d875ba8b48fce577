//! Transient user-facing messages raised by the gateway.

use std::time::Duration;

/// How long a notification stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Which mutation a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: Duration,
}

impl Notification {
    pub fn success(op: Operation) -> Self {
        let (title, description) = match op {
            Operation::Add => ("Success!", "Todo added successfully"),
            Operation::Update => ("Updated!", "Todo updated successfully"),
            Operation::Delete => ("Deleted!", "Todo deleted successfully"),
        };
        Self {
            kind: NotificationKind::Success,
            title,
            description,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn failure(op: Operation) -> Self {
        let description = match op {
            Operation::Add => "Failed to add todo",
            Operation::Update => "Failed to update todo",
            Operation::Delete => "Failed to delete todo",
        };
        Self {
            kind: NotificationKind::Failure,
            title: "Error",
            description,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}
