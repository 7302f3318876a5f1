//! Mutation outcomes reported to the user.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verb = match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{}", verb)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Created { title: String },
    Updated { title: String },
    Deleted { title: String },
    Failed { action: Action, reason: String },
}

impl Notification {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notification::Failed { .. })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notification::Created { title } => write!(f, "Created: {}", title),
            Notification::Updated { title } => write!(f, "Updated: {}", title),
            Notification::Deleted { title } => write!(f, "Deleted: {}", title),
            Notification::Failed { action, reason } => {
                write!(f, "Could not {} event: {}", action, reason)
            }
        }
    }
}

/// Receives mutation outcomes. Fire-and-forget: nothing is returned.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Sends notifications to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        if notification.is_failure() {
            tracing::warn!("{notification}");
        } else {
            tracing::info!("{notification}");
        }
    }
}
