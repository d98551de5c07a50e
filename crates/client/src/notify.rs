//! Transient toast notifications.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use bistro_core::reservation::RESERVATION_SENT_MESSAGE;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short-lived message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// A success toast for a sent reservation, falling back to the standard
    /// confirmation when the server gave no message.
    pub fn sent(message: Option<String>) -> Self {
        Self::success(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| RESERVATION_SENT_MESSAGE.to_string()),
        )
    }

    /// An error toast, falling back to a generic message when the server
    /// gave none (or an empty one).
    pub fn error(message: Option<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Receives notifications for display.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A [`Notifier`] that buffers toasts until the UI drains them.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Mutex<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(notification);
    }
}
