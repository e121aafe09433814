//! Notifier that keeps every delivered notification.

use crate::board::ports::{Notification, Notifier};

/// Notifier recording notifications in delivery order.
///
/// Presentation layers drain it after each event to show pending messages.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    delivered: Vec<Notification>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delivered: Vec::new(),
        }
    }

    /// Returns the notifications delivered so far.
    #[must_use]
    pub fn delivered(&self) -> &[Notification] {
        &self.delivered
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.delivered.last()
    }

    /// Removes and returns every pending notification.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.delivered)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.delivered.push(notification);
    }
}
