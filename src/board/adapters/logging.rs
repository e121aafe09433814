//! Notifier that forwards notifications to `tracing`.

use crate::board::ports::{Notification, Notifier, Severity};

/// Emits each notification as a structured log event.
///
/// Success messages are logged at `info`, errors at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success => {
                tracing::info!(target: "taskboard::notify", message = %notification.message);
            }
            Severity::Error => {
                tracing::warn!(target: "taskboard::notify", message = %notification.message);
            }
        }
    }
}
