//! Notification sink that writes to the tracing log.

use super::ports::{NotificationPort, Severity};

/// Routes user notifications to `tracing` at the matching level.
///
/// Used when no UI is attached to show toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!(notification = %message, "User notification"),
            Severity::Error => tracing::error!(notification = %message, "User notification"),
        }
    }
}
