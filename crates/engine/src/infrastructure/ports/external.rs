//! Ports for collaborators outside the sheet: session auth, user-facing
//! notifications and device-local storage.

use std::fmt;

use async_trait::async_trait;

// =============================================================================
// Session
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Whether a user session is active. No store fetch may start otherwise.
    async fn ensure_authenticated(&self) -> bool;
}

// =============================================================================
// Notifications
// =============================================================================

/// `Info` confirms a change the user made; `Error` reports a sheet that
/// could not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

// =============================================================================
// Device-local key/value storage
// =============================================================================

/// String storage that never leaves the device.
///
/// Failures are logged by the implementation and never surface: a failed
/// `save` loses the write, a failed `load` reads as absent.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}
