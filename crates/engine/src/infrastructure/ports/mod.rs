//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Record stores (characters, homebrew)
//! - Session auth and user notifications
//! - Device-local key/value storage

mod error;
mod external;
mod repos;

// =============================================================================
// Errors
// =============================================================================
pub use error::RepoError;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{CharacterRepo, HomebrewRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{AuthPort, KeyValueStore, NotificationPort, Severity};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCharacterRepo, MockHomebrewRepo};

#[cfg(test)]
pub use external::{MockAuthPort, MockKeyValueStore, MockNotificationPort};
