//! Error types for port operations.

/// Repository operation errors with context for debugging.
///
/// Absent records are not errors: repositories return `Ok(None)` or omit
/// them from a batch.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Store operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }
}
