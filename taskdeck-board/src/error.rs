//! Error types for the board core

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors surfaced by board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Malformed create/update input; carries the field-level message
    #[error("invalid value for {field}: {message}")]
    Validation { field: String, message: String },

    /// No authenticated user in the session
    #[error("not authenticated")]
    Auth,

    /// Task vanished, e.g. deleted by a concurrent action
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Persistence collaborator unreachable or rejected the call
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl BoardError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a task-not-found error
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::TaskNotFound { id: id.into() }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Check whether retrying the same user action may succeed.
    /// The core itself never retries; the UI offers the action again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
