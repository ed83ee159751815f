/*
[INPUT]:  Error sources (transport, HTTP status, response decoding)
[OUTPUT]: Structured error type for task list/create operations
[POS]:    Error handling layer - unified error type for the HTTP client
[UPDATE]: When adding new error sources or changing user-facing messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task client
///
/// The `Display` text is what the user sees, so every variant reads as a
/// short sentence.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Transport failure (connection refused, DNS, bad URL, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// List endpoint answered with a non-2xx status
    #[error("Failed to load tasks (HTTP {status})")]
    LoadFailed { status: StatusCode },

    /// Create endpoint answered with a non-2xx status
    #[error("Failed to create task (HTTP {status})")]
    CreateFailed { status: StatusCode },

    /// Body of a successful list response was not JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl TaskError {
    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TaskError::LoadFailed { status } | TaskError::CreateFailed { status } => Some(*status),
            TaskError::Http(err) => err.status(),
            TaskError::InvalidResponse(_) => None,
        }
    }
}

/// Result type alias for task client operations
pub type Result<T> = std::result::Result<T, TaskError>;
