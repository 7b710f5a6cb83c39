//! Error types for the runhook client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while resolving a token or triggering a job
#[derive(Debug, Error)]
pub enum ClientError {
    /// Metadata server could not be reached or its body could not be read
    #[error("metadata server unreachable: {0}")]
    ResolverUnreachable(#[source] reqwest::Error),

    /// Metadata server answered with a non-success status
    #[error("metadata server error (status {status}): {message}")]
    ResolverStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Token document is not JSON or lacks `access_token`
    #[error("malformed token document: {0}")]
    MalformedToken(#[from] serde_json::Error),

    /// Job-run API could not be reached
    #[error("job API unreachable: {0}")]
    JobApiUnreachable(#[source] reqwest::Error),
}

impl ClientError {
    /// Create a resolver status error from status code and body
    pub fn resolver_status(status: u16, message: impl Into<String>) -> Self {
        Self::ResolverStatus {
            status,
            message: message.into(),
        }
    }

    /// Check if this error was caused by a downstream service rather than by
    /// the data it returned
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::MalformedToken(_))
    }
}
