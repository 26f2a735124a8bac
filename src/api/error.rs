//! API error types

use thiserror::Error;

use crate::domain::TimestampError;

/// Errors raised while talking to the LiquidPlanner API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the credentials (401/403)
    #[error("authentication failed for {url} (HTTP {status}); check username and password")]
    Auth { url: String, status: u16 },

    /// Any other non-success status
    #[error("request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    /// Connection, DNS or I/O failure
    #[error("could not reach {url}: {message}")]
    Network { url: String, message: String },

    /// Response body is not the JSON we expect
    #[error("malformed response from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A task carries a timestamp we refuse to interpret
    #[error("task {task_id} has an unusable updated_at")]
    Timestamp {
        task_id: u64,
        #[source]
        source: TimestampError,
    },
}

impl ApiError {
    /// Maps an HTTP status to the matching error
    pub fn from_status(url: impl Into<String>, status: u16) -> Self {
        let url = url.into();
        match status {
            401 | 403 => ApiError::Auth { url, status },
            _ => ApiError::Status { url, status },
        }
    }

    /// Returns true for credential failures
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}
