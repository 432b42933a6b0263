//! Error types for the Gantry GitHub client

use std::time::Duration;
use thiserror::Error;

use crate::throttle::LimitKind;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the GitHub client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// A rate limit was hit and the throttle policy chose not to wait it out
    #[error("{kind} hit, retry after {}s", .retry_after.as_secs())]
    RateLimited {
        kind: LimitKind,
        retry_after: Duration,
    },

    /// GitHub App authentication failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}
