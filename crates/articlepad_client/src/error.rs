//! Client error taxonomy.

use thiserror::Error;

/// Errors produced while talking to the article API.
///
/// UI callers collapse every variant into one "operation failed" message; the
/// variants exist for logs and for the CLI's exit diagnostics.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request failed ({status}): {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Response decode failed: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status for non-success responses.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
