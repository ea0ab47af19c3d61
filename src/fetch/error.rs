//! Errors produced while loading the record list.

use thiserror::Error;

/// Errors that can occur during a remote read.
///
/// `Clone` so the failure can live inside `FetchStatus` and still be handed
/// to the caller that awaited the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not complete (connect, timeout, body read).
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// The endpoint answered with a non-2xx status.
    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The body was not a JSON array of records.
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl FetchError {
    /// Stable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network_error",
            FetchError::UpstreamStatus { .. } => "upstream_status",
            FetchError::MalformedResponse { .. } => "malformed_response",
        }
    }

    /// True for failures where the payload never arrived intact.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::Network { .. } | FetchError::UpstreamStatus { .. }
        )
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse {
            reason: err.to_string(),
        }
    }
}
