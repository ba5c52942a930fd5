//! API error types

use reqwest::StatusCode;
use thiserror::Error;

/// Remote API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("unexpected status {0} from {1} endpoint")]
    Status(StatusCode, String),

    /// No authenticated session. Not a failure at the session layer:
    /// favorites simply stay local.
    #[error("not authenticated")]
    Auth,

    /// Response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Whether this error means "no authenticated session"
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth)
    }
}
