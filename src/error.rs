//! Unified application error types
//!
//! Provides a single error type for the crate's fallible setup paths,
//! suitable for returning to the UI shell. Runtime failures inside an
//! initialized session never surface through this type: the session
//! degrades and logs instead (see the session module).

use serde::Serialize;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Remote API error
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Serializable error response for the UI shell
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::Api(ApiError::Auth) => "AUTH_ERROR",
            AppError::Api(_) => "NETWORK_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        };
        Self {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

impl AppError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
