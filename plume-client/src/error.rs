//! Client error types

use shared::draft::DraftError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API reported an error in its response envelope
    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Draft failed validation before submission
    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    /// Serialized payload exceeds the byte budget; large assets should be
    /// uploaded as files rather than inlined (e.g. SVG markup)
    #[error(
        "payload is {size} bytes, over the {limit} byte limit; upload large assets as files instead of inlining them"
    )]
    PayloadTooLarge { size: usize, limit: usize },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
