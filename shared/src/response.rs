//! API response envelope
//!
//! Every storefront API endpoint wraps its payload in the same envelope:
//!
//! ```json
//! {
//!     "code": 0,
//!     "message": "OK",
//!     "data": { ... }
//! }
//! ```
//!
//! Non-zero codes map to [`ErrorCode`](crate::error::ErrorCode) values.

use crate::error::{AdminError, ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Whether this envelope reports success
    pub fn is_success(&self) -> bool {
        matches!(self.code, Some(0) | None)
    }

    /// Convert the envelope into its data, or the error it carries.
    ///
    /// A success envelope without data is reported as an error so callers
    /// never have to unwrap an `Option`.
    pub fn into_data(self) -> Result<T, AdminError> {
        if self.is_success() {
            self.data.ok_or_else(|| {
                AdminError::with_message(ErrorCode::Unknown, "response missing data")
            })
        } else {
            let code = self
                .code
                .and_then(|c| ErrorCode::try_from(c).ok())
                .unwrap_or(ErrorCode::Unknown);
            Err(AdminError {
                code,
                message: self.message,
                details: self.details,
            })
        }
    }

    /// Check the envelope for success, discarding any data.
    ///
    /// Delete and action endpoints respond with `data: null`; this is the
    /// decode path for them.
    pub fn into_unit(self) -> Result<(), AdminError> {
        if self.is_success() {
            Ok(())
        } else {
            let code = self
                .code
                .and_then(|c| ErrorCode::try_from(c).ok())
                .unwrap_or(ErrorCode::Unknown);
            Err(AdminError {
                code,
                message: self.message,
                details: self.details,
            })
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            ((total as f64) / (per_page as f64)).ceil() as u32
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Paginated list wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// List of items
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}
