//! Error codes shared between the admin client and the storefront API
//!
//! Codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Product/draft errors
//! - 3xxx: Order errors
//! - 4xxx: Media/upload errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the storefront backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Product/draft ====================
    /// Product not found
    ProductNotFound = 2001,
    /// Discount percentage outside [0, 100)
    DiscountOutOfRange = 2002,
    /// New product is missing images
    MissingImages = 2003,
    /// Serialized payload exceeds the byte budget
    PayloadTooLarge = 2004,

    // ==================== 3xxx: Order ====================
    /// Order not found
    OrderNotFound = 3001,
    /// Requested action is not valid for the order's current status
    IllegalOrderAction = 3002,

    // ==================== 4xxx: Media ====================
    /// Unsupported media type
    UnsupportedMedia = 4001,
    /// SVG markup too large to inline
    SvgTooLarge = 4002,
    /// SVG markup contains an embedded data URI image
    SvgEmbeddedImage = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Invalid credentials",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::ProductNotFound => "Product not found",
            Self::DiscountOutOfRange => "Discount percentage out of range",
            Self::MissingImages => "At least one product image is required",
            Self::PayloadTooLarge => "Payload exceeds the maximum size",
            Self::OrderNotFound => "Order not found",
            Self::IllegalOrderAction => "Action not allowed for order status",
            Self::UnsupportedMedia => "Unsupported media type",
            Self::SvgTooLarge => "SVG markup too large to inline",
            Self::SvgEmbeddedImage => "SVG markup contains embedded image data",
            Self::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error raised when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::RequiredField),
            7 => Ok(Self::ValueOutOfRange),
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            1003 => Ok(Self::TokenExpired),
            1004 => Ok(Self::TokenInvalid),
            2001 => Ok(Self::ProductNotFound),
            2002 => Ok(Self::DiscountOutOfRange),
            2003 => Ok(Self::MissingImages),
            2004 => Ok(Self::PayloadTooLarge),
            3001 => Ok(Self::OrderNotFound),
            3002 => Ok(Self::IllegalOrderAction),
            4001 => Ok(Self::UnsupportedMedia),
            4002 => Ok(Self::SvgTooLarge),
            4003 => Ok(Self::SvgEmbeddedImage),
            9001 => Ok(Self::InternalError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
