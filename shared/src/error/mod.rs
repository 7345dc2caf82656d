//! Unified error system for the Plume admin client
//!
//! - [`ErrorCode`]: standardized error codes shared with the storefront API
//! - [`AdminError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Product/draft errors
//! - 3xxx: Order errors
//! - 4xxx: Media/upload errors
//! - 9xxx: System errors

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AdminError, AdminResult};
