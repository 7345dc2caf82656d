//! Shared types for the Plume admin client
//!
//! Common types used across the workspace: data models for the storefront
//! REST API, the unified error system, the API response envelope, and the
//! product draft (variant composer) logic.

pub mod client;
pub mod draft;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use draft::{DraftError, ImportAxis, ProductDraft, VariantAxis, VariantEntry};
pub use error::{AdminError, AdminResult, ErrorCode};
pub use response::{ApiResponse, Paginated, Pagination};
