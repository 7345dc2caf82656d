//! Product Variant Composer
//!
//! The draft is the in-memory, form-bound representation of a product being
//! created or edited. It is created fresh or hydrated from a fetched
//! [`Product`](crate::models::Product), mutated through form interactions,
//! normalized into a [`ProductPayload`](crate::models::ProductPayload) on
//! submit, and discarded once the create/update call resolves.
//!
//! This module holds the pure half of the composer: draft state, validation,
//! derived-field computation, dimension adjustment, import-merge, and payload
//! normalization. The network half (load/import/submit) lives in the client
//! crate.

mod dimensions;
mod import;
mod normalize;
mod pricing;
mod state;
mod svg;

pub use dimensions::{
    WINGBACK_KEYWORD, WINGBACK_WIDTH_OFFSET_CM, adjust_dimensions_for_style,
    style_triggers_adjustment,
};
pub use import::ImportAxis;
pub use pricing::{compute_original_price, round2};
pub use state::{ProductDraft, VariantAxis, VariantEntry};
pub use svg::{MAX_INLINE_SVG_CHARS, SvgInlineError, inline_svg_icon};

use crate::error::{AdminError, ErrorCode};
use thiserror::Error;

/// Validation failure raised before submission.
///
/// Each variant names the first offending field; no network call is made
/// once validation fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    /// A required field is empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A new product has no images
    #[error("at least one product image is required")]
    MissingImages,

    /// Discount percentage outside [0, 100); 100 or more would imply a
    /// non-positive derived original price
    #[error("discount must be at least 0 and below 100 percent, got {0}")]
    DiscountOutOfRange(f64),

    /// Negative base price
    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),
}

impl From<DraftError> for AdminError {
    fn from(err: DraftError) -> Self {
        let code = match &err {
            DraftError::MissingField(_) => ErrorCode::RequiredField,
            DraftError::MissingImages => ErrorCode::MissingImages,
            DraftError::DiscountOutOfRange(_) => ErrorCode::DiscountOutOfRange,
            DraftError::NegativePrice(_) => ErrorCode::ValueOutOfRange,
        };
        let mut admin = AdminError::with_message(code, err.to_string());
        if let DraftError::MissingField(field) = err {
            admin = admin.with_detail("field", field);
        }
        admin
    }
}
