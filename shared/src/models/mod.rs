//! Data models
//!
//! Shared between the admin client and the storefront REST API. Server
//! responses are deserialized defensively: optional fields default rather
//! than fail, and legacy wire shapes are normalized in [`wire`].

pub mod category;
pub mod collection;
pub mod filter;
pub mod hero_slide;
pub mod order;
pub mod product;
pub mod review;
pub mod store_settings;
pub mod upload;
pub mod wire;

// Re-exports
pub use category::*;
pub use collection::*;
pub use filter::*;
pub use hero_slide::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use store_settings::*;
pub use upload::*;
pub use wire::{StyleOptionWire, normalize_style_options, normalize_swatch};
