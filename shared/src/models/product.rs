//! Product Model
//!
//! The product resource with its variant axes (sizes, colours, fabrics,
//! style groups), optional add-ons, and presentation content. Server
//! responses are tolerated generously: most fields default when absent so
//! legacy records still hydrate.

use super::wire::StyleOptionWire;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Size entry: a named size with a price delta over the base price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub name: String,
    #[serde(default)]
    pub price_delta: f64,
}

/// Colour swatch: current records use `hex_code`, legacy ones `image`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Per-fabric colour swatch with an image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FabricColor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Fabric entry with nested colour swatches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fabric {
    pub name: String,
    /// Shared fabrics are reused across products by the storefront
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub colors: Vec<FabricColor>,
}

/// Style option inside a style group
///
/// Deserializes from either the legacy bare-string shape or the full object
/// shape (see [`StyleOptionWire`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StyleOptionWire")]
pub struct StyleOption {
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub price_delta: f64,
    /// Size names this option applies to; empty means all sizes
    #[serde(default)]
    pub sizes: Vec<String>,
}

/// Named group of mutually exclusive style options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleGroup {
    pub name: String,
    #[serde(default)]
    pub options: Vec<StyleOption>,
}

/// Mattress add-on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MattressOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub price: f64,
    /// Product this add-on was imported from, for reuse across products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_product: Option<i64>,
}

/// One measurement row of the dimension table
///
/// `values` maps size column names to free-text cell values such as
/// `"90 cm (35.4\")"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionRow {
    pub measurement: String,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

/// FAQ entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Free-text section with a custom title (delivery, returns)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoSection {
    pub title: String,
    pub body: String,
}

/// Arbitrary custom info tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoTab {
    pub title: String,
    pub body: String,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    /// Category reference (required)
    pub category: i64,
    #[serde(default)]
    pub subcategory: Option<i64>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub delivery_charge: Option<f64>,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub show_size_icons: bool,
    /// Ordered image URLs
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    #[serde(default)]
    pub colors: Vec<ColorSwatch>,
    #[serde(default)]
    pub fabrics: Vec<Fabric>,
    #[serde(default)]
    pub styles: Vec<StyleGroup>,
    #[serde(default)]
    pub mattresses: Vec<MattressOption>,
    #[serde(default)]
    pub dimensions: Vec<DimensionRow>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub delivery_info: Option<InfoSection>,
    #[serde(default)]
    pub returns_info: Option<InfoSection>,
    #[serde(default)]
    pub custom_tabs: Vec<InfoTab>,
    /// Assigned filter option IDs (category-scoped)
    #[serde(default)]
    pub filter_options: Vec<i64>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Create/update product payload
///
/// Produced by normalizing a [`ProductDraft`](crate::draft::ProductDraft).
/// Empty optional collections are omitted entirely rather than sent as `[]`
/// so partial edits do not overwrite server-side defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub category: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<i64>,
    pub price: f64,
    pub discount_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_charge: Option<f64>,
    pub is_bestseller: bool,
    pub is_new: bool,
    pub show_size_icons: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<SizeOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ColorSwatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabrics: Option<Vec<Fabric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<StyleGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mattresses: Option<Vec<MattressOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<DimensionRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<InfoSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns_info: Option<InfoSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tabs: Option<Vec<InfoTab>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<Vec<i64>>,
}

/// Partial product update payload (PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_charge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bestseller: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_size_icons: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<Vec<i64>>,
}
