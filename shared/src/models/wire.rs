//! Legacy wire-shape adapters
//!
//! Older storefront records serialize style options as bare label strings
//! while current ones use full objects, and colour swatches may carry a
//! legacy `image` field instead of `hex_code`. Every shape is mapped into
//! one canonical type on ingestion; raw heterogeneity never leaves this
//! module.

use super::product::{ColorSwatch, StyleOption};
use serde::Deserialize;

/// Style option as it may appear on the wire.
///
/// Legacy records store a plain label string, current records a full object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StyleOptionWire {
    /// Legacy shape: the option label only
    Label(String),
    /// Current shape: full option object
    Full(StyleOptionRecord),
}

/// Field-level record for the current style option shape.
///
/// Every field is defaulted so partially-filled legacy objects still parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleOptionRecord {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub price_delta: f64,
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl From<StyleOptionWire> for StyleOption {
    fn from(wire: StyleOptionWire) -> Self {
        match wire {
            StyleOptionWire::Label(label) => StyleOption {
                label,
                ..StyleOption::default()
            },
            StyleOptionWire::Full(rec) => StyleOption {
                label: rec.label,
                description: rec.description,
                icon: rec.icon,
                price_delta: rec.price_delta,
                sizes: rec.sizes,
            },
        }
    }
}

impl From<StyleOption> for StyleOptionWire {
    fn from(opt: StyleOption) -> Self {
        StyleOptionWire::Full(StyleOptionRecord {
            label: opt.label,
            description: opt.description,
            icon: opt.icon,
            price_delta: opt.price_delta,
            sizes: opt.sizes,
        })
    }
}

/// Map a mixed list of wire-shaped style options into canonical options.
///
/// Idempotent: running canonical options back through produces the same
/// result.
pub fn normalize_style_options(options: Vec<StyleOptionWire>) -> Vec<StyleOption> {
    options.into_iter().map(StyleOption::from).collect()
}

/// Normalize a colour swatch in place: prefer `hex_code`, fall back to the
/// legacy `image` field, and log when a named swatch has neither.
pub fn normalize_swatch(mut swatch: ColorSwatch) -> ColorSwatch {
    if swatch.hex_code.as_deref().is_some_and(|h| !h.trim().is_empty()) {
        // hex wins; a stale legacy image is dropped
        swatch.image = None;
    } else if swatch.image.as_deref().is_none_or(|i| i.trim().is_empty()) {
        swatch.hex_code = None;
        swatch.image = None;
        if !swatch.name.trim().is_empty() {
            tracing::warn!(name = %swatch.name, "colour swatch has neither hex_code nor image");
        }
    }
    swatch
}
