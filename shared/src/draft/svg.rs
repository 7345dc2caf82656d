//! SVG icon inlining
//!
//! Small style-option icons are stored as inline SVG markup directly in the
//! product payload; anything large, or anything smuggling raster data
//! through a data URI, must go through the upload endpoint instead.

use thiserror::Error;

/// Maximum character length of minified markup eligible for inlining
pub const MAX_INLINE_SVG_CHARS: usize = 50_000;

/// Why a piece of SVG markup cannot be inlined
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgInlineError {
    /// Minified markup still exceeds [`MAX_INLINE_SVG_CHARS`]
    #[error("svg markup is {0} characters after minification, over the inline limit")]
    TooLarge(usize),

    /// Markup embeds a raster image as a data URI
    #[error("svg markup embeds a data URI image; upload it as a file instead")]
    EmbeddedImage,
}

/// Minify SVG markup and decide whether it may be inlined.
///
/// Returns the minified markup, or the reason it must be uploaded as a file
/// instead.
pub fn inline_svg_icon(markup: &str) -> Result<String, SvgInlineError> {
    if markup.contains("data:image/") {
        return Err(SvgInlineError::EmbeddedImage);
    }
    let minified = minify(markup);
    if minified.chars().count() > MAX_INLINE_SVG_CHARS {
        return Err(SvgInlineError::TooLarge(minified.chars().count()));
    }
    Ok(minified)
}

/// Collapse whitespace runs to a single space and drop whitespace between
/// adjacent tags. Text content keeps single spaces, so this is safe for
/// icon-sized markup.
fn minify(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut pending_space = false;
    for ch in markup.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if !(out.ends_with('>') && ch == '<') {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(ch);
    }
    out
}
