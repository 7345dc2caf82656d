//! Derived price computation

use super::DraftError;

/// Round to 2 decimal places (currency display precision)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the pre-discount "original price" shown struck through on the
/// storefront.
///
/// With a positive discount the original price is derived as
/// `price / (1 - discount/100)` rounded to 2 decimals; the explicit value is
/// ignored. With no discount the explicit original price (if any) passes
/// through. A discount of 100 or more would make the divisor non-positive
/// and is rejected, as is a negative discount or price.
pub fn compute_original_price(
    price: f64,
    discount_percent: f64,
    explicit: Option<f64>,
) -> Result<Option<f64>, DraftError> {
    if !(0.0..100.0).contains(&discount_percent) {
        return Err(DraftError::DiscountOutOfRange(discount_percent));
    }
    if price < 0.0 {
        return Err(DraftError::NegativePrice(price));
    }
    if discount_percent > 0.0 {
        Ok(Some(round2(price / (1.0 - discount_percent / 100.0))))
    } else {
        Ok(explicit)
    }
}
