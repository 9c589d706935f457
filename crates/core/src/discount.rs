//! Validation rules for discount coupons.

use crate::error::CoreError;

/// Maximum length of a coupon code.
pub const MAX_DISCOUNT_CODE_LENGTH: usize = 10;

/// Smallest accepted discount, in percent.
pub const MIN_DISCOUNT_PERCENT: i32 = 1;

/// Largest accepted discount, in percent.
pub const MAX_DISCOUNT_PERCENT: i32 = 100;

/// Validate a coupon code: non-empty, trimmed, within the length limit.
pub fn validate_discount_code(code: &str) -> Result<(), CoreError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Coupon code must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_DISCOUNT_CODE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Coupon code exceeds maximum length of {MAX_DISCOUNT_CODE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a discount size: must fall within `[1, 100]` percent.
pub fn validate_percent_value(value: i32) -> Result<(), CoreError> {
    if !(MIN_DISCOUNT_PERCENT..=MAX_DISCOUNT_PERCENT).contains(&value) {
        return Err(CoreError::Validation(format!(
            "Discount must be between {MIN_DISCOUNT_PERCENT} and {MAX_DISCOUNT_PERCENT} percent"
        )));
    }
    Ok(())
}
