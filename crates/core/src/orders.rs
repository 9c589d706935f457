//! Validation rules for customer orders.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length of a customer name.
pub const MAX_CUSTOMER_NAME_LENGTH: usize = 70;

/// Maximum length of a phone number.
pub const MAX_PHONE_LENGTH: usize = 70;

/// Validate a customer name: non-empty, trimmed, within the length limit.
pub fn validate_customer_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Customer name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_CUSTOMER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Customer name exceeds maximum length of {MAX_CUSTOMER_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a phone number: non-empty, trimmed, within the length limit.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Phone number must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_PHONE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Phone number exceeds maximum length of {MAX_PHONE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// A delivery order must carry a non-blank shipping address.
pub fn validate_delivery_address(needs_delivery: bool, address: &str) -> Result<(), CoreError> {
    if needs_delivery && address.trim().is_empty() {
        return Err(CoreError::Validation(
            "Address must be provided when delivery is requested".to_string(),
        ));
    }
    Ok(())
}
