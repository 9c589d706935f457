//! Validation rules for the product catalog: sections and products.

use chrono::{Datelike, Utc};

use crate::error::CoreError;

/// Maximum length of a section title.
pub const MAX_SECTION_TITLE_LENGTH: usize = 70;

/// Maximum length of a product title.
pub const MAX_PRODUCT_TITLE_LENGTH: usize = 70;

/// Maximum length of a product's country of origin.
pub const MAX_COUNTRY_LENGTH: usize = 70;

/// Maximum length of a product's director credit.
pub const MAX_DIRECTOR_LENGTH: usize = 70;

/// Earliest accepted release year.
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// Validate a section title: must be non-empty, trimmed, and within
/// the maximum length limit. Uniqueness is a database constraint.
pub fn validate_section_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Section title must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_SECTION_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Section title exceeds maximum length of {MAX_SECTION_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a product title: must be non-empty, trimmed, and within
/// the maximum length limit.
pub fn validate_product_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Product title must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_PRODUCT_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Product title exceeds maximum length of {MAX_PRODUCT_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a product's country of origin.
pub fn validate_country(country: &str) -> Result<(), CoreError> {
    let trimmed = country.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Country must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_COUNTRY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Country exceeds maximum length of {MAX_COUNTRY_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a product's director credit.
pub fn validate_director(director: &str) -> Result<(), CoreError> {
    let trimmed = director.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Director must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_DIRECTOR_LENGTH {
        return Err(CoreError::Validation(format!(
            "Director exceeds maximum length of {MAX_DIRECTOR_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a release year: must fall within `[1900, current UTC year]`.
pub fn validate_release_year(year: i32) -> Result<(), CoreError> {
    let current = Utc::now().year();
    if year < MIN_RELEASE_YEAR || year > current {
        return Err(CoreError::Validation(format!(
            "Release year must be between {MIN_RELEASE_YEAR} and {current}"
        )));
    }
    Ok(())
}

/// Validate a film running time: must be a positive number of seconds.
pub fn validate_duration_secs(secs: i32) -> Result<(), CoreError> {
    if secs <= 0 {
        return Err(CoreError::Validation(
            "Duration must be a positive number of seconds".to_string(),
        ));
    }
    Ok(())
}
