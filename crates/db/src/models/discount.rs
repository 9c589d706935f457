//! Discount coupon entity model and DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storedvd_core::types::{DbId, Timestamp};

/// A row from the `discounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Discount {
    pub id: DbId,
    pub code: String,
    /// Percentage reduction, in `[1, 100]`.
    pub percent_value: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new discount.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDiscount {
    pub code: String,
    pub percent_value: i32,
}

/// DTO for updating an existing discount.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDiscount {
    pub code: Option<String>,
    pub percent_value: Option<i32>,
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.code, self.percent_value)
    }
}
