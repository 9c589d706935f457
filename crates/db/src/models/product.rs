//! Product entity model and DTOs.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storedvd_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    /// Detached (set to `None`) when the referenced section is deleted.
    pub section_id: Option<DbId>,
    pub title: String,
    /// Path of the stored cover image, relative to the media root.
    pub image_path: String,
    pub price: Decimal,
    pub release_year: i32,
    pub country: String,
    pub director: String,
    /// Running time in seconds, when known.
    pub duration_secs: Option<i32>,
    pub cast: String,
    pub description: String,
    pub added_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub section_id: Option<DbId>,
    pub title: String,
    pub image_path: String,
    pub price: Decimal,
    pub release_year: i32,
    pub country: String,
    pub director: String,
    pub duration_secs: Option<i32>,
    pub cast: String,
    pub description: String,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub section_id: Option<DbId>,
    pub title: Option<String>,
    pub image_path: Option<String>,
    pub price: Option<Decimal>,
    pub release_year: Option<i32>,
    pub country: Option<String>,
    pub director: Option<String>,
    pub duration_secs: Option<i32>,
    pub cast: Option<String>,
    pub description: Option<String>,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}
