//! Customer order entity model and DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storedvd_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub needs_delivery: bool,
    /// Cleared (set to `None`) when the referenced discount is deleted.
    pub discount_id: Option<DbId>,
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    /// Shipping address; blank unless the order needs delivery.
    pub address: String,
    pub notice: String,
    pub order_date: Timestamp,
    pub ship_date: Option<Timestamp>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new order. Status always starts at New (1).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub needs_delivery: bool,
    pub discount_id: Option<DbId>,
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    /// Required (non-blank) when `needs_delivery` is true.
    pub address: Option<String>,
    pub notice: Option<String>,
}

/// DTO for updating an existing order. All fields are optional.
///
/// Status and ship date are deliberately absent; they move through
/// `OrderRepo::set_status` and `OrderRepo::mark_shipped` so the
/// lifecycle rules cannot be bypassed by a generic patch.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrder {
    pub needs_delivery: Option<bool>,
    pub discount_id: Option<DbId>,
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notice: Option<String>,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID:{}", self.id)
    }
}
