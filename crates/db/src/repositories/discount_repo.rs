//! Repository for the `discounts` table.

use sqlx::PgPool;
use storedvd_core::discount::{validate_discount_code, validate_percent_value};
use storedvd_core::types::DbId;

use crate::error::DbError;
use crate::models::discount::{CreateDiscount, Discount, UpdateDiscount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, percent_value, created_at, updated_at";

/// Provides CRUD operations for discount coupons.
pub struct DiscountRepo;

impl DiscountRepo {
    /// Insert a new discount, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDiscount) -> Result<Discount, DbError> {
        validate_discount_code(&input.code)?;
        validate_percent_value(input.percent_value)?;
        let query = format!(
            "INSERT INTO discounts (code, percent_value)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let discount = sqlx::query_as::<_, Discount>(&query)
            .bind(&input.code)
            .bind(input.percent_value)
            .fetch_one(pool)
            .await?;
        Ok(discount)
    }

    /// Find a discount by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Discount>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM discounts WHERE id = $1");
        let discount = sqlx::query_as::<_, Discount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(discount)
    }

    /// Find a discount by coupon code.
    ///
    /// Codes are not unique; when several rows share a code, the most
    /// generous one wins.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Discount>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM discounts
             WHERE code = $1
             ORDER BY percent_value DESC
             LIMIT 1"
        );
        let discount = sqlx::query_as::<_, Discount>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(discount)
    }

    /// List all discounts, largest reduction first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Discount>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM discounts ORDER BY percent_value DESC");
        let discounts = sqlx::query_as::<_, Discount>(&query)
            .fetch_all(pool)
            .await?;
        Ok(discounts)
    }

    /// Update a discount. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDiscount,
    ) -> Result<Option<Discount>, DbError> {
        if let Some(code) = &input.code {
            validate_discount_code(code)?;
        }
        if let Some(value) = input.percent_value {
            validate_percent_value(value)?;
        }
        let query = format!(
            "UPDATE discounts SET
                code = COALESCE($2, code),
                percent_value = COALESCE($3, percent_value)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let discount = sqlx::query_as::<_, Discount>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(input.percent_value)
            .fetch_optional(pool)
            .await?;
        Ok(discount)
    }

    /// Delete a discount by ID. Returns `true` if a row was removed.
    ///
    /// Orders referencing the discount keep their other fields; the
    /// reference itself is cleared (`ON DELETE SET NULL`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM discounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
