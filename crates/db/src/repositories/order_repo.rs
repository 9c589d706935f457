//! Repository for the `orders` table.

use sqlx::PgPool;
use storedvd_core::error::CoreError;
use storedvd_core::orders::{
    validate_customer_name, validate_delivery_address, validate_email, validate_phone,
};
use storedvd_core::types::DbId;

use crate::error::DbError;
use crate::models::order::{CreateOrder, Order, UpdateOrder};
use crate::models::status::OrderStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, needs_delivery, discount_id, customer_name, phone, email, \
    address, notice, order_date, ship_date, status_id, created_at, updated_at";

/// Provides CRUD and lifecycle operations for customer orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order, returning the created row.
    ///
    /// Status starts at New and `order_date` at the current time.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, DbError> {
        validate_customer_name(&input.customer_name)?;
        validate_phone(&input.phone)?;
        validate_email(&input.email)?;
        validate_delivery_address(input.needs_delivery, input.address.as_deref().unwrap_or(""))?;
        let query = format!(
            "INSERT INTO orders
                (needs_delivery, discount_id, customer_name, phone, email, address, notice)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''), COALESCE($7, ''))
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(input.needs_delivery)
            .bind(input.discount_id)
            .bind(&input.customer_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.notice)
            .fetch_one(pool)
            .await?;
        Ok(order)
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(order)
    }

    /// List all orders, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY order_date, id");
        let orders = sqlx::query_as::<_, Order>(&query).fetch_all(pool).await?;
        Ok(orders)
    }

    /// List orders currently in the given status, oldest first.
    pub async fn list_by_status(pool: &PgPool, status: OrderStatus) -> Result<Vec<Order>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders
             WHERE status_id = $1
             ORDER BY order_date, id"
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(status.id())
            .fetch_all(pool)
            .await?;
        Ok(orders)
    }

    /// Update an order's contact and delivery fields. Only non-`None`
    /// fields in `input` are applied.
    ///
    /// The current row is read first so the delivery/address rule is
    /// checked against the effective post-update values.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrder,
    ) -> Result<Option<Order>, DbError> {
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        if let Some(name) = &input.customer_name {
            validate_customer_name(name)?;
        }
        if let Some(phone) = &input.phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &input.email {
            validate_email(email)?;
        }
        let needs_delivery = input.needs_delivery.unwrap_or(current.needs_delivery);
        let address = input.address.as_deref().unwrap_or(&current.address);
        validate_delivery_address(needs_delivery, address)?;

        let query = format!(
            "UPDATE orders SET
                needs_delivery = COALESCE($2, needs_delivery),
                discount_id = COALESCE($3, discount_id),
                customer_name = COALESCE($4, customer_name),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                address = COALESCE($7, address),
                notice = COALESCE($8, notice)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(input.needs_delivery)
            .bind(input.discount_id)
            .bind(&input.customer_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.notice)
            .fetch_optional(pool)
            .await?;
        Ok(order)
    }

    /// Move an order to `next` in its lifecycle, returning the updated
    /// row.
    ///
    /// Fails with `CoreError::Conflict` when the transition is not legal
    /// (e.g. paying a cancelled order) and `CoreError::NotFound` when the
    /// order does not exist.
    pub async fn set_status(pool: &PgPool, id: DbId, next: OrderStatus) -> Result<Order, DbError> {
        let current = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "order", id })?;
        let from = OrderStatus::from_id(current.status_id).ok_or_else(|| {
            CoreError::Conflict(format!(
                "Order {id} carries unknown status id {}",
                current.status_id
            ))
        })?;
        if !from.can_transition_to(next) {
            return Err(CoreError::Conflict(format!(
                "Order {id} cannot move from {from:?} to {next:?}"
            ))
            .into());
        }
        let query = format!("UPDATE orders SET status_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(next.id())
            .fetch_one(pool)
            .await?;
        Ok(order)
    }

    /// Stamp the order's ship date with the current time, returning the
    /// updated row.
    ///
    /// Fails with `CoreError::NotFound` when the order does not exist.
    pub async fn mark_shipped(pool: &PgPool, id: DbId) -> Result<Order, DbError> {
        let query = format!("UPDATE orders SET ship_date = NOW() WHERE id = $1 RETURNING {COLUMNS}");
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        order.ok_or_else(|| CoreError::NotFound { entity: "order", id }.into())
    }

    /// Delete an order by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
