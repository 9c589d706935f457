//! Repository for the `products` table.

use sqlx::PgPool;
use storedvd_core::catalog::{
    validate_country, validate_director, validate_duration_secs, validate_product_title,
    validate_release_year,
};
use storedvd_core::types::DbId;

use crate::error::DbError;
use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
/// `cast` is quoted because CAST is reserved in PostgreSQL.
const COLUMNS: &str = "id, section_id, title, image_path, price, release_year, country, \
    director, duration_secs, \"cast\", description, added_date, created_at, updated_at";

/// Provides CRUD operations for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// `added_date` is stamped by the database on insert.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, DbError> {
        validate_product_title(&input.title)?;
        validate_release_year(input.release_year)?;
        validate_country(&input.country)?;
        validate_director(&input.director)?;
        if let Some(secs) = input.duration_secs {
            validate_duration_secs(secs)?;
        }
        let query = format!(
            "INSERT INTO products
                (section_id, title, image_path, price, release_year, country,
                 director, duration_secs, \"cast\", description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(input.section_id)
            .bind(&input.title)
            .bind(&input.image_path)
            .bind(input.price)
            .bind(input.release_year)
            .bind(&input.country)
            .bind(&input.director)
            .bind(input.duration_secs)
            .bind(&input.cast)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(product)
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(product)
    }

    /// List all products, ordered by title then release year ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY title, release_year");
        let products = sqlx::query_as::<_, Product>(&query).fetch_all(pool).await?;
        Ok(products)
    }

    /// List the products of one section, in the default ordering.
    pub async fn list_by_section(pool: &PgPool, section_id: DbId) -> Result<Vec<Product>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE section_id = $1
             ORDER BY title, release_year"
        );
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await?;
        Ok(products)
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, DbError> {
        if let Some(title) = &input.title {
            validate_product_title(title)?;
        }
        if let Some(year) = input.release_year {
            validate_release_year(year)?;
        }
        if let Some(country) = &input.country {
            validate_country(country)?;
        }
        if let Some(director) = &input.director {
            validate_director(director)?;
        }
        if let Some(secs) = input.duration_secs {
            validate_duration_secs(secs)?;
        }
        let query = format!(
            "UPDATE products SET
                section_id = COALESCE($2, section_id),
                title = COALESCE($3, title),
                image_path = COALESCE($4, image_path),
                price = COALESCE($5, price),
                release_year = COALESCE($6, release_year),
                country = COALESCE($7, country),
                director = COALESCE($8, director),
                duration_secs = COALESCE($9, duration_secs),
                \"cast\" = COALESCE($10, \"cast\"),
                description = COALESCE($11, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(input.section_id)
            .bind(&input.title)
            .bind(&input.image_path)
            .bind(input.price)
            .bind(input.release_year)
            .bind(&input.country)
            .bind(&input.director)
            .bind(input.duration_secs)
            .bind(&input.cast)
            .bind(&input.description)
            .fetch_optional(pool)
            .await?;
        Ok(product)
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
