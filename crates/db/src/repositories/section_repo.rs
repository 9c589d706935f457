//! Repository for the `sections` table.

use sqlx::PgPool;
use storedvd_core::catalog::validate_section_title;
use storedvd_core::types::DbId;

use crate::error::DbError;
use crate::models::section::{CreateSection, Section, UpdateSection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, created_at, updated_at";

/// Provides CRUD operations for catalog sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a new section, returning the created row.
    ///
    /// Titles are unique; inserting a duplicate surfaces the database
    /// constraint violation as `DbError::Sqlx`.
    pub async fn create(pool: &PgPool, input: &CreateSection) -> Result<Section, DbError> {
        validate_section_title(&input.title)?;
        let query = format!("INSERT INTO sections (title) VALUES ($1) RETURNING {COLUMNS}");
        let section = sqlx::query_as::<_, Section>(&query)
            .bind(&input.title)
            .fetch_one(pool)
            .await?;
        Ok(section)
    }

    /// Find a section by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1");
        let section = sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(section)
    }

    /// List all sections in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Section>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM sections ORDER BY id");
        let sections = sqlx::query_as::<_, Section>(&query).fetch_all(pool).await?;
        Ok(sections)
    }

    /// Update a section. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSection,
    ) -> Result<Option<Section>, DbError> {
        if let Some(title) = &input.title {
            validate_section_title(title)?;
        }
        let query = format!(
            "UPDATE sections SET title = COALESCE($2, title)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let section = sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await?;
        Ok(section)
    }

    /// Delete a section by ID. Returns `true` if a row was removed.
    ///
    /// Products referencing the section are detached, not deleted
    /// (`ON DELETE SET NULL`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
