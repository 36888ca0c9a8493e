//! Repository for the `notices` table.

use sqlx::PgPool;
use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::types::DbId;

use crate::models::notice::{CreateNotice, Notice, UpdateNotice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Provides CRUD operations for notices.
pub struct NoticeRepo;

impl NoticeRepo {
    /// Insert a new notice, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNotice) -> Result<Notice, sqlx::Error> {
        let query = format!(
            "INSERT INTO notices (title, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a notice by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices WHERE id = $1");
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of notices.
    pub async fn list(
        pool: &PgPool,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<Vec<Notice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notices ORDER BY {} LIMIT $1 OFFSET $2",
            sort.to_order_by()
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notices")
            .fetch_one(pool)
            .await
    }

    /// Update a notice. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotice,
    ) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a notice by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
