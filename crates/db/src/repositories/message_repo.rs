//! Repository for the `messages` table.

use sqlx::PgPool;
use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::types::DbId;

use crate::models::blob_ref::BlobRef;
use crate::models::message::{CreateMessage, Message, UpdateMessage};

/// Column list for `messages` queries.
const COLUMNS: &str = "id, name, position, message, path, public_id, created_at, updated_at";

/// Provides CRUD operations for leadership messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a message that references an already-stored portrait.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMessage,
        blob: BlobRef<'_>,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, position, message, path, public_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.message)
            .bind(blob.path)
            .bind(blob.public_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages ORDER BY {} LIMIT $1 OFFSET $2",
            sort.to_order_by()
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
            .fetch_one(pool)
            .await
    }

    /// Update text fields and, when `blob` is given, swap the portrait reference.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMessage,
        blob: Option<BlobRef<'_>>,
    ) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                message = COALESCE($4, message),
                path = COALESCE($5, path),
                public_id = COALESCE($6, public_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.message)
            .bind(blob.map(|b| b.path))
            .bind(blob.map(|b| b.public_id))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
