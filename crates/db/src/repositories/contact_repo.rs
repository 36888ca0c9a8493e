//! Repository for the `contacts` table.

use sqlx::PgPool;
use unisoc_core::contact::{STATUS_READ, STATUS_UNREAD};
use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::types::DbId;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, name, email, phone, subject, message, status, created_at, updated_at";

/// Provides CRUD operations for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new submission in `unread` status, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone, subject, message, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(STATUS_UNREAD)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by ID without touching its status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a submission and mark it `read` in the same statement.
    ///
    /// Already-read rows are returned unchanged (`updated_at` included).
    pub async fn read(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                status = $2, \
                updated_at = CASE WHEN status = $3 THEN NOW() ELSE updated_at END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(STATUS_READ)
            .bind(STATUS_UNREAD)
            .fetch_optional(pool)
            .await
    }

    /// List submissions, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let where_clause = if status.is_some() { "WHERE status = $3" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM contacts {where_clause} \
             ORDER BY {} \
             LIMIT $1 OFFSET $2",
            sort.to_order_by()
        );

        let mut q = sqlx::query_as::<_, Contact>(&query)
            .bind(page.limit)
            .bind(page.offset());
        if let Some(s) = status {
            q = q.bind(s);
        }
        q.fetch_all(pool).await
    }

    /// Count submissions matching the same filter as [`ContactRepo::list`].
    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        match status {
            Some(s) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts WHERE status = $1")
                    .bind(s)
                    .fetch_one(pool)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Apply an admin status change. Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                status = COALESCE($2, status), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
