//! Repository for the `users` table.
//!
//! Also serves member requests: a request is a user row in `pending` status.

use sqlx::PgPool;
use unisoc_core::member::{STATUS_APPROVED, STATUS_PENDING};
use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::types::DbId;

use crate::models::user::{CreateUser, UpdateProfile, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, phone, faculty, batch, student_id, \
                       facebook_url, linkedin_url, role, status, approved_at, \
                       created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users
                (name, email, password_hash, phone, faculty, batch, student_id,
                 facebook_url, linkedin_url, role, status, approved_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                     CASE WHEN $11 = '{STATUS_APPROVED}' THEN NOW() END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.phone)
            .bind(&input.faculty)
            .bind(&input.batch)
            .bind(&input.student_id)
            .bind(&input.facebook_url)
            .bind(&input.linkedin_url)
            .bind(&input.role)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user only if it is still awaiting approval.
    pub async fn find_pending(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND status = $2");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// List users in `status`, optionally filtered by role.
    pub async fn list(
        pool: &PgPool,
        status: &str,
        role: Option<&str>,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<Vec<User>, sqlx::Error> {
        let role_clause = if role.is_some() { "AND role = $4" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE status = $3 {role_clause} \
             ORDER BY {} \
             LIMIT $1 OFFSET $2",
            sort.to_order_by()
        );

        let mut q = sqlx::query_as::<_, User>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .bind(status);
        if let Some(r) = role {
            q = q.bind(r);
        }
        q.fetch_all(pool).await
    }

    /// Count users matching the same filters as [`UserRepo::list`].
    pub async fn count(
        pool: &PgPool,
        status: &str,
        role: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let role_clause = if role.is_some() { "AND role = $2" } else { "" };
        let query = format!("SELECT COUNT(*) FROM users WHERE status = $1 {role_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query).bind(status);
        if let Some(r) = role {
            q = q.bind(r);
        }
        q.fetch_one(pool).await
    }

    /// Update profile fields. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                faculty = COALESCE($4, faculty),
                batch = COALESCE($5, batch),
                student_id = COALESCE($6, student_id),
                facebook_url = COALESCE($7, facebook_url),
                linkedin_url = COALESCE($8, linkedin_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.faculty)
            .bind(&input.batch)
            .bind(&input.student_id)
            .bind(&input.facebook_url)
            .bind(&input.linkedin_url)
            .fetch_optional(pool)
            .await
    }

    /// Move a pending user to `approved`.
    ///
    /// Returns `None` if the user does not exist or is not pending.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                status = $2,
                approved_at = NOW(),
                updated_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(STATUS_APPROVED)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user that is still pending. Returns `true` if a row was removed.
    pub async fn delete_pending(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(STATUS_PENDING)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
