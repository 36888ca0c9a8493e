//! First-start admin account.

use unisoc_core::member::STATUS_APPROVED;
use unisoc_core::roles::ROLE_ADMIN;
use unisoc_db::models::user::CreateUser;
use unisoc_db::repositories::UserRepo;
use unisoc_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

const ADMIN_NAME: &str = "Administrator";

/// Create an approved admin for `seed` unless a user with that email exists.
///
/// Returns `true` when an account was created.
pub async fn ensure_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<bool> {
    let email = seed.email.trim().to_lowercase();

    if let Some(existing) = UserRepo::find_by_email(pool, &email).await? {
        tracing::info!(user_id = existing.id, role = %existing.role, "Admin seed account already exists");
        return Ok(false);
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: ADMIN_NAME.to_string(),
            email,
            password_hash,
            phone: None,
            faculty: None,
            batch: None,
            student_id: None,
            facebook_url: None,
            linkedin_url: None,
            role: ROLE_ADMIN.to_string(),
            status: STATUS_APPROVED.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Admin account created");
    Ok(true)
}
