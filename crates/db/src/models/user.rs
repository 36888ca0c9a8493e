//! User / member model and DTOs.
//!
//! A member request is simply a user row in `pending` status; there is no
//! separate request table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unisoc_core::member::validate_status;
use unisoc_core::types::{DbId, Timestamp};
use validator::Validate;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub faculty: Option<String>,
    pub batch: Option<String>,
    pub student_id: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub role: String,
    pub status: String,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub faculty: Option<String>,
    pub batch: Option<String>,
    pub student_id: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub role: String,
    pub status: String,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            faculty: user.faculty,
            batch: user.batch,
            student_id: user.student_id,
            facebook_url: user.facebook_url,
            linkedin_url: user.linkedin_url,
            role: user.role,
            status: user.status,
            approved_at: user.approved_at,
            created_at: user.created_at,
        }
    }
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[serde(default)]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[validate(length(max = 30, message = "Phone number must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "Faculty must be at most 100 characters"))]
    pub faculty: Option<String>,
    #[validate(length(max = 20, message = "Batch must be at most 20 characters"))]
    pub batch: Option<String>,
    #[validate(length(max = 50, message = "Student ID must be at most 50 characters"))]
    pub student_id: Option<String>,
    #[validate(url(message = "Facebook URL must be a valid URL"))]
    pub facebook_url: Option<String>,
    #[validate(url(message = "LinkedIn URL must be a valid URL"))]
    pub linkedin_url: Option<String>,
}

/// DTO for inserting a user row. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub faculty: Option<String>,
    pub batch: Option<String>,
    pub student_id: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub role: String,
    pub status: String,
}

/// DTO for a member editing their own profile. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 30, message = "Phone number must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "Faculty must be at most 100 characters"))]
    pub faculty: Option<String>,
    #[validate(length(max = 20, message = "Batch must be at most 20 characters"))]
    pub batch: Option<String>,
    #[validate(length(max = 50, message = "Student ID must be at most 50 characters"))]
    pub student_id: Option<String>,
    #[validate(url(message = "Facebook URL must be a valid URL"))]
    pub facebook_url: Option<String>,
    #[validate(url(message = "LinkedIn URL must be a valid URL"))]
    pub linkedin_url: Option<String>,
}

/// Snapshot of a stored account, re-validated before approval.
#[derive(Debug, Clone, Validate)]
pub struct MemberProfile {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(max = 30, message = "Phone number must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "Faculty must be at most 100 characters"))]
    pub faculty: Option<String>,
    #[validate(length(max = 20, message = "Batch must be at most 20 characters"))]
    pub batch: Option<String>,
    #[validate(length(max = 50, message = "Student ID must be at most 50 characters"))]
    pub student_id: Option<String>,
    #[validate(url(message = "Facebook URL must be a valid URL"))]
    pub facebook_url: Option<String>,
    #[validate(url(message = "LinkedIn URL must be a valid URL"))]
    pub linkedin_url: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

impl From<&User> for MemberProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            faculty: user.faculty.clone(),
            batch: user.batch.clone(),
            student_id: user.student_id.clone(),
            facebook_url: user.facebook_url.clone(),
            linkedin_url: user.linkedin_url.clone(),
            status: user.status.clone(),
        }
    }
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Query parameters for listing users or member requests.
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub role: Option<String>,
}
