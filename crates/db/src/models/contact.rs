//! Contact form submission model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unisoc_core::contact::validate_status;
use unisoc_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a contact form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContact {
    #[serde(default)]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(max = 30, message = "Phone number must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 10,
        max = 5000,
        message = "Message must be between 10 and 5000 characters"
    ))]
    pub message: String,
}

/// DTO for an admin status change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContact {
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Query parameters for listing contact submissions.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub status: Option<String>,
}
