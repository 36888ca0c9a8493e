//! Notice board model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unisoc_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `notices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notice {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a notice. A missing description is stored as empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNotice {
    #[serde(default)]
    #[validate(length(
        min = 5,
        max = 200,
        message = "Title must be at least 5 characters and at most 200"
    ))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 10000, message = "Description must be at most 10000 characters"))]
    pub description: String,
}

/// DTO for updating a notice. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNotice {
    #[validate(length(
        min = 5,
        max = 200,
        message = "Title must be at least 5 characters and at most 200"
    ))]
    pub title: Option<String>,
    #[validate(length(max = 10000, message = "Description must be at most 10000 characters"))]
    pub description: Option<String>,
}

/// Query parameters for listing notices.
#[derive(Debug, Deserialize)]
pub struct NoticeListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}
