//! Leadership message model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unisoc_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub message: String,
    pub path: String,
    pub public_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a message (the portrait blob is supplied separately).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessage {
    #[serde(default)]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 2,
        max = 100,
        message = "Position must be between 2 and 100 characters"
    ))]
    pub position: String,
    #[serde(default)]
    #[validate(length(
        min = 10,
        max = 10000,
        message = "Message must be between 10 and 10000 characters"
    ))]
    pub message: String,
}

/// DTO for updating a message. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMessage {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(
        min = 2,
        max = 100,
        message = "Position must be between 2 and 100 characters"
    ))]
    pub position: Option<String>,
    #[validate(length(
        min = 10,
        max = 10000,
        message = "Message must be between 10 and 10000 characters"
    ))]
    pub message: Option<String>,
}

/// Query parameters for listing messages.
#[derive(Debug, Deserialize)]
pub struct MessageListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}
