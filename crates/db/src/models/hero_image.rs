//! Hero section image model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unisoc_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `hero_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroImage {
    pub id: DbId,
    pub caption: Option<String>,
    pub path: String,
    pub public_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or updating a hero image's text fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct HeroImageInput {
    #[validate(length(max = 200, message = "Caption must be at most 200 characters"))]
    pub caption: Option<String>,
}

/// Query parameters for listing hero images.
#[derive(Debug, Deserialize)]
pub struct HeroImageListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}
