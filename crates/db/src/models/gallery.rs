//! Gallery image model and DTOs.
//!
//! Text fields arrive as multipart form fields next to the `image` file, so
//! required strings default to empty and are caught by validation instead
//! of by deserialization.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unisoc_core::gallery::validate_tag;
use unisoc_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `gallery_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub title: Option<String>,
    pub tag: String,
    pub path: String,
    pub public_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery image (the blob is supplied separately).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryImage {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_tag"))]
    pub tag: String,
}

/// DTO for updating a gallery image. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGalleryImage {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_tag"))]
    pub tag: Option<String>,
}

/// Query parameters for listing gallery images.
#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub tag: Option<String>,
}
