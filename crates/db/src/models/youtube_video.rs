//! YouTube video link model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unisoc_core::types::{DbId, Timestamp};
use unisoc_core::youtube::validate_url;
use validator::Validate;

/// A row from the `youtube_videos` table.
///
/// `video_id` is derived from `url` on every write.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct YoutubeVideo {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub video_id: String,
    pub path: String,
    pub public_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a video link (the thumbnail blob is supplied separately).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateYoutubeVideo {
    #[serde(default)]
    #[validate(length(min = 2, max = 200, message = "Title must be between 2 and 200 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub url: String,
}

/// DTO for updating a video link. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateYoutubeVideo {
    #[validate(length(min = 2, max = 200, message = "Title must be between 2 and 200 characters"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_url"))]
    pub url: Option<String>,
}

/// Query parameters for listing videos.
#[derive(Debug, Deserialize)]
pub struct YoutubeVideoListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}
