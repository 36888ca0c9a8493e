//! Repository for the `youtube_videos` table.

use sqlx::PgPool;
use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::types::DbId;

use crate::models::blob_ref::BlobRef;
use crate::models::youtube_video::{CreateYoutubeVideo, UpdateYoutubeVideo, YoutubeVideo};

/// Column list for `youtube_videos` queries.
const COLUMNS: &str = "id, title, url, video_id, path, public_id, created_at, updated_at";

/// Provides CRUD operations for YouTube video links.
pub struct YoutubeVideoRepo;

impl YoutubeVideoRepo {
    /// Insert a video link. `video_id` must already be extracted from `input.url`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateYoutubeVideo,
        video_id: &str,
        blob: BlobRef<'_>,
    ) -> Result<YoutubeVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO youtube_videos (title, url, video_id, path, public_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(video_id)
            .bind(blob.path)
            .bind(blob.public_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<YoutubeVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM youtube_videos WHERE id = $1");
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<Vec<YoutubeVideo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM youtube_videos ORDER BY {} LIMIT $1 OFFSET $2",
            sort.to_order_by()
        );
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM youtube_videos")
            .fetch_one(pool)
            .await
    }

    /// Update a video link. `video_id` must be supplied whenever `input.url` is.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateYoutubeVideo,
        video_id: Option<&str>,
        blob: Option<BlobRef<'_>>,
    ) -> Result<Option<YoutubeVideo>, sqlx::Error> {
        let query = format!(
            "UPDATE youtube_videos SET
                title = COALESCE($2, title),
                url = COALESCE($3, url),
                video_id = COALESCE($4, video_id),
                path = COALESCE($5, path),
                public_id = COALESCE($6, public_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(video_id)
            .bind(blob.map(|b| b.path))
            .bind(blob.map(|b| b.public_id))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM youtube_videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
