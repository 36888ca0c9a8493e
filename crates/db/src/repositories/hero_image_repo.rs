//! Repository for the `hero_images` table.

use sqlx::PgPool;
use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::types::DbId;

use crate::models::blob_ref::BlobRef;
use crate::models::hero_image::{HeroImage, HeroImageInput};

/// Column list for `hero_images` queries.
const COLUMNS: &str = "id, caption, path, public_id, created_at, updated_at";

/// Provides CRUD operations for hero section images.
pub struct HeroImageRepo;

impl HeroImageRepo {
    pub async fn create(
        pool: &PgPool,
        input: &HeroImageInput,
        blob: BlobRef<'_>,
    ) -> Result<HeroImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_images (caption, path, public_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroImage>(&query)
            .bind(&input.caption)
            .bind(blob.path)
            .bind(blob.public_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_images WHERE id = $1");
        sqlx::query_as::<_, HeroImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<Vec<HeroImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hero_images ORDER BY {} LIMIT $1 OFFSET $2",
            sort.to_order_by()
        );
        sqlx::query_as::<_, HeroImage>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hero_images")
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &HeroImageInput,
        blob: Option<BlobRef<'_>>,
    ) -> Result<Option<HeroImage>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_images SET
                caption = COALESCE($2, caption),
                path = COALESCE($3, path),
                public_id = COALESCE($4, public_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroImage>(&query)
            .bind(id)
            .bind(&input.caption)
            .bind(blob.map(|b| b.path))
            .bind(blob.map(|b| b.public_id))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
