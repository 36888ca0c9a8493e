//! Repository for the `gallery_images` table.

use sqlx::PgPool;
use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::types::DbId;

use crate::models::blob_ref::BlobRef;
use crate::models::gallery::{CreateGalleryImage, GalleryImage, UpdateGalleryImage};

/// Column list for `gallery_images` queries.
const COLUMNS: &str = "id, title, tag, path, public_id, created_at, updated_at";

/// Provides CRUD operations for gallery images.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a gallery image that references an already-stored blob.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryImage,
        blob: BlobRef<'_>,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_images (title, tag, path, public_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(&input.title)
            .bind(&input.tag)
            .bind(blob.path)
            .bind(blob.public_id)
            .fetch_one(pool)
            .await
    }

    /// Find a gallery image by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_images WHERE id = $1");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of gallery images, optionally filtered by tag.
    pub async fn list(
        pool: &PgPool,
        tag: Option<&str>,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let where_clause = if tag.is_some() { "WHERE tag = $3" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_images {where_clause} \
             ORDER BY {} \
             LIMIT $1 OFFSET $2",
            sort.to_order_by()
        );

        let mut q = sqlx::query_as::<_, GalleryImage>(&query)
            .bind(page.limit)
            .bind(page.offset());
        if let Some(t) = tag {
            q = q.bind(t);
        }
        q.fetch_all(pool).await
    }

    /// Count gallery images matching the same filter as [`GalleryRepo::list`].
    pub async fn count(pool: &PgPool, tag: Option<&str>) -> Result<i64, sqlx::Error> {
        match tag {
            Some(t) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_images WHERE tag = $1")
                    .bind(t)
                    .fetch_one(pool)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_images")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Update text fields and, when `blob` is given, swap the image reference.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryImage,
        blob: Option<BlobRef<'_>>,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_images SET
                title = COALESCE($2, title),
                tag = COALESCE($3, tag),
                path = COALESCE($4, path),
                public_id = COALESCE($5, public_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.tag)
            .bind(blob.map(|b| b.path))
            .bind(blob.map(|b| b.public_id))
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery image row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
