//! Keeping blobs and records in step.
//!
//! Image-bearing records are written in two steps: the blob is stored first,
//! then the row. These helpers settle the outcome so a failed write never
//! leaves a fresh blob behind, and a replaced blob is removed once the row no
//! longer points at it. Cleanup failures are logged and swallowed; the
//! caller's result is what matters.

use unisoc_db::models::blob_ref::BlobRef;
use unisoc_media::{StoredBlob, Upload};

use crate::error::AppResult;
use crate::state::AppState;

/// View a stored blob as the `(path, public_id)` pair a row records.
pub fn blob_ref(blob: &StoredBlob) -> BlobRef<'_> {
    BlobRef {
        path: &blob.url,
        public_id: &blob.public_id,
    }
}

/// Upload an already inspected image.
pub async fn store_image(state: &AppState, upload: Upload) -> AppResult<StoredBlob> {
    let blob = state.blobs.store(upload).await?;
    tracing::debug!(public_id = %blob.public_id, "Image stored");
    Ok(blob)
}

/// Best-effort delete.
pub async fn discard(state: &AppState, public_id: &str, reason: &'static str) {
    if let Err(e) = state.blobs.delete(public_id).await {
        tracing::warn!(%public_id, reason, error = %e, "Failed to delete image");
    }
}

/// Finish a create: on insert failure, drop the blob that was just stored.
pub async fn settle_insert<T>(
    state: &AppState,
    blob: &StoredBlob,
    result: Result<T, sqlx::Error>,
) -> AppResult<T> {
    match result {
        Ok(row) => Ok(row),
        Err(e) => {
            discard(state, &blob.public_id, "insert failed").await;
            Err(e.into())
        }
    }
}

/// Finish an update that may have swapped the image.
///
/// With a new blob: success deletes `old_public_id`, while a failed or
/// missed update deletes the new blob instead.
pub async fn settle_update<T>(
    state: &AppState,
    old_public_id: &str,
    new_blob: Option<&StoredBlob>,
    result: Result<Option<T>, sqlx::Error>,
) -> AppResult<Option<T>> {
    let Some(new_blob) = new_blob else {
        return Ok(result?);
    };
    match result {
        Ok(Some(row)) => {
            discard(state, old_public_id, "replaced").await;
            Ok(Some(row))
        }
        Ok(None) => {
            discard(state, &new_blob.public_id, "record vanished").await;
            Ok(None)
        }
        Err(e) => {
            discard(state, &new_blob.public_id, "update failed").await;
            Err(e.into())
        }
    }
}

/// Delete the blob behind a record that is about to be removed.
///
/// Unlike [`discard`], failure is returned so the record is kept and the
/// delete can be retried.
pub async fn remove_image(state: &AppState, public_id: &str) -> AppResult<()> {
    state.blobs.delete(public_id).await?;
    Ok(())
}
