//! Handlers for the `/gallery` resource.
//!
//! Each gallery image is a stored blob plus a row holding its URL and
//! `public_id`. Writes take `multipart/form-data` with the file in `image`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::gallery::{SORT_COLUMNS, VALID_TAGS};
use unisoc_core::pagination::{PageMeta, DEFAULT_LIMIT};
use unisoc_core::types::DbId;
use unisoc_db::models::gallery::{CreateGalleryImage, GalleryListParams, UpdateGalleryImage};
use unisoc_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::media::{blob_ref, remove_image, settle_insert, settle_update, store_image};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{closed_set_filter, page_and_sort};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;
use crate::upload::{ImageForm, ImageRule};

const ENTITY: &str = "GalleryImage";

/// GET /api/v1/gallery
pub async fn list_gallery(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<GalleryListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, sort) = page_and_sort(
        params.page,
        params.limit,
        params.sort.as_deref(),
        DEFAULT_LIMIT,
        SORT_COLUMNS,
    )?;
    let tag = closed_set_filter("tag", params.tag.as_deref(), VALID_TAGS)?;

    let images = GalleryRepo::list(&state.pool, tag, page, sort).await?;
    let total = GalleryRepo::count(&state.pool, tag).await?;
    let meta = PageMeta::new(page, images.len(), total);

    Ok(Json(ListResponse::new("Gallery images retrieved", images, meta)))
}

/// GET /api/v1/gallery/{id}
pub async fn get_gallery_image(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let image = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse::new("Gallery image retrieved", image)))
}

/// POST /api/v1/gallery
pub async fn create_gallery_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) = form
        .validated::<CreateGalleryImage>(state.config.max_upload_bytes, ImageRule::Required)?;
    let upload = upload.ok_or_else(|| AppError::BadRequest("Image file is required".into()))?;

    let blob = store_image(&state, upload).await?;
    let result = GalleryRepo::create(&state.pool, &input, blob_ref(&blob)).await;
    let image = settle_insert(&state, &blob, result).await?;

    tracing::info!(
        gallery_image_id = image.id,
        public_id = %image.public_id,
        user_id = admin.user_id,
        "Gallery image created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Gallery image created", image)),
    ))
}

/// PUT /api/v1/gallery/{id}
///
/// Text fields are merged; a new `image` replaces the stored blob.
pub async fn update_gallery_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) = form
        .validated::<UpdateGalleryImage>(state.config.max_upload_bytes, ImageRule::Optional)?;

    let existing = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let new_blob = match upload {
        Some(upload) => Some(store_image(&state, upload).await?),
        None => None,
    };
    let result = GalleryRepo::update(&state.pool, id, &input, new_blob.as_ref().map(blob_ref)).await;
    let image = settle_update(&state, &existing.public_id, new_blob.as_ref(), result)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(
        gallery_image_id = id,
        image_replaced = new_blob.is_some(),
        user_id = admin.user_id,
        "Gallery image updated"
    );

    Ok(Json(DataResponse::new("Gallery image updated", image)))
}

/// DELETE /api/v1/gallery/{id}
pub async fn delete_gallery_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    remove_image(&state, &existing.public_id).await?;
    if !GalleryRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(gallery_image_id = id, user_id = admin.user_id, "Gallery image deleted");

    Ok(Json(MessageResponse::new("Gallery image deleted")))
}
