//! Handlers for the `/hero-images` resource (landing page banner images).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::hero_image::SORT_COLUMNS;
use unisoc_core::pagination::{PageMeta, DEFAULT_LIMIT};
use unisoc_core::types::DbId;
use unisoc_db::models::hero_image::{HeroImageInput, HeroImageListParams};
use unisoc_db::repositories::HeroImageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::media::{blob_ref, remove_image, settle_insert, settle_update, store_image};
use crate::middleware::rbac::RequireAdmin;
use crate::query::page_and_sort;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;
use crate::upload::{ImageForm, ImageRule};

const ENTITY: &str = "HeroImage";

/// GET /api/v1/hero-images
pub async fn list_hero_images(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<HeroImageListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, sort) = page_and_sort(
        params.page,
        params.limit,
        params.sort.as_deref(),
        DEFAULT_LIMIT,
        SORT_COLUMNS,
    )?;

    let images = HeroImageRepo::list(&state.pool, page, sort).await?;
    let total = HeroImageRepo::count(&state.pool).await?;
    let meta = PageMeta::new(page, images.len(), total);

    Ok(Json(ListResponse::new("Hero images retrieved", images, meta)))
}

/// GET /api/v1/hero-images/{id}
pub async fn get_hero_image(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let image = HeroImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse::new("Hero image retrieved", image)))
}

/// POST /api/v1/hero-images
pub async fn create_hero_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) =
        form.validated::<HeroImageInput>(state.config.max_upload_bytes, ImageRule::Required)?;
    let upload = upload.ok_or_else(|| AppError::BadRequest("Image file is required".into()))?;

    let blob = store_image(&state, upload).await?;
    let result = HeroImageRepo::create(&state.pool, &input, blob_ref(&blob)).await;
    let image = settle_insert(&state, &blob, result).await?;

    tracing::info!(hero_image_id = image.id, user_id = admin.user_id, "Hero image created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Hero image created", image)),
    ))
}

/// PUT /api/v1/hero-images/{id}
pub async fn update_hero_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) =
        form.validated::<HeroImageInput>(state.config.max_upload_bytes, ImageRule::Optional)?;

    let existing = HeroImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let new_blob = match upload {
        Some(upload) => Some(store_image(&state, upload).await?),
        None => None,
    };
    let result =
        HeroImageRepo::update(&state.pool, id, &input, new_blob.as_ref().map(blob_ref)).await;
    let image = settle_update(&state, &existing.public_id, new_blob.as_ref(), result)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(
        hero_image_id = id,
        image_replaced = new_blob.is_some(),
        user_id = admin.user_id,
        "Hero image updated"
    );

    Ok(Json(DataResponse::new("Hero image updated", image)))
}

/// DELETE /api/v1/hero-images/{id}
pub async fn delete_hero_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = HeroImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    remove_image(&state, &existing.public_id).await?;
    if !HeroImageRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(hero_image_id = id, user_id = admin.user_id, "Hero image deleted");

    Ok(Json(MessageResponse::new("Hero image deleted")))
}
