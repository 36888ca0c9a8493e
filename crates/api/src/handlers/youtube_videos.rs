//! Handlers for the `/youtube-videos` resource.
//!
//! A video entry links to YouTube and carries an uploaded thumbnail. The
//! 11-character `video_id` is always derived from `url` on the server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::error::CoreError;
use unisoc_core::pagination::{PageMeta, DEFAULT_LIMIT};
use unisoc_core::types::DbId;
use unisoc_core::validation::FieldErrors;
use unisoc_core::youtube::{extract_video_id, SORT_COLUMNS};
use unisoc_db::models::youtube_video::{
    CreateYoutubeVideo, UpdateYoutubeVideo, YoutubeVideoListParams,
};
use unisoc_db::repositories::YoutubeVideoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::media::{blob_ref, remove_image, settle_insert, settle_update, store_image};
use crate::middleware::rbac::RequireAdmin;
use crate::query::page_and_sort;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;
use crate::upload::{ImageForm, ImageRule};

const ENTITY: &str = "YoutubeVideo";

/// GET /api/v1/youtube-videos
pub async fn list_videos(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<YoutubeVideoListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, sort) = page_and_sort(
        params.page,
        params.limit,
        params.sort.as_deref(),
        DEFAULT_LIMIT,
        SORT_COLUMNS,
    )?;

    let videos = YoutubeVideoRepo::list(&state.pool, page, sort).await?;
    let total = YoutubeVideoRepo::count(&state.pool).await?;
    let meta = PageMeta::new(page, videos.len(), total);

    Ok(Json(ListResponse::new("Videos retrieved", videos, meta)))
}

/// GET /api/v1/youtube-videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = YoutubeVideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse::new("Video retrieved", video)))
}

/// POST /api/v1/youtube-videos
pub async fn create_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) = form
        .validated::<CreateYoutubeVideo>(state.config.max_upload_bytes, ImageRule::Required)?;
    let video_id = video_id_of(&input.url)?;
    let upload = upload.ok_or_else(|| AppError::BadRequest("Image file is required".into()))?;

    let blob = store_image(&state, upload).await?;
    let result = YoutubeVideoRepo::create(&state.pool, &input, &video_id, blob_ref(&blob)).await;
    let video = settle_insert(&state, &blob, result).await?;

    tracing::info!(
        youtube_video_id = video.id,
        video_id = %video.video_id,
        user_id = admin.user_id,
        "Video created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Video created", video)),
    ))
}

/// PUT /api/v1/youtube-videos/{id}
///
/// A new `url` re-derives `video_id`; a new `image` replaces the thumbnail.
pub async fn update_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) = form
        .validated::<UpdateYoutubeVideo>(state.config.max_upload_bytes, ImageRule::Optional)?;
    let video_id = input.url.as_deref().map(video_id_of).transpose()?;

    let existing = YoutubeVideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let new_blob = match upload {
        Some(upload) => Some(store_image(&state, upload).await?),
        None => None,
    };
    let result = YoutubeVideoRepo::update(
        &state.pool,
        id,
        &input,
        video_id.as_deref(),
        new_blob.as_ref().map(blob_ref),
    )
    .await;
    let video = settle_update(&state, &existing.public_id, new_blob.as_ref(), result)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(
        youtube_video_id = id,
        image_replaced = new_blob.is_some(),
        user_id = admin.user_id,
        "Video updated"
    );

    Ok(Json(DataResponse::new("Video updated", video)))
}

/// DELETE /api/v1/youtube-videos/{id}
pub async fn delete_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = YoutubeVideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    remove_image(&state, &existing.public_id).await?;
    if !YoutubeVideoRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(youtube_video_id = id, user_id = admin.user_id, "Video deleted");

    Ok(Json(MessageResponse::new("Video deleted")))
}

fn video_id_of(url: &str) -> AppResult<String> {
    extract_video_id(url).ok_or_else(|| {
        let mut fields = FieldErrors::new();
        fields.add("url", "Please provide a valid YouTube video URL");
        AppError::Core(CoreError::InvalidFields(fields))
    })
}
