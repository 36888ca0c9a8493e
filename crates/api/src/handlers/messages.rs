//! Handlers for the `/messages` resource: leadership messages with a
//! portrait, shown on the public site.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::message::SORT_COLUMNS;
use unisoc_core::pagination::{PageMeta, DEFAULT_LIMIT};
use unisoc_core::types::DbId;
use unisoc_db::models::message::{CreateMessage, MessageListParams, UpdateMessage};
use unisoc_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::media::{blob_ref, remove_image, settle_insert, settle_update, store_image};
use crate::middleware::rbac::RequireAdmin;
use crate::query::page_and_sort;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;
use crate::upload::{ImageForm, ImageRule};

const ENTITY: &str = "Message";

/// GET /api/v1/messages
pub async fn list_messages(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MessageListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, sort) = page_and_sort(
        params.page,
        params.limit,
        params.sort.as_deref(),
        DEFAULT_LIMIT,
        SORT_COLUMNS,
    )?;

    let messages = MessageRepo::list(&state.pool, page, sort).await?;
    let total = MessageRepo::count(&state.pool).await?;
    let meta = PageMeta::new(page, messages.len(), total);

    Ok(Json(ListResponse::new("Messages retrieved", messages, meta)))
}

/// GET /api/v1/messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse::new("Message retrieved", message)))
}

/// POST /api/v1/messages
pub async fn create_message(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) =
        form.validated::<CreateMessage>(state.config.max_upload_bytes, ImageRule::Required)?;
    let upload = upload.ok_or_else(|| AppError::BadRequest("Image file is required".into()))?;

    let blob = store_image(&state, upload).await?;
    let result = MessageRepo::create(&state.pool, &input, blob_ref(&blob)).await;
    let message = settle_insert(&state, &blob, result).await?;

    tracing::info!(message_id = message.id, user_id = admin.user_id, "Message created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Message created", message)),
    ))
}

/// PUT /api/v1/messages/{id}
pub async fn update_message(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    form: ImageForm,
) -> AppResult<impl IntoResponse> {
    let (input, upload) =
        form.validated::<UpdateMessage>(state.config.max_upload_bytes, ImageRule::Optional)?;

    let existing = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let new_blob = match upload {
        Some(upload) => Some(store_image(&state, upload).await?),
        None => None,
    };
    let result = MessageRepo::update(&state.pool, id, &input, new_blob.as_ref().map(blob_ref)).await;
    let message = settle_update(&state, &existing.public_id, new_blob.as_ref(), result)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(
        message_id = id,
        image_replaced = new_blob.is_some(),
        user_id = admin.user_id,
        "Message updated"
    );

    Ok(Json(DataResponse::new("Message updated", message)))
}

/// DELETE /api/v1/messages/{id}
pub async fn delete_message(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    remove_image(&state, &existing.public_id).await?;
    if !MessageRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(message_id = id, user_id = admin.user_id, "Message deleted");

    Ok(Json(MessageResponse::new("Message deleted")))
}
