//! Handlers for the `/notice` resource.
//!
//! Reads are public; writes require an admin.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::notice::{DEFAULT_LIMIT, SORT_COLUMNS};
use unisoc_core::pagination::PageMeta;
use unisoc_core::types::DbId;
use unisoc_core::validation::validate_input;
use unisoc_db::models::notice::{CreateNotice, NoticeListParams, UpdateNotice};
use unisoc_db::repositories::NoticeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::page_and_sort;
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Notice";

/// GET /api/v1/notice
pub async fn list_notices(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NoticeListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, sort) = page_and_sort(
        params.page,
        params.limit,
        params.sort.as_deref(),
        DEFAULT_LIMIT,
        SORT_COLUMNS,
    )?;

    let notices = NoticeRepo::list(&state.pool, page, sort).await?;
    let total = NoticeRepo::count(&state.pool).await?;
    let meta = PageMeta::new(page, notices.len(), total);

    Ok(Json(ListResponse::new("Notices retrieved", notices, meta)))
}

/// GET /api/v1/notice/{id}
pub async fn get_notice(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let notice = NoticeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse::new("Notice retrieved", notice)))
}

/// POST /api/v1/notice
pub async fn create_notice(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNotice>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let notice = NoticeRepo::create(&state.pool, &input).await?;

    tracing::info!(notice_id = notice.id, user_id = admin.user_id, "Notice created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Notice created", notice)),
    ))
}

/// PUT /api/v1/notice/{id}
///
/// Partial update: absent fields keep their stored value.
pub async fn update_notice(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateNotice>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let notice = NoticeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(notice_id = id, user_id = admin.user_id, "Notice updated");

    Ok(Json(DataResponse::new("Notice updated", notice)))
}

/// DELETE /api/v1/notice/{id}
pub async fn delete_notice(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !NoticeRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(notice_id = id, user_id = admin.user_id, "Notice deleted");

    Ok(Json(MessageResponse::new("Notice deleted")))
}
