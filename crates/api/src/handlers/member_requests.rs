//! Handlers for the `/member-requests` resource.
//!
//! A member request is a `pending` user. Approving flips it to `approved`;
//! rejecting deletes it. Both are admin-only and only see pending users, so
//! acting on an approved account is a 404.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::member::{SORT_COLUMNS, STATUS_PENDING};
use unisoc_core::pagination::{PageMeta, DEFAULT_LIMIT};
use unisoc_core::roles::VALID_ROLES;
use unisoc_core::types::DbId;
use unisoc_core::validation::validate_input;
use unisoc_db::models::user::{MemberProfile, UserListParams, UserResponse};
use unisoc_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{closed_set_filter, page_and_sort};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "MemberRequest";

/// GET /api/v1/member-requests
pub async fn list_requests(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, sort) = page_and_sort(
        params.page,
        params.limit,
        params.sort.as_deref(),
        DEFAULT_LIMIT,
        SORT_COLUMNS,
    )?;
    let role = closed_set_filter("role", params.role.as_deref(), VALID_ROLES)?;

    let users = UserRepo::list(&state.pool, STATUS_PENDING, role, page, sort).await?;
    let total = UserRepo::count(&state.pool, STATUS_PENDING, role).await?;
    let meta = PageMeta::new(page, users.len(), total);
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(ListResponse::new("Member requests retrieved", users, meta)))
}

/// POST /api/v1/member-requests/{id}/approve
///
/// The stored record is validated again before the status changes; a bad
/// record is a 400 with one message per offending field.
pub async fn approve_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let pending = UserRepo::find_pending(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    if let Err(e) = validate_input(&MemberProfile::from(&pending)) {
        tracing::warn!(user_id = id, error = %e, "Member request failed re-validation");
        return Err(e.into());
    }

    let user = UserRepo::approve(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(user_id = id, approved_by = admin.user_id, "Member request approved");

    Ok(Json(DataResponse::new(
        "Member request approved",
        UserResponse::from(user),
    )))
}

/// POST /api/v1/member-requests/{id}/reject
pub async fn reject_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !UserRepo::delete_pending(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(user_id = id, rejected_by = admin.user_id, "Member request rejected");

    Ok(Json(MessageResponse::new("Member request rejected")))
}
