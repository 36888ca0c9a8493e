//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::member::{SORT_COLUMNS, STATUS_APPROVED};
use unisoc_core::pagination::{PageMeta, DEFAULT_LIMIT};
use unisoc_core::roles::VALID_ROLES;
use unisoc_core::validation::validate_input;
use unisoc_db::models::user::{UpdateProfile, UserListParams, UserResponse};
use unisoc_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{closed_set_filter, page_and_sort};
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// GET /api/v1/users
///
/// Approved accounts only; pending ones are listed under `/member-requests`.
pub async fn list_members(
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

    let users = UserRepo::list(&state.pool, STATUS_APPROVED, role, page, sort).await?;
    let total = UserRepo::count(&state.pool, STATUS_APPROVED, role).await?;
    let meta = PageMeta::new(page, users.len(), total);
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(ListResponse::new("Members retrieved", users, meta)))
}

/// PUT /api/v1/users/me
///
/// Partial profile update. Email, role and status cannot be changed here.
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse::new(
        "Profile updated",
        UserResponse::from(user),
    )))
}
