//! Route definitions for `/users` and `/member-requests`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{member_requests, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /     -> list_members (admin, ?role=)
/// PUT /me   -> update_me
/// ```
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_members))
        .route("/me", put(users::update_me))
}

/// Routes mounted at `/member-requests`. All admin-only.
///
/// ```text
/// GET  /                -> list_requests
/// POST /{id}/approve    -> approve_request
/// POST /{id}/reject     -> reject_request
/// ```
pub fn member_requests_router() -> Router<AppState> {
    Router::new()
        .route("/", get(member_requests::list_requests))
        .route("/{id}/approve", post(member_requests::approve_request))
        .route("/{id}/reject", post(member_requests::reject_request))
}
