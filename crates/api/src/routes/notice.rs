//! Route definitions for the `/notice` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notice;
use crate::state::AppState;

/// Routes mounted at `/notice`.
///
/// ```text
/// GET    /        -> list_notices
/// POST   /        -> create_notice (admin)
/// GET    /{id}    -> get_notice
/// PUT    /{id}    -> update_notice (admin)
/// DELETE /{id}    -> delete_notice (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notice::list_notices).post(notice::create_notice))
        .route(
            "/{id}",
            get(notice::get_notice)
                .put(notice::update_notice)
                .delete(notice::delete_notice),
        )
}
