//! Route definitions for the `/messages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// GET    /        -> list_messages
/// POST   /        -> create_message (admin, multipart)
/// GET    /{id}    -> get_message
/// PUT    /{id}    -> update_message (admin, multipart)
/// DELETE /{id}    -> delete_message (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(messages::list_messages).post(messages::create_message))
        .route(
            "/{id}",
            get(messages::get_message)
                .put(messages::update_message)
                .delete(messages::delete_message),
        )
}
