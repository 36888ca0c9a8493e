//! Route definitions for the `/contact` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /        -> submit_contact (public)
/// GET    /        -> list_contacts  (admin, ?status=)
/// GET    /{id}    -> get_contact    (admin, marks read)
/// PUT    /{id}    -> update_contact (admin)
/// DELETE /{id}    -> delete_contact (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list_contacts).post(contact::submit_contact))
        .route(
            "/{id}",
            get(contact::get_contact)
                .put(contact::update_contact)
                .delete(contact::delete_contact),
        )
}
