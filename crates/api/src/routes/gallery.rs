//! Route definitions for the `/gallery` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /        -> list_gallery
/// POST   /        -> create_gallery_image (admin, multipart)
/// GET    /{id}    -> get_gallery_image
/// PUT    /{id}    -> update_gallery_image (admin, multipart)
/// DELETE /{id}    -> delete_gallery_image (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list_gallery).post(gallery::create_gallery_image))
        .route(
            "/{id}",
            get(gallery::get_gallery_image)
                .put(gallery::update_gallery_image)
                .delete(gallery::delete_gallery_image),
        )
}
