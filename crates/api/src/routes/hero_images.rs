//! Route definitions for the `/hero-images` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hero_images;
use crate::state::AppState;

/// Routes mounted at `/hero-images`.
///
/// ```text
/// GET    /        -> list_hero_images
/// POST   /        -> create_hero_image (admin, multipart)
/// GET    /{id}    -> get_hero_image
/// PUT    /{id}    -> update_hero_image (admin, multipart)
/// DELETE /{id}    -> delete_hero_image (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hero_images::list_hero_images).post(hero_images::create_hero_image))
        .route(
            "/{id}",
            get(hero_images::get_hero_image)
                .put(hero_images::update_hero_image)
                .delete(hero_images::delete_hero_image),
        )
}
