//! Route definitions for the `/youtube-videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::youtube_videos;
use crate::state::AppState;

/// Routes mounted at `/youtube-videos`.
///
/// ```text
/// GET    /        -> list_videos
/// POST   /        -> create_video (admin, multipart)
/// GET    /{id}    -> get_video
/// PUT    /{id}    -> update_video (admin, multipart)
/// DELETE /{id}    -> delete_video (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(youtube_videos::list_videos).post(youtube_videos::create_video))
        .route(
            "/{id}",
            get(youtube_videos::get_video)
                .put(youtube_videos::update_video)
                .delete(youtube_videos::delete_video),
        )
}
