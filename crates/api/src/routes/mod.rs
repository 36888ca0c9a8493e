pub mod auth;
pub mod contact;
pub mod gallery;
pub mod health;
pub mod hero_images;
pub mod messages;
pub mod notice;
pub mod users;
pub mod youtube_videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Reads of site content are public; every write requires an admin token.
///
/// ```text
/// /auth/register                        register (POST)
/// /auth/login                           login (POST)
/// /auth/me                              own profile (GET)
///
/// /users                                approved members (GET, admin)
/// /users/me                             update own profile (PUT)
///
/// /member-requests                      pending members (GET, admin)
/// /member-requests/{id}/approve         approve (POST, admin)
/// /member-requests/{id}/reject          reject (POST, admin)
///
/// /contact                              submit (POST), list (GET, admin)
/// /contact/{id}                         get, update, delete (admin)
///
/// /notice                               list, create
/// /notice/{id}                          get, update, delete
///
/// /gallery                              list (?tag=), create
/// /gallery/{id}                         get, update, delete
///
/// /messages                             list, create
/// /messages/{id}                        get, update, delete
///
/// /youtube-videos                       list, create
/// /youtube-videos/{id}                  get, update, delete
///
/// /hero-images                          list, create
/// /hero-images/{id}                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::users_router())
        .nest("/member-requests", users::member_requests_router())
        .nest("/contact", contact::router())
        .nest("/notice", notice::router())
        .nest("/gallery", gallery::router())
        .nest("/messages", messages::router())
        .nest("/youtube-videos", youtube_videos::router())
        .nest("/hero-images", hero_images::router())
}
