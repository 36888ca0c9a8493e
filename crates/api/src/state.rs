use std::sync::Arc;

use unisoc_media::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: every field is a pool handle or an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: unisoc_db::DbPool,
    /// Server configuration (JWT settings, upload limit, CORS).
    pub config: Arc<ServerConfig>,
    /// Image host used by gallery, message, video and hero-image records.
    pub blobs: Arc<dyn BlobStore>,
}
