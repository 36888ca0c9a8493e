//! Blob store collaborator for uploaded images.
//!
//! The backend only needs two operations from an image host: store bytes and
//! get back a durable URL plus an opaque handle, and delete by that handle.
//! [`BlobStore`] captures exactly that; [`cloudinary::CloudinaryStore`] talks
//! to the hosted service and [`memory::MemoryBlobStore`] keeps blobs
//! in-process for tests and local development.

use async_trait::async_trait;
use serde::Serialize;

pub mod cloudinary;
pub mod memory;
pub mod upload;

pub use cloudinary::{CloudinaryConfig, CloudinaryStore};
pub use memory::MemoryBlobStore;
pub use upload::{Upload, UploadError};

/// Result of a successful store: where the blob lives and how to delete it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredBlob {
    /// Durable public URL (persisted as `path`).
    pub url: String,
    /// Blob-store handle (persisted as `public_id`).
    pub public_id: String,
}

/// Errors from the blob store layer.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Image host request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The image host returned a non-2xx status code.
    #[error("Image host error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The image host answered with something we could not interpret.
    #[error("Unexpected image host response: {0}")]
    InvalidResponse(String),
}

/// Storage for uploaded images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store an upload and return its URL and handle.
    async fn store(&self, upload: Upload) -> Result<StoredBlob, BlobError>;

    /// Delete a blob by handle. Deleting an unknown handle is not an error,
    /// so retries after a partial failure are safe.
    async fn delete(&self, public_id: &str) -> Result<(), BlobError>;
}
