//! In-process blob store for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{BlobError, BlobStore, StoredBlob, Upload};

/// Keeps uploaded bytes in a map keyed by a generated handle.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    folder: String,
}

impl MemoryBlobStore {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            folder: folder.into(),
        }
    }

    pub fn contains(&self, public_id: &str) -> bool {
        self.lock().contains_key(public_id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned map is still a usable map.
        self.blobs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn store(&self, upload: Upload) -> Result<StoredBlob, BlobError> {
        let public_id = if self.folder.is_empty() {
            uuid::Uuid::new_v4().simple().to_string()
        } else {
            format!("{}/{}", self.folder, uuid::Uuid::new_v4().simple())
        };
        let url = format!("memory://{public_id}");
        self.lock().insert(public_id.clone(), upload.bytes);
        tracing::debug!(%public_id, "Stored blob in memory");
        Ok(StoredBlob { url, public_id })
    }

    async fn delete(&self, public_id: &str) -> Result<(), BlobError> {
        let removed = self.lock().remove(public_id).is_some();
        tracing::debug!(%public_id, removed, "Deleted blob from memory");
        Ok(())
    }
}
