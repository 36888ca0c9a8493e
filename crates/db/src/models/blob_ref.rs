//! Reference to an image held by the external blob store.

/// The `(path, public_id)` pair stored on every image-bearing row.
///
/// Both columns are always written together.
#[derive(Debug, Clone, Copy)]
pub struct BlobRef<'a> {
    /// Durable public URL of the image.
    pub path: &'a str,
    /// Blob store handle used to delete the image.
    pub public_id: &'a str,
}
