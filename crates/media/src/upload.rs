//! Uploaded file payloads and pre-store checks.

use image::ImageFormat;

/// An image file received from a multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// Reasons an upload is refused before it reaches the blob store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Image file is empty")]
    Empty,

    #[error("Image is {size} bytes; the limit is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported image format. Allowed: PNG, JPEG, GIF, WebP")]
    UnsupportedFormat,
}

/// Image formats accepted for upload.
const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

impl Upload {
    /// Check size and sniff the magic bytes. The declared content type is
    /// ignored; only the bytes decide.
    pub fn inspect(&self, max_bytes: usize) -> Result<ImageFormat, UploadError> {
        if self.bytes.is_empty() {
            return Err(UploadError::Empty);
        }
        if self.bytes.len() > max_bytes {
            return Err(UploadError::TooLarge {
                size: self.bytes.len(),
                max: max_bytes,
            });
        }
        match image::guess_format(&self.bytes) {
            Ok(format) if ALLOWED_FORMATS.contains(&format) => Ok(format),
            _ => Err(UploadError::UnsupportedFormat),
        }
    }

    /// File name to report to the image host.
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }
}
