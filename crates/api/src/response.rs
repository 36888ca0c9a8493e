//! Success envelopes shared by every handler.
//!
//! Single records use [`DataResponse`], pages use [`ListResponse`], and
//! deletes and other data-less outcomes use [`MessageResponse`]. Failures are
//! rendered by [`crate::error::AppError`].

use serde::Serialize;
use unisoc_core::pagination::PageMeta;

/// `{ "success": true, "message": "...", "data": T }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Data envelope plus `count`, `total`, `totalPages` and `currentPage`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub meta: PageMeta,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>, meta: PageMeta) -> Self {
        Self {
            success: true,
            message: message.into(),
            meta,
            data,
        }
    }
}

/// `{ "success": true, "message": "..." }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
