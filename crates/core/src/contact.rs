//! Contact form submission statuses and field limits.
//!
//! A submission starts `unread`. Reading it through the admin API moves it to
//! `read`; the reverse only happens when an admin sets it explicitly.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const STATUS_UNREAD: &str = "unread";
pub const STATUS_READ: &str = "read";

/// All valid contact statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_UNREAD, STATUS_READ];

/// Columns a contact listing may be sorted by.
pub const SORT_COLUMNS: &[&str] = &["created_at", "name", "status"];

/// `validator` hook for the `status` field.
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    check_one_of(status, VALID_STATUSES)
}
