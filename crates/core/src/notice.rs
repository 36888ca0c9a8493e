//! Notice board limits.

/// Notices page in smaller chunks than other resources.
pub const DEFAULT_LIMIT: i64 = 5;

/// Columns a notice listing may be sorted by.
pub const SORT_COLUMNS: &[&str] = &["created_at", "title"];
