//! Leadership message listing rules.

/// Columns a message listing may be sorted by.
pub const SORT_COLUMNS: &[&str] = &["created_at", "name", "position"];
