/// Columns a hero image listing may be sorted by.
pub const SORT_COLUMNS: &[&str] = &["created_at"];
