//! Page/limit/sort handling for list endpoints.
//!
//! Query strings carry `page` (1-based), `limit`, and `sort`. A sort value is
//! a column name with an optional leading `-` for descending order, e.g.
//! `-created_at`. Only whitelisted columns are accepted so the value can be
//! spliced into SQL safely.

use serde::Serialize;

use crate::error::CoreError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_SORT: &str = "-created_at";

/// Normalised page request: `page >= 1`, `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from raw query values, falling back to
    /// `default_limit` and clamping out-of-range values.
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(default_limit).clamp(1, MAX_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated sort key. `column` is always one of the caller's whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a `sort` query value against the allowed columns.
    ///
    /// `None` or an empty string yields [`DEFAULT_SORT`]. Accepts the
    /// camelCase alias `createdAt` for `created_at`.
    pub fn parse(raw: Option<&str>, allowed: &[&'static str]) -> Result<Self, CoreError> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SORT);

        let (direction, name) = match raw.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let name = if name == "createdAt" { "created_at" } else { name };

        let column = allowed.iter().copied().find(|c| *c == name).ok_or_else(|| {
            CoreError::Validation(format!(
                "Cannot sort by '{name}'. Allowed: {}",
                allowed.join(", ")
            ))
        })?;

        Ok(Self { column, direction })
    }

    /// Render as an `ORDER BY` body, with `id` as a stable tie-breaker.
    pub fn to_order_by(&self) -> String {
        let dir = self.direction.as_sql();
        format!("{} {dir}, id {dir}", self.column)
    }
}

/// Number of pages needed to hold `total` rows at `limit` rows per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub count: i64,
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

impl PageMeta {
    pub fn new(request: PageRequest, count: usize, total: i64) -> Self {
        Self {
            count: count as i64,
            total,
            total_pages: total_pages(total, request.limit),
            current_page: request.page,
        }
    }
}
