//! Turning raw list query values into validated paging and sorting.

use unisoc_core::pagination::{PageRequest, SortSpec};
use unisoc_core::validation::{check_one_of, FieldErrors};

use crate::error::AppResult;

/// Clamp `page`/`limit` and parse `sort` against the resource's sortable
/// columns. An unknown sort column is a validation error.
pub fn page_and_sort(
    page: Option<i64>,
    limit: Option<i64>,
    sort: Option<&str>,
    default_limit: i64,
    columns: &[&'static str],
) -> AppResult<(PageRequest, SortSpec)> {
    let page = PageRequest::new(page, limit, default_limit);
    let sort = SortSpec::parse(sort, columns)?;
    Ok((page, sort))
}

/// Normalise an exact-match filter on a closed set.
///
/// Blank values mean "no filter"; values outside `allowed` are reported
/// against `field`.
pub fn closed_set_filter<'a>(
    field: &str,
    value: Option<&'a str>,
    allowed: &[&str],
) -> AppResult<Option<&'a str>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if let Err(err) = check_one_of(value, allowed) {
        let mut fields = FieldErrors::new();
        fields.add(
            field,
            err.message.map(|m| m.to_string()).unwrap_or_default(),
        );
        fields.into_result()?;
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use unisoc_core::error::CoreError;
    use unisoc_core::pagination::SortDirection;

    use super::*;
    use crate::error::AppError;

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let (page, sort) = page_and_sort(None, None, None, 5, &["created_at", "title"]).unwrap();
        assert_eq!(page, PageRequest { page: 1, limit: 5 });
        assert_eq!(sort.column, "created_at");
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        let err = page_and_sort(None, None, Some("password_hash"), 10, &["created_at"]);
        assert_matches!(err, Err(AppError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn blank_filter_is_ignored() {
        assert_eq!(closed_set_filter("status", Some("  "), &["read"]).unwrap(), None);
        assert_eq!(closed_set_filter("status", None, &["read"]).unwrap(), None);
    }

    #[test]
    fn known_filter_value_passes_through() {
        assert_eq!(
            closed_set_filter("status", Some("read"), &["read", "unread"]).unwrap(),
            Some("read")
        );
    }

    #[test]
    fn unknown_filter_value_is_a_field_error() {
        let err = closed_set_filter("tag", Some("Parties"), &["Events"]).unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::InvalidFields(fields)) => {
            assert!(fields.get("tag").unwrap().contains("Parties"));
        });
    }
}
