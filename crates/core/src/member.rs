//! Member account statuses and profile field limits.
//!
//! Registration creates a `pending` account. An admin either approves it
//! (`pending -> approved`) or rejects it, which deletes the account. Both
//! transitions are one-way.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";

/// All valid account statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED];

/// Columns a member or member-request listing may be sorted by.
pub const SORT_COLUMNS: &[&str] = &["created_at", "name"];

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// `validator` hook for the `status` field.
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    check_one_of(status, VALID_STATUSES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert!(validate_status(STATUS_PENDING).is_ok());
        assert!(validate_status(STATUS_APPROVED).is_ok());
        assert!(validate_status("rejected").is_err());
    }
}
