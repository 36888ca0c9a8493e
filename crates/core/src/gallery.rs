//! Gallery image tags.
//!
//! Every gallery image carries exactly one tag from a closed set. The set
//! is mirrored by the `ck_gallery_images_tag` constraint.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const TAG_NEWCOMERS_WELCOME: &str = "Newcomer's welcome";
pub const TAG_RELIEF: &str = "Relief";
pub const TAG_PARTY: &str = "Party";
pub const TAG_PROGRAMS: &str = "Programs";
pub const TAG_OTHERS: &str = "Others";

/// All valid gallery tags.
pub const VALID_TAGS: &[&str] = &[
    TAG_NEWCOMERS_WELCOME,
    TAG_RELIEF,
    TAG_PARTY,
    TAG_PROGRAMS,
    TAG_OTHERS,
];

/// Columns a gallery listing may be sorted by.
pub const SORT_COLUMNS: &[&str] = &["created_at", "title", "tag"];

/// `validator` hook for the `tag` field.
pub fn validate_tag(tag: &str) -> Result<(), ValidationError> {
    check_one_of(tag, VALID_TAGS)
}
