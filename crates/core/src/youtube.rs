//! YouTube link parsing.
//!
//! Video records store the link the admin pasted plus the 11-character video
//! id extracted from it, which the frontend uses to build embed URLs.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::validation::custom_error;

/// Columns a video listing may be sorted by.
pub const SORT_COLUMNS: &[&str] = &["created_at", "title"];

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/].*)?$",
    )
    .expect("static regex is valid")
});

/// Extract the video id from a watch, short-link, embed, shorts or live URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_URL
        .captures(url.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// `validator` hook for the `url` field.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match extract_video_id(url) {
        Some(_) => Ok(()),
        None => Err(custom_error(
            "youtube_url",
            "Please provide a valid YouTube video URL".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_common_url_shapes() {
        let id = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), id);
        assert_eq!(
            extract_video_id("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42"),
            id
        );
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"), id);
        assert_eq!(extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"), id);
        assert_eq!(extract_video_id("https://m.youtube.com/shorts/dQw4w9WgXcQ"), id);
        assert_eq!(extract_video_id("  youtube.com/live/dQw4w9WgXcQ  "), id);
    }

    #[test]
    fn rejects_other_hosts_and_short_ids() {
        assert_eq!(extract_video_id("https://vimeo.com/123456"), None);
        assert_eq!(extract_video_id("https://youtube.com/watch?v=short"), None);
        assert_eq!(extract_video_id("https://notyoutube.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn validator_hook_reports_message() {
        assert!(validate_url("https://youtu.be/dQw4w9WgXcQ").is_ok());
        let err = validate_url("https://example.com").unwrap_err();
        assert_eq!(err.code, "youtube_url");
    }
}
