//! Formatting rules for showing records to a user.

use crate::records::VideoSummary;
use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Shown in place of the comment list when a video has none (or they could not be loaded).
pub const NO_COMMENTS_MESSAGE: &str = "No comments available for this video.";

/// Shown when the search itself fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch videos. Please try again.";

/// Groups a decimal view count into thousands: `"1234567"` becomes `"1,234,567"`.
///
/// Missing or non-numeric counts format as the empty string, so callers can skip the
/// "views" label entirely.
pub fn format_view_count(view_count: Option<&str>) -> String {
    let Some(count) = view_count.map(str::trim).and_then(|s| s.parse::<u64>().ok()) else {
        return String::new();
    };

    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders an RFC 3339 timestamp as a short date, e.g. `"Mar 5, 2024"` (UTC).
///
/// Anything that does not parse is returned unchanged.
pub fn format_published_date(published_at: &str) -> String {
    match published_at.parse::<Timestamp>() {
        Ok(ts) => ts.to_zoned(TimeZone::UTC).strftime("%b %-d, %Y").to_string(),
        Err(e) => {
            tracing::trace!(published_at, error = %e, "unparseable publish date");
            published_at.to_string()
        }
    }
}

/// Link to the video's watch page.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Link suitable for embedding the player.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// Text offered when the user shares a video.
pub fn share_message(video: &VideoSummary) -> String {
    format!(
        "Check out this video about OBD code: {}\n{}",
        video.title,
        watch_url(&video.id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_view_count() {
        assert_eq!(format_view_count(Some("0")), "0");
        assert_eq!(format_view_count(Some("999")), "999");
        assert_eq!(format_view_count(Some("1000")), "1,000");
        assert_eq!(format_view_count(Some("1500")), "1,500");
        assert_eq!(format_view_count(Some("123456")), "123,456");
        assert_eq!(format_view_count(Some("1234567")), "1,234,567");
        assert_eq!(
            format_view_count(Some("18446744073709551615")),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_format_view_count_absent_or_garbage() {
        assert_eq!(format_view_count(None), "");
        assert_eq!(format_view_count(Some("")), "");
        assert_eq!(format_view_count(Some("lots")), "");
        assert_eq!(format_view_count(Some("-5")), "");
    }

    #[test]
    fn test_format_published_date() {
        assert_eq!(format_published_date("2024-03-05T12:00:00Z"), "Mar 5, 2024");
        assert_eq!(format_published_date("2019-12-31T23:59:59Z"), "Dec 31, 2019");
        assert_eq!(format_published_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_links_and_share() {
        let video = VideoSummary {
            id: "abc123".into(),
            title: "Fix P0300".into(),
            description: String::new(),
            thumbnail_url: String::new(),
            channel_title: String::new(),
            published_at: String::new(),
            view_count: None,
        };
        assert_eq!(watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
        assert_eq!(embed_url("abc123"), "https://www.youtube.com/embed/abc123");
        assert_eq!(
            share_message(&video),
            "Check out this video about OBD code: Fix P0300\nhttps://www.youtube.com/watch?v=abc123"
        );
    }
}
