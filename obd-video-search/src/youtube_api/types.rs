//! Resource fragments shared by several YouTube API responses.

use serde::{Deserialize, Serialize};

/// A single thumbnail image.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// The thumbnail renditions attached to a snippet, keyed by size.
///
/// Search results always carry `default`, `medium` and `high`; the larger sizes only exist for
/// some videos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the medium rendition, falling back to whatever else is present.
    pub fn medium_url(&self) -> Option<&str> {
        [&self.medium, &self.high, &self.default, &self.standard, &self.maxres]
            .into_iter()
            .flatten()
            .map(|t| t.url.as_str())
            .next()
    }
}
