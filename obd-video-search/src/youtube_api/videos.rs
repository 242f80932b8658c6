//! YouTube Videos API types.

use serde::{Deserialize, Serialize};

/// Response structure for the `videos.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Videos matching the requested ids. Unknown or private ids are silently left out.
    #[serde(default)]
    pub items: Vec<Video>,
}

/// A `video` resource, requested with `part=statistics` only.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub statistics: Statistics,
}

/// Statistics about the video.
///
/// YouTube encodes all counters as decimal strings. Any of them may be missing, for example
/// when the owner hides like counts.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}
