//! YouTube Search API types.

use crate::youtube_api::types::Thumbnails;
use serde::{Deserialize, Serialize};

/// Response structure for the `search.list` API call.
///
/// Only the fields we consume are modelled. `nextPageToken` is deliberately absent: results
/// beyond the first page are never requested.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

/// A `searchResult` resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: SearchResultSnippet,
}

/// Identifies the resource that matched the search.
///
/// Exactly one of the id fields is set, depending on `kind`. With `type=video` it is always
/// `videoId`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultId {
    pub kind: Option<String>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultSnippet {
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
}
