//! YouTube Comment Threads API types.

use serde::{Deserialize, Serialize};

/// Response structure for the `commentThreads.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
}

/// A `commentThread` resource: a top-level comment plus (optionally) its replies.
///
/// We only ever request `part=snippet`, so replies are never present.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThread {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadSnippet {
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: CommentResource,
    #[serde(rename = "totalReplyCount", default)]
    pub total_reply_count: u64,
}

/// A `comment` resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentResource {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentSnippet {
    /// The comment text, in whatever format `textFormat` asked for.
    #[serde(rename = "textDisplay", default)]
    pub text_display: String,
    #[serde(rename = "authorDisplayName", default)]
    pub author_display_name: String,
    #[serde(rename = "authorProfileImageUrl", default)]
    pub author_profile_image_url: String,
    #[serde(rename = "likeCount", default)]
    pub like_count: u64,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}
