//! The flat records handed to the presentation layer.
//!
//! These are deliberately decoupled from the API wire types in [`crate::youtube_api`]: they
//! carry only the fields a results list or a video page shows.

use crate::youtube_api::comments::CommentThread;
use crate::youtube_api::search::SearchResult;
use crate::youtube_api::videos::Video;
use serde::{Deserialize, Serialize};

/// One video search hit.
///
/// `view_count` is filled in by [`crate::enrich`] after the search returns. `None` means the
/// statistics were unavailable, not that the video has zero views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub view_count: Option<String>,
}

impl VideoSummary {
    /// Maps a search result into a summary.
    ///
    /// Returns `None` for results that are not videos (no `videoId`).
    pub fn from_search_result(result: SearchResult) -> Option<Self> {
        let id = result.id.video_id?;
        let snippet = result.snippet;
        Some(Self {
            id,
            thumbnail_url: snippet
                .thumbnails
                .medium_url()
                .unwrap_or_default()
                .to_string(),
            title: snippet.title,
            description: snippet.description,
            channel_title: snippet.channel_title,
            published_at: snippet.published_at,
            view_count: None,
        })
    }

    /// Applies the outcome of a statistics lookup.
    ///
    /// Statistics for a different video are ignored.
    pub fn apply_statistics(&mut self, stats: Option<VideoStatistics>) {
        match stats {
            Some(stats) if stats.video_id == self.id => self.view_count = Some(stats.view_count),
            Some(stats) => {
                tracing::warn!(
                    summary = %self.id,
                    statistics = %stats.video_id,
                    "statistics belong to another video; ignoring"
                );
            }
            None => {}
        }
    }
}

/// The top-level comment of one comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author_display_name: String,
    pub author_profile_image_url: String,
    pub like_count: u64,
    pub published_at: String,
}

impl From<CommentThread> for Comment {
    fn from(thread: CommentThread) -> Self {
        let top = thread.snippet.top_level_comment;
        Self {
            id: top.id,
            text: top.snippet.text_display,
            author_display_name: top.snippet.author_display_name,
            author_profile_image_url: top.snippet.author_profile_image_url,
            like_count: top.snippet.like_count,
            published_at: top.snippet.published_at,
        }
    }
}

/// View statistics for a single video, only ever used to enrich a [`VideoSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStatistics {
    pub video_id: String,
    /// Decimal string, exactly as the API reports it.
    pub view_count: String,
}

impl VideoStatistics {
    /// Returns `None` when the video does not expose a view count (missing or blank).
    pub fn from_video(video: Video) -> Option<Self> {
        let view_count = video
            .statistics
            .view_count
            .filter(|count| !count.trim().is_empty())?;
        Some(Self {
            view_count,
            video_id: video.id,
        })
    }
}
