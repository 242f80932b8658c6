//! Core YouTube API client functionality.

use crate::config::ApiConfig;
use crate::records::{Comment, VideoStatistics, VideoSummary};
use crate::youtube_api::UpstreamRequestError;
use crate::youtube_api::{
    comments::CommentThreadListResponse, search::SearchListResponse, videos::VideoListResponse,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::instrument;

/// Number of results requested from `search.list`.
pub const SEARCH_MAX_RESULTS: u32 = 20;

/// Number of comment threads requested when the caller does not say otherwise.
pub const DEFAULT_COMMENT_LIMIT: u32 = 10;

/// Builds the full-text query sent to YouTube for a diagnostic code.
pub fn search_query_for(code: &str) -> String {
    format!("OBD code {code} repair")
}

/// Client for the read-only parts of the YouTube Data API v3 that the video search needs.
///
/// Every call is a single unauthenticated GET carrying the configured API key. There is no
/// session state, so the client is cheap to clone and share between tasks.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    config: Arc<ApiConfig>,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a new client with its own HTTP connection pool.
    ///
    /// Fails only if the underlying HTTP client cannot be built (e.g. no TLS backend).
    pub fn new(config: ApiConfig) -> Result<Self, UpstreamRequestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(UpstreamRequestError::Client)?;
        Ok(Self::with_http_client(config, client))
    }

    /// Creates a new client that shares an existing HTTP client.
    ///
    /// `config.request_timeout` is not applied in this case; configure it on `client` instead.
    pub fn with_http_client(config: ApiConfig, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues a GET with the API key attached and decodes the JSON body.
    ///
    /// This consolidates the logic shared by all endpoints:
    /// - `key` query parameter
    /// - status code validation (the error body is kept for diagnostics)
    /// - JSON decoding into the endpoint's response type
    #[instrument(skip(self, query_params), level = tracing::Level::TRACE)]
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, UpstreamRequestError> {
        let response = self
            .client
            .get(url)
            .query(query_params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            // reqwest errors embed the full request URL, `key` included
            .map_err(|source| UpstreamRequestError::Transport {
                url: url.to_string(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(UpstreamRequestError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|source| UpstreamRequestError::Decode {
                url: url.to_string(),
                source: source.without_url(),
            })
    }

    /// Searches for repair videos about a diagnostic code.
    ///
    /// Uses the `search.list` API with `type=video` and `maxResults=20`, querying for
    /// `"OBD code <code> repair"`. Results come back in YouTube's relevance order. Only the first
    /// page is ever fetched.
    ///
    /// # Arguments
    ///
    /// * `code` - The diagnostic code as typed by the user; surrounding whitespace is ignored
    ///
    /// # Errors
    ///
    /// [`UpstreamRequestError::EmptyQuery`] without sending anything if `code` is blank, or the
    /// transport/status/decoding failure otherwise. Nothing is retried.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search_videos(
        &self,
        code: &str,
    ) -> Result<Vec<VideoSummary>, UpstreamRequestError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(UpstreamRequestError::EmptyQuery);
        }

        let q = search_query_for(code);
        let max_results = SEARCH_MAX_RESULTS.to_string();
        let query_params = [
            ("part", "snippet"),
            ("maxResults", max_results.as_str()),
            ("q", q.as_str()),
            ("type", "video"),
        ];

        let response: SearchListResponse = self
            .get_json(&self.config.search_url, &query_params)
            .await?;
        let returned_items = response.items.len();

        let summaries: Vec<_> = response
            .items
            .into_iter()
            .filter_map(VideoSummary::from_search_result)
            .collect();

        tracing::debug!(
            returned_items,
            videos = summaries.len(),
            "fetched search results"
        );

        Ok(summaries)
    }

    /// Gets the view count for a single video.
    ///
    /// Uses the `videos.list` API with `part=statistics`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if YouTube returns no matching video or the video hides its view count.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self), ret)]
    pub async fn try_fetch_statistics(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoStatistics>, UpstreamRequestError> {
        let query_params = [("part", "statistics"), ("id", video_id)];

        let videos: VideoListResponse = self
            .get_json(&self.config.videos_url, &query_params)
            .await?;

        tracing::trace!(
            video_id,
            returned_items = videos.items.len(),
            "fetched video statistics"
        );

        Ok(videos
            .items
            .into_iter()
            .next()
            .and_then(VideoStatistics::from_video))
    }

    /// Like [`Self::try_fetch_statistics`], but any failure is logged and reported as `None`.
    ///
    /// Statistics are an optional decoration on a search result, so a failed lookup must never
    /// take anything else down with it.
    pub async fn fetch_statistics(&self, video_id: &str) -> Option<VideoStatistics> {
        match self.try_fetch_statistics(video_id).await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(video_id, error = %e, "statistics lookup failed");
                None
            }
        }
    }

    /// Lists the top-level comments on a video.
    ///
    /// Uses the `commentThreads.list` API with `part=snippet` and `textFormat=plainText`.
    /// Replies are never fetched, and only the first page is read. Order is whatever YouTube
    /// returns.
    ///
    /// # Arguments
    ///
    /// * `video_id` - The video whose comments to list
    /// * `limit` - `maxResults` for the request (YouTube accepts 1-100)
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    #[instrument(skip(self))]
    pub async fn try_fetch_comments(
        &self,
        video_id: &str,
        limit: u32,
    ) -> Result<Vec<Comment>, UpstreamRequestError> {
        let max_results = limit.to_string();
        let query_params = [
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results.as_str()),
            ("textFormat", "plainText"),
        ];

        let threads: CommentThreadListResponse = self
            .get_json(&self.config.comments_url, &query_params)
            .await?;

        tracing::debug!(
            video_id,
            returned_items = threads.items.len(),
            "fetched comment threads"
        );

        Ok(threads.items.into_iter().map(Comment::from).collect())
    }

    /// Like [`Self::try_fetch_comments`], but any failure is logged and reported as no comments.
    ///
    /// Comments also fail routinely when the owner has disabled them (HTTP 403).
    pub async fn fetch_comments(&self, video_id: &str, limit: u32) -> Vec<Comment> {
        match self.try_fetch_comments(video_id, limit).await {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!(video_id, error = %e, "comment lookup failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_for() {
        assert_eq!(search_query_for("P0300"), "OBD code P0300 repair");
        assert_eq!(search_query_for("P0420 B1"), "OBD code P0420 B1 repair");
    }

    #[tokio::test]
    async fn test_empty_query_sends_nothing() {
        // the port is never contacted; an empty query must fail before any I/O
        let client = YouTubeClient::new(ApiConfig::new("k").with_base_url("http://127.0.0.1:9"))
            .unwrap();
        for query in ["", "   ", "\t\n"] {
            let err = client.search_videos(query).await.unwrap_err();
            assert!(
                matches!(err, UpstreamRequestError::EmptyQuery),
                "{query:?}: {err:?}"
            );
        }
    }
}
