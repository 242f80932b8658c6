//! Read-only YouTube Data API v3 client.
//!
//! Three endpoints are used, all with API-key authentication:
//!
//! - `search.list` to find repair videos for a diagnostic code
//!   ([`YouTubeClient::search_videos`])
//! - `videos.list` with `part=statistics` to look up view counts
//!   ([`YouTubeClient::fetch_statistics`])
//! - `commentThreads.list` to read the top-level comments on a video
//!   ([`YouTubeClient::fetch_comments`])
//!
//! Search failures are propagated as [`UpstreamRequestError`]. The other two calls come in two
//! flavours: `try_*`, which propagates the error, and a lenient form that logs it and yields
//! "no data", since neither view counts nor comments are essential to the results.
//!
//! None of the calls follow `nextPageToken`; only the first page is ever read.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use obd_video_search::{ApiConfig, YouTubeClient};
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new(ApiConfig::from_env()?)?;
//! for video in client.search_videos("P0300").await? {
//!     println!("{} ({})", video.title, video.id);
//!     for comment in client.fetch_comments(&video.id, 3).await {
//!         println!("  {}: {}", comment.author_display_name, comment.text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod comments;
pub mod error;
pub mod search;
pub mod types;
pub mod videos;

pub use client::{DEFAULT_COMMENT_LIMIT, SEARCH_MAX_RESULTS, YouTubeClient, search_query_for};
pub use error::UpstreamRequestError;
