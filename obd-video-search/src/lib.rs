//! Find repair videos for vehicle diagnostic codes.
//!
//! Given an OBD code such as `P0300`, [`YouTubeClient::search_videos`] finds matching repair
//! videos, [`enrich::enrich_with_statistics`] decorates them with view counts, and
//! [`YouTubeClient::fetch_comments`] reads the top-level comments on any one of them.
//!
//! Everything is fetched fresh on every call; nothing is cached or persisted.

pub mod config;
pub mod enrich;
pub mod format;
pub mod records;
pub mod scope;
pub mod youtube_api;

pub use config::{ApiConfig, EnrichConcurrency};
pub use enrich::{enrich_with_statistics, search_and_enrich};
pub use records::{Comment, VideoStatistics, VideoSummary};
pub use scope::RequestScope;
pub use youtube_api::{UpstreamRequestError, YouTubeClient};
