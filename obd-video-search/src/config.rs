//! Explicit configuration for the YouTube client.
//!
//! The access credential and endpoint locations live in an [`ApiConfig`] that is built once at
//! startup and handed to [`crate::YouTubeClient::new`]. Nothing in this crate reads the
//! credential from the environment on its own after that point.

use eyre::Context;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Default endpoint for `search.list`.
pub const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Default endpoint for `commentThreads.list`.
pub const COMMENTS_URL: &str = "https://www.googleapis.com/youtube/v3/commentThreads";

/// Default endpoint for `videos.list`.
pub const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Older name for [`API_KEY_VAR`], still honoured as a fallback.
pub const LEGACY_API_KEY_VAR: &str = "EXPO_PUBLIC_YOUTUBE_API_KEY";

/// How many statistics lookups enrichment may have in flight at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichConcurrency {
    /// One request per search result, all issued at once.
    #[default]
    Unbounded,
    /// At most this many requests in flight.
    Limited(NonZeroUsize),
}

impl EnrichConcurrency {
    /// Parses `0` or `unbounded` as [`EnrichConcurrency::Unbounded`], any other integer as a limit.
    pub fn parse(s: &str) -> eyre::Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unbounded") {
            return Ok(Self::Unbounded);
        }
        let n: usize = s
            .parse()
            .with_context(|| format!("parse enrichment concurrency '{s}'"))?;
        Ok(NonZeroUsize::new(n).map_or(Self::Unbounded, Self::Limited))
    }
}

/// Everything the client needs to talk to the YouTube Data API.
#[derive(Clone)]
pub struct ApiConfig {
    /// API key sent as the `key` query parameter on every request.
    pub api_key: String,
    pub search_url: String,
    pub videos_url: String,
    pub comments_url: String,
    /// Applied to every request when set. `None` means a stalled request waits forever.
    pub request_timeout: Option<Duration>,
    pub enrich_concurrency: EnrichConcurrency,
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &if self.api_key.is_empty() { "<empty>" } else { "<redacted>" })
            .field("search_url", &self.search_url)
            .field("videos_url", &self.videos_url)
            .field("comments_url", &self.comments_url)
            .field("request_timeout", &self.request_timeout)
            .field("enrich_concurrency", &self.enrich_concurrency)
            .finish()
    }
}

impl ApiConfig {
    /// Creates a configuration pointing at the public YouTube endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            search_url: SEARCH_URL.to_string(),
            videos_url: VIDEOS_URL.to_string(),
            comments_url: COMMENTS_URL.to_string(),
            request_timeout: None,
            enrich_concurrency: EnrichConcurrency::Unbounded,
        }
    }

    /// Points all three endpoints at `base`, using the same path names YouTube does.
    ///
    /// Mostly useful for tests against a local mock server.
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.search_url = format!("{base}/search");
        self.videos_url = format!("{base}/videos");
        self.comments_url = format!("{base}/commentThreads");
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_enrich_concurrency(mut self, concurrency: EnrichConcurrency) -> Self {
        self.enrich_concurrency = concurrency;
        self
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the API key from `YOUTUBE_API_KEY` (or the legacy `EXPO_PUBLIC_YOUTUBE_API_KEY`),
    /// and honours these optional overrides:
    ///
    /// * `OBD_VIDEOS_SEARCH_URL`, `OBD_VIDEOS_VIDEOS_URL`, `OBD_VIDEOS_COMMENTS_URL`
    /// * `OBD_VIDEOS_ENRICH_CONCURRENCY` (`unbounded`, `0`, or a positive limit)
    /// * `OBD_VIDEOS_TIMEOUT_SECS`
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup` instead.
    pub fn from_lookup<F>(lookup: F) -> eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = match non_empty(API_KEY_VAR) {
            Some(key) => key,
            None => {
                let key = non_empty(LEGACY_API_KEY_VAR).ok_or_else(|| {
                    eyre::eyre!("no API key configured; set {API_KEY_VAR} in the environment")
                })?;
                tracing::debug!(var = LEGACY_API_KEY_VAR, "using API key from legacy variable");
                key
            }
        };

        let mut config = Self::new(api_key.trim());
        if let Some(url) = non_empty("OBD_VIDEOS_SEARCH_URL") {
            config.search_url = url;
        }
        if let Some(url) = non_empty("OBD_VIDEOS_VIDEOS_URL") {
            config.videos_url = url;
        }
        if let Some(url) = non_empty("OBD_VIDEOS_COMMENTS_URL") {
            config.comments_url = url;
        }
        if let Some(limit) = non_empty("OBD_VIDEOS_ENRICH_CONCURRENCY") {
            config.enrich_concurrency =
                EnrichConcurrency::parse(&limit).context("read OBD_VIDEOS_ENRICH_CONCURRENCY")?;
        }
        if let Some(secs) = non_empty("OBD_VIDEOS_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("parse OBD_VIDEOS_TIMEOUT_SECS '{secs}'"))?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
