//! Augmenting search results with view counts.
//!
//! After a search returns, each summary gets its own `videos.list` lookup. The lookups run
//! concurrently (all at once, or up to a configured limit) and are joined before returning.
//! A failed lookup only costs that one summary its view count.

use crate::config::EnrichConcurrency;
use crate::records::{VideoStatistics, VideoSummary};
use crate::youtube_api::{UpstreamRequestError, YouTubeClient};
use futures::stream::{self, StreamExt};
use std::future::Future;
use tracing::instrument;

/// Looks up statistics for every summary and merges the results back in.
///
/// The returned list always has the same length and order as `summaries`. Entries whose lookup
/// failed or came back empty keep `view_count: None`.
#[instrument(skip(client, summaries), fields(videos = summaries.len()))]
pub async fn enrich_with_statistics(
    client: &YouTubeClient,
    summaries: Vec<VideoSummary>,
    concurrency: EnrichConcurrency,
) -> Vec<VideoSummary> {
    enrich_with(summaries, concurrency, |id| async move {
        client.fetch_statistics(&id).await
    })
    .await
}

/// The fan-out behind [`enrich_with_statistics`], generic over how statistics are looked up.
pub async fn enrich_with<F, Fut>(
    summaries: Vec<VideoSummary>,
    concurrency: EnrichConcurrency,
    lookup: F,
) -> Vec<VideoSummary>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Option<VideoStatistics>>,
{
    let total = summaries.len();
    let lookups = summaries.into_iter().map(|mut summary| {
        let stats = lookup(summary.id.clone());
        async move {
            summary.apply_statistics(stats.await);
            summary
        }
    });

    let enriched: Vec<_> = match concurrency {
        EnrichConcurrency::Unbounded => futures::future::join_all(lookups).await,
        // `buffered` keeps input order even though lookups complete out of order
        EnrichConcurrency::Limited(limit) => {
            stream::iter(lookups).buffered(limit.get()).collect().await
        }
    };

    let with_views = enriched.iter().filter(|s| s.view_count.is_some()).count();
    tracing::debug!(total, with_views, "enriched search results");

    enriched
}

/// Runs a search and enriches its results, using the client's configured concurrency policy.
///
/// Only the search itself can fail; enrichment failures degrade individual entries.
pub async fn search_and_enrich(
    client: &YouTubeClient,
    code: &str,
) -> Result<Vec<VideoSummary>, UpstreamRequestError> {
    let summaries = client.search_videos(code).await?;
    let concurrency = client.config().enrich_concurrency;
    Ok(enrich_with_statistics(client, summaries, concurrency).await)
}
