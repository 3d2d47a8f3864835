//! Ingest → extract, memoized per fetched feed.

use aidaily_core::ExtractionResult;
use aidaily_extract::extract_articles;
use aidaily_feed::FeedError;
use chrono::{DateTime, Utc};

use crate::api::AppState;

/// Extracted records for the articles currently in the cache.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub records: Vec<ExtractionResult>,
    pub fetched_at: DateTime<Utc>,
}

/// Fetch (or reuse cached) articles and extract them.
///
/// Extraction runs once per fetched feed; later calls reuse the memoized
/// records until the cache hands back a different `fetched_at`. Locks are taken
/// memo first, then cache, and held across the fetch so concurrent page loads
/// share one request to the feed and one extraction pass.
pub(crate) async fn load_snapshot(state: &AppState) -> Result<Snapshot, FeedError> {
    let mut memo = state.snapshot.lock().await;
    let cached = {
        let mut cache = state.cache.lock().await;
        cache.get_or_fetch(&state.feed).await?
    };

    if let Some(snapshot) = memo.as_ref().filter(|s| s.fetched_at == cached.fetched_at) {
        tracing::debug!(fetched_at = %snapshot.fetched_at, "reusing extracted records");
        return Ok(snapshot.clone());
    }

    let records = extract_articles(
        &state.extractor,
        &cached.articles,
        state.recognizer.as_deref(),
    )
    .await;

    let snapshot = memo.insert(Snapshot {
        records,
        fetched_at: cached.fetched_at,
    });
    Ok(snapshot.clone())
}

/// Drop both the cached feed and its extracted records.
pub(crate) async fn invalidate(state: &AppState) {
    let mut memo = state.snapshot.lock().await;
    memo.take();
    state.cache.lock().await.invalidate();
}
