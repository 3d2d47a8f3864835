//! Caller-owned memo of the last successful feed fetch.

use aidaily_core::Article;
use chrono::{DateTime, Duration, Utc};

use crate::client::FeedClient;
use crate::error::FeedError;

/// Articles from one successful fetch and when they were fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFeed {
    pub articles: Vec<Article>,
    pub fetched_at: DateTime<Utc>,
}

/// Holds the last fetched articles until the TTL lapses or [`FeedCache::invalidate`]
/// is called. Failed fetches are never cached.
#[derive(Debug, Clone, Default)]
pub struct FeedCache {
    ttl: Option<Duration>,
    entry: Option<CachedFeed>,
}

impl FeedCache {
    /// `ttl_secs = None` keeps entries for the lifetime of the cache.
    #[must_use]
    pub fn new(ttl_secs: Option<u64>) -> Self {
        Self {
            ttl: ttl_secs
                .and_then(|secs| i64::try_from(secs).ok())
                .and_then(Duration::try_seconds),
            entry: None,
        }
    }

    /// The cached entry if it is still fresh at `now`.
    #[must_use]
    pub fn get(&self, now: DateTime<Utc>) -> Option<&CachedFeed> {
        self.entry.as_ref().filter(|cached| match self.ttl {
            None => true,
            Some(ttl) => now.signed_duration_since(cached.fetched_at) < ttl,
        })
    }

    /// Replace the cached entry and return it.
    pub fn store(&mut self, articles: Vec<Article>, fetched_at: DateTime<Utc>) -> &CachedFeed {
        tracing::debug!(count = articles.len(), %fetched_at, "feed cache stored");
        self.entry.insert(CachedFeed {
            articles,
            fetched_at,
        })
    }

    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::debug!("feed cache invalidated");
        }
    }

    /// Return the cached articles, fetching through `client` when empty or stale.
    ///
    /// # Errors
    ///
    /// Propagates any [`FeedError`] from the fetch; the previous entry (if any)
    /// is left untouched.
    pub async fn get_or_fetch(&mut self, client: &FeedClient) -> Result<CachedFeed, FeedError> {
        let now = Utc::now();
        if let Some(cached) = self.get(now) {
            tracing::debug!(
                fetched_at = %cached.fetched_at,
                count = cached.articles.len(),
                "feed cache hit"
            );
            return Ok(cached.clone());
        }

        let articles = client.fetch_articles().await?;
        Ok(self.store(articles, now).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            link: format!("https://example.com/{title}"),
            published: String::new(),
            summary: String::new(),
        }
    }

    #[test]
    fn empty_cache_returns_none() {
        let cache = FeedCache::new(None);
        assert!(cache.get(Utc::now()).is_none());
    }

    #[test]
    fn without_ttl_entries_never_expire() {
        let mut cache = FeedCache::new(None);
        let fetched_at = Utc::now();
        cache.store(vec![article("a")], fetched_at);
        let later = fetched_at + Duration::days(365);
        assert_eq!(cache.get(later).map(|c| c.articles.len()), Some(1));
    }

    #[test]
    fn ttl_expires_entries() {
        let mut cache = FeedCache::new(Some(60));
        let fetched_at = Utc::now();
        cache.store(vec![article("a")], fetched_at);
        assert!(cache.get(fetched_at + Duration::seconds(59)).is_some());
        assert!(cache.get(fetched_at + Duration::seconds(60)).is_none());
    }

    #[test]
    fn invalidate_clears_entry() {
        let mut cache = FeedCache::new(None);
        cache.store(vec![article("a")], Utc::now());
        cache.invalidate();
        assert!(cache.get(Utc::now()).is_none());
    }

    #[test]
    fn empty_article_list_is_still_a_cache_hit() {
        let mut cache = FeedCache::new(None);
        cache.store(vec![], Utc::now());
        let cached = cache.get(Utc::now()).expect("empty fetch should be cached");
        assert!(cached.articles.is_empty());
    }
}
