use std::time::Duration;

use aidaily_core::{AppConfig, Article};
use reqwest::Client;

use crate::error::FeedError;
use crate::parse::parse_feed;

/// HTTP client for the single configured news feed.
///
/// One GET per call, no retries. Non-2xx responses surface as
/// [`FeedError::UnexpectedStatus`] so callers can show a notice instead of
/// an empty page.
pub struct FeedClient {
    client: Client,
    feed_url: String,
    max_articles: usize,
}

impl FeedClient {
    /// Creates a `FeedClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        feed_url: &str,
        max_articles: usize,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            feed_url: feed_url.to_owned(),
            max_articles,
        })
    }

    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, FeedError> {
        Self::new(
            &config.feed_url,
            config.max_articles,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the feed and return up to `max_articles` entries in feed order.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure or timeout.
    /// - [`FeedError::UnexpectedStatus`] on a non-2xx response.
    /// - [`FeedError::Parse`] if the body is not RSS or Atom.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        tracing::debug!(url = %self.feed_url, "fetching feed");

        let response = self.client.get(&self.feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.feed_url.clone(),
            });
        }

        let body = response.bytes().await?;
        let articles = parse_feed(&body, self.max_articles)?;

        tracing::info!(
            url = %self.feed_url,
            count = articles.len(),
            "fetched feed articles"
        );
        Ok(articles)
    }
}
