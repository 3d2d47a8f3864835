use std::net::SocketAddr;

use crate::strategy::{CompanyStrategy, InvestorStrategy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub feed_url: String,
    pub max_articles: usize,
    pub top_deals: usize,
    /// Cache lifetime in seconds; `None` keeps fetched articles until invalidated.
    pub cache_ttl_secs: Option<u64>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub investor_strategy: InvestorStrategy,
    pub company_strategy: CompanyStrategy,
    pub ner_url: Option<String>,
    pub ner_api_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("feed_url", &self.feed_url)
            .field("max_articles", &self.max_articles)
            .field("top_deals", &self.top_deals)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("investor_strategy", &self.investor_strategy)
            .field("company_strategy", &self.company_strategy)
            .field("ner_url", &self.ner_url)
            .field(
                "ner_api_token",
                &self.ner_api_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
