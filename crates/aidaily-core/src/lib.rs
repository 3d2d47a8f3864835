//! Shared types and configuration for AI Investment Daily.

pub mod app_config;
pub mod article;
pub mod config;
pub mod filters;
pub mod strategy;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use article::{Article, ExtractionResult};
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{parse_amount, MinFunding, RecordFilter, RoundFilter};
pub use strategy::{CompanyStrategy, InvestorStrategy};

pub const DEFAULT_FEED_URL: &str = "https://techcrunch.com/tag/artificial-intelligence/feed/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
