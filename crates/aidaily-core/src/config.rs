use crate::app_config::{AppConfig, Environment};
use crate::strategy::{CompanyStrategy, InvestorStrategy};
use crate::{ConfigError, DEFAULT_FEED_URL};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working config
/// pointed at the TechCrunch AI feed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("AIDAILY_ENV", "development"))?;

    let bind_addr = or_default("AIDAILY_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("AIDAILY_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("AIDAILY_LOG_LEVEL", "info");

    let feed_url = or_default("AIDAILY_FEED_URL", DEFAULT_FEED_URL);
    if !(feed_url.starts_with("http://") || feed_url.starts_with("https://")) {
        return Err(invalid(
            "AIDAILY_FEED_URL",
            format!("'{feed_url}' is not an http(s) URL"),
        ));
    }

    let max_articles = parse_usize("AIDAILY_MAX_ARTICLES", "20")?;
    if max_articles == 0 {
        return Err(invalid("AIDAILY_MAX_ARTICLES", "must be at least 1".to_string()));
    }
    let top_deals = parse_usize("AIDAILY_TOP_DEALS", "5")?;

    let cache_ttl_secs = optional("AIDAILY_CACHE_TTL_SECS")
        .map(|raw| {
            raw.parse::<u64>()
                .map_err(|e| invalid("AIDAILY_CACHE_TTL_SECS", e.to_string()))
        })
        .transpose()?;

    let request_timeout_secs = parse_u64("AIDAILY_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("AIDAILY_USER_AGENT", "aidaily/0.1 (investment-digest)");

    let investor_strategy = or_default("AIDAILY_INVESTOR_STRATEGY", "lookahead")
        .parse::<InvestorStrategy>()
        .map_err(|reason| invalid("AIDAILY_INVESTOR_STRATEGY", reason))?;
    let company_strategy = or_default("AIDAILY_COMPANY_STRATEGY", "pattern")
        .parse::<CompanyStrategy>()
        .map_err(|reason| invalid("AIDAILY_COMPANY_STRATEGY", reason))?;

    let ner_url = optional("AIDAILY_NER_URL");
    let ner_api_token = optional("AIDAILY_NER_API_TOKEN");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        feed_url,
        max_articles,
        top_deals,
        cache_ttl_secs,
        request_timeout_secs,
        user_agent,
        investor_strategy,
        company_strategy,
        ner_url,
        ner_api_token,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "AIDAILY_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
