//! Named-entity recognition client and organization selection.
//!
//! Talks to a token-classification endpoint in the Hugging Face inference shape:
//! `POST {"inputs": "..."}` returning
//! `[{"entity_group": "ORG", "word": "Acme AI", "start": 0, "end": 7, "score": 0.99}]`.

use std::time::Duration;

use aidaily_core::{AppConfig, CompanyStrategy};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// One span reported by the recognizer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    #[serde(alias = "entity")]
    pub entity_group: String,
    pub word: String,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
    #[serde(default)]
    pub score: Option<f32>,
}

impl Entity {
    /// Label without a BIO prefix, upper-cased (`B-ORG` → `ORG`).
    #[must_use]
    pub fn label(&self) -> String {
        let raw = self.entity_group.trim();
        let bare = raw
            .strip_prefix("B-")
            .or_else(|| raw.strip_prefix("I-"))
            .unwrap_or(raw);
        bare.to_ascii_uppercase()
    }

    #[must_use]
    pub fn is_organization(&self) -> bool {
        matches!(self.label().as_str(), "ORG" | "ORGANIZATION")
    }
}

/// The first organization in document order, or `None` when there is none.
///
/// Spans without offsets keep their position in the recognizer output.
#[must_use]
pub fn first_organization(entities: &[Entity]) -> Option<String> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_organization())
        .min_by_key(|(idx, e)| (e.start.unwrap_or(usize::MAX), *idx))
        .map(|(_, e)| e.word.trim().to_string())
        .filter(|word| !word.is_empty())
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    inputs: &'a str,
    parameters: RecognizeParameters,
}

#[derive(Serialize)]
struct RecognizeParameters {
    aggregation_strategy: &'static str,
}

/// HTTP client for the configured entity recognizer.
pub struct NerClient {
    client: Client,
    url: String,
    api_token: Option<String>,
}

impl NerClient {
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        url: &str,
        api_token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: url.to_owned(),
            api_token: api_token.map(ToOwned::to_owned),
        })
    }

    /// Build the recognizer the configuration asks for, if any.
    ///
    /// Returns `Ok(None)` for the pattern strategy, and also (with a warning) when
    /// the entity strategy is selected but `AIDAILY_NER_URL` is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, ExtractError> {
        if config.company_strategy != CompanyStrategy::Entities {
            return Ok(None);
        }
        let Some(url) = config.ner_url.as_deref() else {
            tracing::warn!(
                "AIDAILY_COMPANY_STRATEGY=entities but AIDAILY_NER_URL is not set; using pattern heuristic"
            );
            return Ok(None);
        };
        Self::new(
            url,
            config.ner_api_token.as_deref(),
            config.request_timeout_secs,
        )
        .map(Some)
    }

    /// Run the recognizer over `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Recognizer`] if the request fails, the endpoint
    /// answers with a non-2xx status, or the body is not a list of entities.
    pub async fn recognize(&self, text: &str) -> Result<Vec<Entity>, ExtractError> {
        let request = RecognizeRequest {
            inputs: text,
            parameters: RecognizeParameters {
                aggregation_strategy: "simple",
            },
        };

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ExtractError::Recognizer(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ExtractError::Recognizer(format!(
                "recognizer returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExtractError::Recognizer(format!("reading response failed: {e}")))?;
        serde_json::from_str::<Vec<Entity>>(&body)
            .map_err(|e| ExtractError::Recognizer(format!("response parse error: {e}")))
    }
}
