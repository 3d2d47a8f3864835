//! Strategy selection and per-article extraction.

use aidaily_core::{AppConfig, Article, CompanyStrategy, ExtractionResult, InvestorStrategy};

use crate::company::extract_company;
use crate::entities::{first_organization, Entity, NerClient};
use crate::investors::{extract_investor_anchor, extract_investors_lookahead};
use crate::patterns::{extract_amounts, extract_rounds};

/// Extraction strategies fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extractor {
    pub investors: InvestorStrategy,
    pub company: CompanyStrategy,
}

impl Extractor {
    #[must_use]
    pub fn new(investors: InvestorStrategy, company: CompanyStrategy) -> Self {
        Self { investors, company }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.investor_strategy, config.company_strategy)
    }

    /// Extract investment details from one article.
    ///
    /// Pure: the result depends only on the article text and `entities`.
    /// With [`CompanyStrategy::Entities`] and no `entities` (recognizer
    /// unavailable), the company falls back to the pattern heuristic.
    #[must_use]
    pub fn extract(&self, article: &Article, entities: Option<&[Entity]>) -> ExtractionResult {
        let text = article.extraction_text();

        let investors = match self.investors {
            InvestorStrategy::Lookahead => extract_investors_lookahead(&text),
            InvestorStrategy::Anchor => extract_investor_anchor(&text).into_iter().collect(),
        };

        let company = match (self.company, entities) {
            (CompanyStrategy::Entities, Some(entities)) => first_organization(entities),
            _ => extract_company(&text),
        };

        ExtractionResult {
            title: article.title.clone(),
            link: article.link.clone(),
            published: article.published.clone(),
            amounts: extract_amounts(&text),
            rounds: extract_rounds(&text),
            investors,
            company,
        }
    }

    /// Pattern-only extraction for every article, in order.
    #[must_use]
    pub fn extract_all(&self, articles: &[Article]) -> Vec<ExtractionResult> {
        articles.iter().map(|a| self.extract(a, None)).collect()
    }
}

/// Extract every article, consulting `recognizer` when the entity strategy is set.
///
/// A missing recognizer, or the first failed call, switches the rest of the run
/// to the pattern heuristic with a warning; extraction itself never fails.
pub async fn extract_articles(
    extractor: &Extractor,
    articles: &[Article],
    recognizer: Option<&NerClient>,
) -> Vec<ExtractionResult> {
    let recognizer = match (extractor.company, recognizer) {
        (CompanyStrategy::Entities, None) => {
            tracing::warn!("entity strategy selected without a recognizer; using pattern heuristic");
            None
        }
        (CompanyStrategy::Entities, Some(client)) => Some(client),
        (CompanyStrategy::Pattern, _) => None,
    };
    let Some(client) = recognizer else {
        let results = extractor.extract_all(articles);
        log_extracted(&results);
        return results;
    };

    let mut recognizer = Some(client);
    let mut results = Vec::with_capacity(articles.len());
    for article in articles {
        let entities = match recognizer {
            Some(client) => match client.recognize(&article.extraction_text()).await {
                Ok(entities) => Some(entities),
                Err(e) => {
                    tracing::warn!(
                        link = %article.link,
                        error = %e,
                        "entity recognizer failed; falling back to pattern heuristic"
                    );
                    recognizer = None;
                    None
                }
            },
            None => None,
        };
        results.push(extractor.extract(article, entities.as_deref()));
    }

    log_extracted(&results);
    results
}

fn log_extracted(results: &[ExtractionResult]) {
    tracing::debug!(
        count = results.len(),
        funded = results.iter().filter(|r| r.has_funding()).count(),
        "extracted investment records"
    );
}
