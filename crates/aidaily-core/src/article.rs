use serde::{Deserialize, Serialize};

/// One feed entry as fetched. Never mutated after ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Publish date exactly as the feed wrote it, or empty when the feed omits it.
    pub published: String,
    /// Raw entry summary; may contain HTML.
    pub summary: String,
}

impl Article {
    /// The text all extractors scan: title and summary joined by one space.
    #[must_use]
    pub fn extraction_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Investment details extracted from a single [`Article`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub link: String,
    pub published: String,
    /// Literal dollar-amount tokens such as `$12M`, in order of appearance.
    pub amounts: Vec<String>,
    /// Round labels with their source casing, in order of appearance.
    pub rounds: Vec<String>,
    pub investors: Vec<String>,
    pub company: Option<String>,
}

impl ExtractionResult {
    #[must_use]
    pub fn has_funding(&self) -> bool {
        !self.amounts.is_empty()
    }

    #[must_use]
    pub fn funding_label(&self) -> String {
        self.amounts.join(", ")
    }

    #[must_use]
    pub fn round_label(&self) -> String {
        self.rounds.join(", ")
    }

    #[must_use]
    pub fn investor_label(&self) -> String {
        self.investors.join(", ")
    }
}
