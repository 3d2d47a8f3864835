//! Regex company heuristic.

use std::sync::LazyLock;

use regex::Regex;

use crate::investors::trim_phrase;

static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z][A-Za-z0-9&.\-]*(?:[ \t]+[A-Z][A-Za-z0-9&.\-]*)*)[ \t]+(?:raises|lands|secures|scores|gets)\b",
    )
    .expect("valid company regex")
});

/// The first capitalized phrase directly before `raises`, `lands`, `secures`,
/// `scores` or `gets`.
#[must_use]
pub fn extract_company(text: &str) -> Option<String> {
    COMPANY_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| trim_phrase(m.as_str()))
        .filter(|name| !name.is_empty())
}
