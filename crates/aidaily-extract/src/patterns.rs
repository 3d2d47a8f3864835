//! Dollar amounts and funding-round labels.

use std::sync::LazyLock;

use regex::Regex;

/// `$`, a digit, then digits/commas/periods, with an optional `M` or `B` suffix.
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[0-9][0-9,.]*[MB]?").expect("valid amount regex"));

/// Closed vocabulary. The series letter may be followed by a digit or
/// punctuation (`Series A1`) but not by another letter; group 1 holds the label
/// without that trailing character.
static ROUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Series [A-Z])(?:\P{L}|$)|Seed round|funding round")
        .expect("valid round regex")
});

/// Every dollar-amount token in `text`, left to right, duplicates kept.
#[must_use]
pub fn extract_amounts(text: &str) -> Vec<String> {
    AMOUNT_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every round label in `text`, left to right, with the casing found in the text.
#[must_use]
pub fn extract_rounds(text: &str) -> Vec<String> {
    ROUND_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .collect()
}
