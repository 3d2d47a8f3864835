//! Investor heuristics.
//!
//! Both strategies rely on capitalization and will misfire on sentence starts or
//! unrelated proper nouns. That imprecision is expected behavior.

use std::sync::LazyLock;

use regex::Regex;

/// Capitalized run of letters, digits, `&` and spaces directly before ` invested` / ` led`.
static LOOKAHEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-zA-Z0-9& ]+) (?:invested|led)").expect("valid investor regex")
});

/// Sequence of capitalized words.
const CAPITALIZED_PHRASE: &str = r"([A-Z][A-Za-z0-9&.\-]*(?:[ \t]+[A-Z][A-Za-z0-9&.\-]*)*)";

/// Checked in this order; the first anchor with any match wins.
static ANCHOR_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    ["led by", "from", "backed by"].map(|anchor| {
        Regex::new(&format!(r"\b(?i:{anchor})\s+{CAPITALIZED_PHRASE}"))
            .expect("valid investor anchor regex")
    })
});

/// Every capitalized phrase followed by `invested` or `led`, trimmed, in order.
#[must_use]
pub fn extract_investors_lookahead(text: &str) -> Vec<String> {
    LOOKAHEAD_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// The phrase after the first of `led by`, `from`, `backed by` that matches.
///
/// Anchors are tried in priority order, not by position: `from Index ... led by
/// Sequoia` still yields `Sequoia`.
#[must_use]
pub fn extract_investor_anchor(text: &str) -> Option<String> {
    ANCHOR_RES.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| trim_phrase(m.as_str()))
            .filter(|phrase| !phrase.is_empty())
    })
}

pub(crate) fn trim_phrase(phrase: &str) -> String {
    phrase
        .trim()
        .trim_end_matches(['.', ',', '-'])
        .to_string()
}
