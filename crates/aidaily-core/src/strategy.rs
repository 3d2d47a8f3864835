//! Extraction strategies selectable at configuration time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How investor names are pulled out of article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestorStrategy {
    /// Every capitalized phrase directly followed by `invested` or `led`.
    #[default]
    Lookahead,
    /// The first phrase after `led by`, then `from`, then `backed by`.
    Anchor,
}

/// How the best-guess company name is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStrategy {
    /// Capitalized phrase preceding `raises`, `lands`, `secures`, `scores` or `gets`.
    #[default]
    Pattern,
    /// First organization reported by the entity recognizer.
    Entities,
}

impl FromStr for InvestorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lookahead" => Ok(Self::Lookahead),
            "anchor" => Ok(Self::Anchor),
            other => Err(format!(
                "unknown investor strategy '{other}' (expected lookahead or anchor)"
            )),
        }
    }
}

impl FromStr for CompanyStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(Self::Pattern),
            "entities" | "ner" => Ok(Self::Entities),
            other => Err(format!(
                "unknown company strategy '{other}' (expected pattern or entities)"
            )),
        }
    }
}

impl fmt::Display for InvestorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestorStrategy::Lookahead => write!(f, "lookahead"),
            InvestorStrategy::Anchor => write!(f, "anchor"),
        }
    }
}

impl fmt::Display for CompanyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyStrategy::Pattern => write!(f, "pattern"),
            CompanyStrategy::Entities => write!(f, "entities"),
        }
    }
}
