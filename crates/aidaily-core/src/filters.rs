//! Dashboard filters for minimum funding and round type.
//!
//! Both filters apply to the table, the top-deals section and the newsletter.
//! Summary counters are always computed over the unfiltered records.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::article::ExtractionResult;

/// Minimum funding threshold offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum MinFunding {
    #[default]
    None,
    OneMillion,
    TenMillion,
    FiftyMillion,
    HundredMillion,
}

impl MinFunding {
    pub const ALL: [MinFunding; 5] = [
        MinFunding::None,
        MinFunding::OneMillion,
        MinFunding::TenMillion,
        MinFunding::FiftyMillion,
        MinFunding::HundredMillion,
    ];

    /// Threshold in dollars, `None` when no minimum applies.
    #[must_use]
    pub fn threshold(self) -> Option<Decimal> {
        let millions: i64 = match self {
            MinFunding::None => return None,
            MinFunding::OneMillion => 1,
            MinFunding::TenMillion => 10,
            MinFunding::FiftyMillion => 50,
            MinFunding::HundredMillion => 100,
        };
        Some(Decimal::from(millions * 1_000_000))
    }

    /// Query-string form, e.g. `10M`.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            MinFunding::None => "none",
            MinFunding::OneMillion => "1M",
            MinFunding::TenMillion => "10M",
            MinFunding::FiftyMillion => "50M",
            MinFunding::HundredMillion => "100M",
        }
    }

    /// Whether any amount in `amounts` meets the threshold.
    #[must_use]
    pub fn admits(self, amounts: &[String]) -> bool {
        let Some(threshold) = self.threshold() else {
            return true;
        };
        amounts
            .iter()
            .filter_map(|a| parse_amount(a))
            .any(|value| value >= threshold)
    }
}

impl FromStr for MinFunding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('$').to_ascii_uppercase();
        match normalized.as_str() {
            "" | "NONE" => Ok(MinFunding::None),
            "1M" => Ok(MinFunding::OneMillion),
            "10M" => Ok(MinFunding::TenMillion),
            "50M" => Ok(MinFunding::FiftyMillion),
            "100M" => Ok(MinFunding::HundredMillion),
            _ => Err(format!(
                "unsupported minimum funding '{s}' (expected none, 1M, 10M, 50M or 100M)"
            )),
        }
    }
}

impl TryFrom<String> for MinFunding {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for MinFunding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinFunding::None => write!(f, "None"),
            other => write!(f, "${}", other.as_param()),
        }
    }
}

/// Round-type selector offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum RoundFilter {
    #[default]
    All,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
}

impl RoundFilter {
    pub const ALL: [RoundFilter; 5] = [
        RoundFilter::All,
        RoundFilter::Seed,
        RoundFilter::SeriesA,
        RoundFilter::SeriesB,
        RoundFilter::SeriesC,
    ];

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            RoundFilter::All => "all",
            RoundFilter::Seed => "seed",
            RoundFilter::SeriesA => "series-a",
            RoundFilter::SeriesB => "series-b",
            RoundFilter::SeriesC => "series-c",
        }
    }

    /// Whether any of the extracted round labels matches this selection.
    ///
    /// `Seed` matches `Seed round`; the series options match their label exactly,
    /// ignoring case. A bare `funding round` only passes `All`.
    #[must_use]
    pub fn admits(self, rounds: &[String]) -> bool {
        let wanted = match self {
            RoundFilter::All => return true,
            RoundFilter::Seed => "seed round",
            RoundFilter::SeriesA => "series a",
            RoundFilter::SeriesB => "series b",
            RoundFilter::SeriesC => "series c",
        };
        rounds.iter().any(|r| r.eq_ignore_ascii_case(wanted))
    }
}

impl FromStr for RoundFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "" | "all" => Ok(RoundFilter::All),
            "seed" => Ok(RoundFilter::Seed),
            "seriesa" => Ok(RoundFilter::SeriesA),
            "seriesb" => Ok(RoundFilter::SeriesB),
            "seriesc" => Ok(RoundFilter::SeriesC),
            _ => Err(format!(
                "unsupported round '{s}' (expected all, seed, series-a, series-b or series-c)"
            )),
        }
    }
}

impl TryFrom<String> for RoundFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RoundFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundFilter::All => write!(f, "All"),
            RoundFilter::Seed => write!(f, "Seed"),
            RoundFilter::SeriesA => write!(f, "Series A"),
            RoundFilter::SeriesB => write!(f, "Series B"),
            RoundFilter::SeriesC => write!(f, "Series C"),
        }
    }
}

/// Both dashboard selectors combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub min_funding: MinFunding,
    #[serde(default)]
    pub round: RoundFilter,
}

impl RecordFilter {
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.min_funding == MinFunding::None && self.round == RoundFilter::All
    }

    #[must_use]
    pub fn matches(&self, record: &ExtractionResult) -> bool {
        self.min_funding.admits(&record.amounts) && self.round.admits(&record.rounds)
    }

    /// Borrow the records that pass both selectors, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ExtractionResult]) -> Vec<&'a ExtractionResult> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Parse a literal amount token such as `$12M`, `$1.5B` or `$250,000` into dollars.
///
/// Returns `None` for tokens that do not form a valid number once the `$`, the
/// magnitude suffix and thousands separators are removed.
#[must_use]
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let body = token.trim().strip_prefix('$')?;
    let (digits, multiplier) = if let Some(rest) = body.strip_suffix('B') {
        (rest, Decimal::from(1_000_000_000_i64))
    } else if let Some(rest) = body.strip_suffix('M') {
        (rest, Decimal::from(1_000_000_i64))
    } else {
        (body, Decimal::ONE)
    };

    let cleaned: String = digits
        .trim_end_matches(['.', ','])
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned)
        .ok()
        .and_then(|value| value.checked_mul(multiplier))
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
