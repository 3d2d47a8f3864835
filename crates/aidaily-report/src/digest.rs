use aidaily_core::{ExtractionResult, RecordFilter};
use serde::Serialize;

use crate::newsletter::render_newsletter;
use crate::summary::{summarize, Summary};
use crate::table::{table_rows, TableRow};

/// Everything one dashboard render shows.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    /// Counters over all extracted records, before filtering.
    pub summary: Summary,
    /// Number of records left after filtering.
    pub filtered_count: usize,
    pub top_deals: Vec<ExtractionResult>,
    pub rows: Vec<TableRow>,
    pub newsletter: String,
}

impl Digest {
    /// Build the dashboard views. The filter applies to top deals, rows and
    /// newsletter; the summary always covers every record.
    #[must_use]
    pub fn build(records: &[ExtractionResult], filter: &RecordFilter, top_n: usize) -> Self {
        let filtered = filter.apply(records);
        Self {
            summary: summarize(records),
            filtered_count: filtered.len(),
            top_deals: top_deals(&filtered, top_n).into_iter().cloned().collect(),
            rows: table_rows(filtered.iter().copied()),
            newsletter: render_newsletter(filtered.iter().copied()),
        }
    }
}

/// The first `n` records with any funding amount, in feed order.
#[must_use]
pub fn top_deals<'a>(records: &[&'a ExtractionResult], n: usize) -> Vec<&'a ExtractionResult> {
    records
        .iter()
        .copied()
        .filter(|r| r.has_funding())
        .take(n)
        .collect()
}
