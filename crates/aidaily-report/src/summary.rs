use std::collections::BTreeSet;

use aidaily_core::ExtractionResult;
use serde::Serialize;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub distinct_companies: usize,
    pub article_count: usize,
    pub funded_count: usize,
}

#[must_use]
pub fn summarize(records: &[ExtractionResult]) -> Summary {
    let companies: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| r.company.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    Summary {
        distinct_companies: companies.len(),
        article_count: records.len(),
        funded_count: records.iter().filter(|r| r.has_funding()).count(),
    }
}
