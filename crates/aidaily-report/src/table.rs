//! Flat rows for the investment table.

use aidaily_core::ExtractionResult;
use serde::Serialize;

/// One table row; list fields are joined with `, `.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub company: String,
    pub funding: String,
    pub round: String,
    pub investors: String,
    pub title: String,
    pub link: String,
}

impl From<&ExtractionResult> for TableRow {
    fn from(record: &ExtractionResult) -> Self {
        Self {
            company: record.company.clone().unwrap_or_default(),
            funding: record.funding_label(),
            round: record.round_label(),
            investors: record.investor_label(),
            title: record.title.clone(),
            link: record.link.clone(),
        }
    }
}

#[must_use]
pub fn table_rows<'a, I>(records: I) -> Vec<TableRow>
where
    I: IntoIterator<Item = &'a ExtractionResult>,
{
    records.into_iter().map(TableRow::from).collect()
}

/// Render rows as a GitHub-flavored markdown table.
#[must_use]
pub fn render_markdown_table(rows: &[TableRow]) -> String {
    let mut out = String::from("| Company | Funding | Round | Investors | Article | Link |\n");
    out.push_str("|---------|---------|-------|-----------|---------|------|\n");
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            cell(&row.company),
            cell(&row.funding),
            cell(&row.round),
            cell(&row.investors),
            cell(&row.title),
            cell(&row.link),
        ));
    }
    out
}

fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ExtractionResult {
        ExtractionResult {
            title: "Acme AI raises $12M".to_string(),
            link: "https://example.com/acme".to_string(),
            published: String::new(),
            amounts: vec!["$12M".to_string()],
            rounds: vec!["Series A".to_string(), "funding round".to_string()],
            investors: vec![],
            company: Some("Acme AI".to_string()),
        }
    }

    #[test]
    fn row_joins_list_fields() {
        let row = TableRow::from(&record());
        assert_eq!(row.company, "Acme AI");
        assert_eq!(row.funding, "$12M");
        assert_eq!(row.round, "Series A, funding round");
        assert_eq!(row.investors, "");
    }

    #[test]
    fn empty_records_render_header_only() {
        let none: Vec<ExtractionResult> = Vec::new();
        let rendered = render_markdown_table(&table_rows(&none));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn markdown_table_escapes_pipes() {
        let mut r = record();
        r.title = "A | B".to_string();
        let rendered = render_markdown_table(&table_rows([&r]));
        assert!(rendered.contains("A \\| B"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
