//! Markdown newsletter, one block per article.

use std::fmt::Write as _;

use aidaily_core::ExtractionResult;

/// Render the newsletter body.
///
/// Each article becomes a `###` heading followed by bullet lines for the fields
/// that were found and a `Read more` link. Empty input renders an empty string.
#[must_use]
pub fn render_newsletter<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ExtractionResult>,
{
    let mut out = String::new();
    for record in records {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "### {}", record.title);
        if let Some(company) = record.company.as_deref().filter(|c| !c.is_empty()) {
            let _ = writeln!(out, "- **Company:** {company}");
        }
        if !record.amounts.is_empty() {
            let _ = writeln!(out, "- **Funding:** {}", record.funding_label());
        }
        if !record.rounds.is_empty() {
            let _ = writeln!(out, "- **Round:** {}", record.round_label());
        }
        if !record.investors.is_empty() {
            let _ = writeln!(out, "- **Investors:** {}", record.investor_label());
        }
        let _ = writeln!(out, "- [Read more]({})", record.link);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: Option<&str>, amounts: &[&str], investors: &[&str]) -> ExtractionResult {
        ExtractionResult {
            title: "Acme AI raises $12M".to_string(),
            link: "https://example.com/acme".to_string(),
            published: String::new(),
            amounts: amounts.iter().map(ToString::to_string).collect(),
            rounds: vec!["Series A".to_string()],
            investors: investors.iter().map(ToString::to_string).collect(),
            company: company.map(ToString::to_string),
        }
    }

    #[test]
    fn renders_full_block() {
        let r = record(Some("Acme AI"), &["$12M"], &["Greylock"]);
        assert_eq!(
            render_newsletter([&r]),
            "### Acme AI raises $12M\n\
             - **Company:** Acme AI\n\
             - **Funding:** $12M\n\
             - **Round:** Series A\n\
             - **Investors:** Greylock\n\
             - [Read more](https://example.com/acme)\n\n"
        );
    }

    #[test]
    fn omits_missing_fields() {
        let r = record(None, &[], &[]);
        assert_eq!(
            render_newsletter([&r]),
            "### Acme AI raises $12M\n\
             - **Round:** Series A\n\
             - [Read more](https://example.com/acme)\n\n"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        let none: Vec<ExtractionResult> = Vec::new();
        assert_eq!(render_newsletter(&none), "");
    }

    #[test]
    fn one_block_per_article() {
        let a = record(Some("Acme AI"), &["$12M"], &[]);
        let b = record(None, &[], &[]);
        let rendered = render_newsletter([&a, &b]);
        assert_eq!(rendered.matches("### ").count(), 2);
    }
}
