//! Command handlers: fetch the feed once, extract, then print one view.

use aidaily_core::{AppConfig, ExtractionResult, RecordFilter};
use aidaily_extract::{extract_articles, Extractor, NerClient};
use aidaily_feed::FeedClient;
use aidaily_report::{render_markdown_table, Digest, Summary};

/// Fetch and extract the configured feed.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built or the feed fetch fails.
async fn load_records(config: &AppConfig) -> anyhow::Result<Vec<ExtractionResult>> {
    let feed = FeedClient::from_config(config)?;
    let recognizer = NerClient::from_config(config)?;
    let extractor = Extractor::from_config(config);

    let articles = feed.fetch_articles().await?;
    tracing::info!(count = articles.len(), url = %feed.feed_url(), "fetched articles");

    Ok(extract_articles(&extractor, &articles, recognizer.as_ref()).await)
}

pub(crate) async fn run_table(
    config: &AppConfig,
    filter: &RecordFilter,
    json: bool,
) -> anyhow::Result<()> {
    let records = load_records(config).await?;
    let digest = Digest::build(&records, filter, config.top_deals);

    if json {
        println!("{}", serde_json::to_string_pretty(&digest.rows)?);
    } else if digest.rows.is_empty() {
        println!("no articles match the current filters");
    } else {
        print!("{}", render_markdown_table(&digest.rows));
    }
    Ok(())
}

pub(crate) async fn run_newsletter(config: &AppConfig, filter: &RecordFilter) -> anyhow::Result<()> {
    let records = load_records(config).await?;
    let digest = Digest::build(&records, filter, config.top_deals);
    print!("{}", digest.newsletter);
    Ok(())
}

pub(crate) async fn run_top(
    config: &AppConfig,
    filter: &RecordFilter,
    limit: usize,
) -> anyhow::Result<()> {
    let records = load_records(config).await?;
    let digest = Digest::build(&records, filter, limit);
    print!("{}", format_top_deals(&digest.top_deals));
    Ok(())
}

pub(crate) async fn run_summary(config: &AppConfig) -> anyhow::Result<()> {
    let records = load_records(config).await?;
    let digest = Digest::build(&records, &RecordFilter::default(), config.top_deals);
    print!("{}", format_summary(&digest.summary));
    Ok(())
}

pub(crate) fn format_top_deals(deals: &[ExtractionResult]) -> String {
    if deals.is_empty() {
        return "no funded deals found\n".to_string();
    }

    let mut out = format!("{:<4}{:<30}{:<16}{}\n", "#", "COMPANY", "FUNDING", "TITLE");
    for (rank, deal) in deals.iter().enumerate() {
        out.push_str(&format!(
            "{:<4}{:<30}{:<16}{}\n",
            rank + 1,
            deal.company.as_deref().unwrap_or("-"),
            deal.funding_label(),
            deal.title
        ));
    }
    out
}

pub(crate) fn format_summary(summary: &Summary) -> String {
    format!(
        "companies:     {}\narticles:      {}\nwith funding:  {}\n",
        summary.distinct_companies, summary.article_count, summary.funded_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_deals_table_ranks_in_order() {
        let deal = ExtractionResult {
            title: "Acme AI raises $12M".to_string(),
            link: "https://example.com/acme".to_string(),
            published: String::new(),
            amounts: vec!["$12M".to_string(), "$3M".to_string()],
            rounds: vec![],
            investors: vec![],
            company: None,
        };
        let out = format_top_deals(&[deal]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#   COMPANY"));
        assert!(lines[1].starts_with("1   -"));
        assert!(lines[1].contains("$12M, $3M"));
        assert!(lines[1].ends_with("Acme AI raises $12M"));
    }

    #[test]
    fn empty_top_deals_prints_message() {
        assert_eq!(format_top_deals(&[]), "no funded deals found\n");
    }

    #[test]
    fn summary_lists_all_counters() {
        let out = format_summary(&Summary {
            distinct_companies: 2,
            article_count: 5,
            funded_count: 3,
        });
        assert_eq!(
            out,
            "companies:     2\narticles:      5\nwith funding:  3\n"
        );
    }
}
