//! Feed body → [`Article`] conversion.

use aidaily_core::Article;
use feed_rs::model::Entry;

use crate::dates::native_dates;
use crate::error::FeedError;

/// Parse an RSS or Atom document and keep the first `max_articles` entries in feed order.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the body is not a recognizable feed.
pub fn parse_feed(body: &[u8], max_articles: usize) -> Result<Vec<Article>, FeedError> {
    let feed = feed_rs::parser::parse(body)?;
    let mut dates = native_dates(body).into_iter();
    Ok(feed
        .entries
        .into_iter()
        .take(max_articles)
        .map(|entry| entry_to_article(entry, dates.next().flatten()))
        .collect())
}

/// Missing fields become empty strings so extraction always has text to scan.
///
/// `native_date` is the entry's date text as written in the feed. Only when it
/// is unavailable (e.g. JSON Feed) is the parsed date rendered as RFC 2822.
fn entry_to_article(entry: Entry, native_date: Option<String>) -> Article {
    let title = entry.title.map(|t| t.content).unwrap_or_default();
    let link = entry
        .links
        .into_iter()
        .next()
        .map(|l| l.href)
        .unwrap_or_default();
    let published = native_date
        .or_else(|| entry.published.or(entry.updated).map(|d| d.to_rfc2822()))
        .unwrap_or_default();
    // RSS <description> lands in `summary`; fall back to <content:encoded>.
    let summary = entry
        .summary
        .map(|t| t.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();

    Article {
        title,
        link,
        published,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>TechCrunch AI</title>
    <link>https://techcrunch.com</link>
    <description>AI news</description>
    <item>
      <title>Acme AI raises $12M in Series A funding round led by Greylock</title>
      <link>https://example.com/acme</link>
      <pubDate>Tue, 14 Oct 2025 16:00:00 +0000</pubDate>
      <description><![CDATA[<p>Acme AI raises money to build agents.</p>]]></description>
    </item>
    <item>
      <title>Model release roundup</title>
      <link>https://example.com/roundup</link>
      <pubDate>Mon, 13 Oct 2025 09:30:00 +0000</pubDate>
      <description>No funding this week.</description>
    </item>
    <item>
      <title>Third story</title>
      <link>https://example.com/third</link>
      <description>Filler.</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_in_feed_order() {
        let articles = parse_feed(SAMPLE_RSS.as_bytes(), 20).expect("should parse valid RSS");
        assert_eq!(articles.len(), 3);
        assert_eq!(
            articles[0].title,
            "Acme AI raises $12M in Series A funding round led by Greylock"
        );
        assert_eq!(articles[0].link, "https://example.com/acme");
        assert_eq!(articles[1].link, "https://example.com/roundup");
    }

    #[test]
    fn keeps_summary_markup() {
        let articles = parse_feed(SAMPLE_RSS.as_bytes(), 20).unwrap();
        assert!(
            articles[0].summary.contains("Acme AI raises money"),
            "unexpected summary: {}",
            articles[0].summary
        );
    }

    #[test]
    fn keeps_published_text() {
        let articles = parse_feed(SAMPLE_RSS.as_bytes(), 20).unwrap();
        assert_eq!(articles[0].published, "Tue, 14 Oct 2025 16:00:00 +0000");
    }

    #[test]
    fn keeps_non_utc_offsets_as_written() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>t</title><link>https://example.com</link><description>d</description>
<item><title>a</title><link>https://example.com/a</link><pubDate>Tue, 14 Oct 2025 12:00:00 -0400</pubDate></item>
<item><title>b</title><link>https://example.com/b</link><pubDate>Tue, 14 Oct 2025 12:00:00 EST</pubDate></item>
</channel></rss>"#;
        let articles = parse_feed(xml.as_bytes(), 20).unwrap();
        assert_eq!(articles[0].published, "Tue, 14 Oct 2025 12:00:00 -0400");
        assert_eq!(articles[1].published, "Tue, 14 Oct 2025 12:00:00 EST");
    }

    #[test]
    fn missing_pub_date_is_empty() {
        let articles = parse_feed(SAMPLE_RSS.as_bytes(), 20).unwrap();
        assert_eq!(articles[2].published, "");
    }

    #[test]
    fn truncates_to_max_articles() {
        let articles = parse_feed(SAMPLE_RSS.as_bytes(), 2).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].title, "Model release roundup");
    }

    #[test]
    fn empty_channel_returns_empty_vec() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Empty</title><link>https://example.com</link><description>none</description></channel></rss>"#;
        let articles = parse_feed(xml.as_bytes(), 20).expect("should parse empty RSS");
        assert!(articles.is_empty());
    }

    #[test]
    fn non_feed_body_returns_parse_error() {
        let result = parse_feed(b"this is not a feed", 20);
        assert!(
            matches!(result, Err(FeedError::Parse(_))),
            "expected parse error, got: {result:?}"
        );
    }

    #[test]
    fn parses_atom_entries() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example</title>
  <id>urn:example</id>
  <updated>2025-10-14T16:00:00Z</updated>
  <entry>
    <title>Beta Labs lands $3M seed round</title>
    <id>urn:beta</id>
    <link href="https://example.com/beta"/>
    <updated>2025-10-14T16:00:00Z</updated>
    <summary>Seed round backed by Index</summary>
  </entry>
</feed>"#;
        let articles = parse_feed(xml.as_bytes(), 20).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].link, "https://example.com/beta");
        assert_eq!(articles[0].summary, "Seed round backed by Index");
        assert_eq!(articles[0].published, "2025-10-14T16:00:00Z");
    }
}
