use rust_decimal::Decimal;

use super::*;

fn record(amounts: &[&str], rounds: &[&str]) -> ExtractionResult {
    ExtractionResult {
        title: "Acme AI raises".to_string(),
        link: "https://example.com/acme".to_string(),
        published: String::new(),
        amounts: amounts.iter().map(ToString::to_string).collect(),
        rounds: rounds.iter().map(ToString::to_string).collect(),
        investors: vec![],
        company: None,
    }
}

#[test]
fn parse_amount_handles_millions() {
    assert_eq!(parse_amount("$12M"), Some(Decimal::from(12_000_000)));
}

#[test]
fn parse_amount_handles_fractional_billions() {
    assert_eq!(parse_amount("$1.5B"), Some(Decimal::from(1_500_000_000_i64)));
}

#[test]
fn parse_amount_ignores_thousands_separators() {
    assert_eq!(parse_amount("$250,000"), Some(Decimal::from(250_000)));
}

#[test]
fn parse_amount_tolerates_trailing_punctuation() {
    assert_eq!(parse_amount("$5."), Some(Decimal::from(5)));
}

#[test]
fn parse_amount_rejects_malformed_tokens() {
    assert_eq!(parse_amount("$1.2.3M"), None);
    assert_eq!(parse_amount("$"), None);
    assert_eq!(parse_amount("12M"), None);
}

#[test]
fn min_funding_parses_dashboard_options() {
    assert_eq!("None".parse::<MinFunding>().unwrap(), MinFunding::None);
    assert_eq!("$1M".parse::<MinFunding>().unwrap(), MinFunding::OneMillion);
    assert_eq!("10m".parse::<MinFunding>().unwrap(), MinFunding::TenMillion);
    assert_eq!("50M".parse::<MinFunding>().unwrap(), MinFunding::FiftyMillion);
    assert_eq!(
        "$100M".parse::<MinFunding>().unwrap(),
        MinFunding::HundredMillion
    );
    assert!("25M".parse::<MinFunding>().is_err());
}

#[test]
fn min_funding_display_matches_selector_labels() {
    let labels: Vec<String> = MinFunding::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(labels, vec!["None", "$1M", "$10M", "$50M", "$100M"]);
}

#[test]
fn min_funding_none_admits_records_without_amounts() {
    assert!(MinFunding::None.admits(&[]));
}

#[test]
fn min_funding_uses_largest_amount() {
    let amounts = vec!["$2M".to_string(), "$60M".to_string()];
    assert!(MinFunding::FiftyMillion.admits(&amounts));
    assert!(!MinFunding::HundredMillion.admits(&amounts));
}

#[test]
fn min_funding_drops_records_without_parseable_amounts() {
    assert!(!MinFunding::OneMillion.admits(&[]));
    assert!(!MinFunding::OneMillion.admits(&["$1.2.3".to_string()]));
}

#[test]
fn round_filter_parses_selector_labels() {
    assert_eq!("All".parse::<RoundFilter>().unwrap(), RoundFilter::All);
    assert_eq!("Seed".parse::<RoundFilter>().unwrap(), RoundFilter::Seed);
    assert_eq!(
        "Series A".parse::<RoundFilter>().unwrap(),
        RoundFilter::SeriesA
    );
    assert_eq!(
        "series-b".parse::<RoundFilter>().unwrap(),
        RoundFilter::SeriesB
    );
    assert!("Series D".parse::<RoundFilter>().is_err());
}

#[test]
fn round_filter_is_case_insensitive() {
    let rounds = vec!["SERIES A".to_string()];
    assert!(RoundFilter::SeriesA.admits(&rounds));
    assert!(!RoundFilter::SeriesB.admits(&rounds));
}

#[test]
fn seed_filter_matches_seed_round() {
    assert!(RoundFilter::Seed.admits(&["seed round".to_string()]));
    assert!(!RoundFilter::Seed.admits(&["funding round".to_string()]));
}

#[test]
fn record_filter_combines_both_selectors() {
    let filter = RecordFilter {
        min_funding: MinFunding::TenMillion,
        round: RoundFilter::SeriesA,
    };
    let records = vec![
        record(&["$12M"], &["Series A"]),
        record(&["$12M"], &["Series B"]),
        record(&["$2M"], &["Series A"]),
        record(&[], &[]),
    ];
    let kept = filter.apply(&records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].rounds, vec!["Series A"]);
}

#[test]
fn default_record_filter_keeps_everything() {
    let filter = RecordFilter::default();
    assert!(filter.is_inactive());
    let records = vec![record(&[], &[]), record(&["$1M"], &["Seed round"])];
    assert_eq!(filter.apply(&records).len(), 2);
}

#[test]
fn record_filter_deserializes_from_json_strings() {
    let filter: RecordFilter =
        serde_json::from_str(r#"{"min_funding":"50M","round":"seed"}"#).unwrap();
    assert_eq!(filter.min_funding, MinFunding::FiftyMillion);
    assert_eq!(filter.round, RoundFilter::Seed);
}
