//! Reading snapshot files through the `OddsSource` port.

use std::fs;

use rust_decimal_macros::dec;

use surebet::adapter::outbound::snapshot::JsonFileSource;
use surebet::application::Scanner;
use surebet::domain::MarketKey;
use surebet::error::Error;
use surebet::port::OddsSource;
use surebet::testkit::config::{scan, NATIVE_SNAPSHOT, ODDS_API_SNAPSHOT};

fn source_with(content: &str) -> (tempfile::TempDir, JsonFileSource) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("odds.json");
    fs::write(&path, content).unwrap();
    (dir, JsonFileSource::new(path))
}

#[tokio::test]
async fn native_snapshot_scans_end_to_end() {
    let (_dir, source) = source_with(NATIVE_SNAPSHOT);
    let events = source.fetch().await.unwrap();
    assert_eq!(events.len(), 2);

    let report = Scanner::new(scan(dec!(2.0), dec!(100))).scan(&events);
    assert_eq!(report.opportunities().len(), 1);
    assert_eq!(report.tally().no_arbitrage, 1);

    let opp = &report.opportunities()[0];
    assert_eq!(opp.event().identifier(), "TeamA vs TeamB");
    assert_eq!(opp.event().sport(), Some("Test League"));
    assert_eq!(opp.display_margin(), dec!(3.60));
    let bookmakers: Vec<&str> = opp.legs().iter().map(|l| l.bookmaker_name()).collect();
    assert_eq!(bookmakers, vec!["Bookie1", "Bookie2"]);
}

#[tokio::test]
async fn odds_api_snapshot_splits_lines() {
    let (_dir, source) = source_with(ODDS_API_SNAPSHOT);
    let events = source.fetch().await.unwrap();
    assert_eq!(events.len(), 1, "string element should be skipped");

    let report = Scanner::new(scan(dec!(2.0), dec!(100))).scan(&events);
    let opp = &report.opportunities()[0];
    assert_eq!(opp.event().identifier(), "Arsenal vs Chelsea");
    assert_eq!(opp.market_key(), &MarketKey::from("totals:2.5"));
    assert_eq!(opp.display_margin(), dec!(20.00));

    let legs: Vec<(&str, &str)> = opp
        .legs()
        .iter()
        .map(|l| (l.outcome_name(), l.bookmaker_name()))
        .collect();
    assert_eq!(legs, vec![("Over 2.5", "One"), ("Under 2.5", "Two")]);
}

#[tokio::test]
async fn allow_list_matches_base_key() {
    let (_dir, source) = source_with(ODDS_API_SNAPSHOT);
    let events = source.fetch().await.unwrap();

    let mut only_h2h = scan(dec!(2.0), dec!(100));
    only_h2h.markets = vec![MarketKey::from("h2h")];
    let report = Scanner::new(only_h2h).scan(&events);
    assert!(report.is_empty());
    assert_eq!(report.tally().markets_skipped, 1);

    let mut only_totals = scan(dec!(2.0), dec!(100));
    only_totals.markets = vec![MarketKey::from("totals")];
    assert_eq!(Scanner::new(only_totals).scan(&events).opportunities().len(), 1);
}

#[tokio::test]
async fn rereads_file_on_every_fetch() {
    let (dir, source) = source_with("[]");
    assert!(source.fetch().await.unwrap().is_empty());

    fs::write(dir.path().join("odds.json"), NATIVE_SNAPSHOT).unwrap();
    assert_eq!(source.fetch().await.unwrap().len(), 2);
}

#[tokio::test]
async fn non_array_document_is_rejected() {
    let (_dir, source) = source_with(r#"{"identifier": "solo"}"#);
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, Error::Snapshot(_)));
    assert!(err.to_string().contains("object"));
}

#[tokio::test]
async fn invalid_json_is_rejected() {
    let (_dir, source) = source_with("[{");
    assert!(matches!(source.fetch().await.unwrap_err(), Error::Json(_)));
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let source = JsonFileSource::new("/nonexistent/surebet/odds.json");
    assert!(matches!(source.fetch().await.unwrap_err(), Error::Io(_)));
    assert_eq!(source.name(), "/nonexistent/surebet/odds.json");
}
