//! Canonical test configurations and fixtures.
//!
//! Single source of truth for config and snapshot text used across tests.

use rust_decimal::Decimal;

use crate::application::scanner::ScanConfig;

/// Scan config with the given threshold and stake, every market allowed.
pub fn scan(min_margin_percent: Decimal, total_stake: Decimal) -> ScanConfig {
    ScanConfig {
        min_margin_percent,
        total_stake,
        markets: Vec::new(),
        sports: Vec::new(),
    }
}

/// Snapshot in the native layout: one 2-way arbitrage (3.60% margin) and one
/// 3-way market without arbitrage.
pub const NATIVE_SNAPSHOT: &str = r#"[
  {
    "identifier": "TeamA vs TeamB",
    "sport": "Test League",
    "markets": [
      {"bookmaker_name": "Bookie1", "market_key": "h2h",
       "outcomes": [{"name": "TeamA", "price": 2.10}, {"name": "TeamB", "price": 1.80}]},
      {"bookmaker_name": "Bookie2", "market_key": "h2h",
       "outcomes": [{"name": "TeamA", "price": 1.90}, {"name": "TeamB", "price": 2.05}]}
    ]
  },
  {
    "identifier": "Home vs Away",
    "markets": [
      {"bookmaker_name": "Bookie1", "market_key": "h2h",
       "outcomes": [{"name": "Home", "price": 2.6}, {"name": "Draw", "price": 3.4}, {"name": "Away", "price": 3.0}]}
    ]
  }
]"#;

/// Snapshot in The Odds API layout with a totals line offering a 20% margin.
pub const ODDS_API_SNAPSHOT: &str = r#"[
  {
    "id": "e1",
    "sport_key": "soccer_epl",
    "sport_title": "EPL",
    "home_team": "Arsenal",
    "away_team": "Chelsea",
    "bookmakers": [
      {"key": "one", "title": "One", "markets": [
        {"key": "totals", "outcomes": [
          {"name": "Over", "price": 2.5, "point": 2.5},
          {"name": "Under", "price": 1.5, "point": 2.5}]}]},
      {"key": "two", "title": "Two", "markets": [
        {"key": "totals", "outcomes": [
          {"name": "Over", "price": 1.5, "point": 2.5},
          {"name": "Under", "price": 2.5, "point": 2.5}]}]}
    ]
  },
  "not an event"
]"#;
