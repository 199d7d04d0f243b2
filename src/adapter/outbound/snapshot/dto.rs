//! Wire shapes accepted in snapshot files.
//!
//! Two event layouts are understood:
//!
//! Native:
//! ```json
//! {"identifier":"Arsenal vs Chelsea","sport":"EPL","markets":[
//!   {"bookmaker_name":"Bet365","market_key":"h2h","outcomes":[{"name":"Arsenal","price":2.1}]}]}
//! ```
//!
//! The Odds API v4 `/odds` response:
//! ```json
//! {"sport_title":"EPL","home_team":"Arsenal","away_team":"Chelsea","bookmakers":[
//!   {"title":"Bet365","markets":[{"key":"totals","outcomes":[{"name":"Over","price":1.9,"point":2.5}]}]}]}
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{BookmakerMarket, EventSnapshot, MarketKey, OutcomePrice};

/// One array element of a snapshot file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SnapshotEvent {
    Native(EventSnapshot),
    OddsApi(OddsApiEvent),
}

impl SnapshotEvent {
    #[must_use]
    pub fn into_snapshot(self) -> EventSnapshot {
        match self {
            Self::Native(event) => event,
            Self::OddsApi(event) => event.into_snapshot(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OddsApiEvent {
    pub sport_title: Option<String>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<OddsApiBookmaker>,
}

#[derive(Debug, Deserialize)]
pub struct OddsApiBookmaker {
    pub title: String,
    #[serde(default)]
    pub markets: Vec<OddsApiMarket>,
}

#[derive(Debug, Deserialize)]
pub struct OddsApiMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OddsApiOutcome>,
}

#[derive(Debug, Deserialize)]
pub struct OddsApiOutcome {
    pub name: String,
    pub price: Decimal,
    pub point: Option<Decimal>,
}

impl OddsApiEvent {
    /// Flatten into the native layout.
    ///
    /// Markets carrying a `point` are split per line: the key gains the
    /// absolute line (`totals:2.5`) and each outcome name gains its signed
    /// point (`Over 2.5`, `Chelsea +1.5`). Different lines therefore never
    /// share a market, and mirrored handicaps never share an outcome name.
    #[must_use]
    pub fn into_snapshot(self) -> EventSnapshot {
        let identifier = format!("{} vs {}", self.home_team, self.away_team);
        let mut markets = Vec::new();

        for bookmaker in self.bookmakers {
            for market in bookmaker.markets {
                let mut lines: Vec<BookmakerMarket> = Vec::new();

                for outcome in market.outcomes {
                    let key = match outcome.point {
                        Some(point) => MarketKey::with_line(&market.key, point.abs().normalize()),
                        None => MarketKey::new(market.key.clone()),
                    };
                    let price = OutcomePrice::new(outcome_name(&market.key, &outcome), outcome.price);

                    match lines.iter_mut().find(|m| m.market_key == key) {
                        Some(line) => line.outcomes.push(price),
                        None => lines.push(BookmakerMarket {
                            bookmaker_name: bookmaker.title.clone(),
                            market_key: key,
                            outcomes: vec![price],
                        }),
                    }
                }

                markets.extend(lines);
            }
        }

        let snapshot = EventSnapshot::new(identifier, markets);
        match self.sport_title {
            Some(sport) => snapshot.with_sport(sport),
            None => snapshot,
        }
    }
}

fn outcome_name(market_key: &str, outcome: &OddsApiOutcome) -> String {
    match outcome.point {
        None => outcome.name.clone(),
        Some(point) => {
            let point = point.normalize();
            if market_key != "totals" && point > Decimal::ZERO {
                format!("{} +{point}", outcome.name)
            } else {
                format!("{} {point}", outcome.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> EventSnapshot {
        serde_json::from_str::<SnapshotEvent>(json)
            .unwrap()
            .into_snapshot()
    }

    #[test]
    fn native_events_pass_through() {
        let event = parse(
            r#"{"identifier":"A vs B","markets":[
                {"bookmaker_name":"One","market_key":"h2h","outcomes":[{"name":"A","price":2.1}]}]}"#,
        );

        assert_eq!(event.identifier, "A vs B");
        assert_eq!(event.sport, None);
        assert_eq!(event.markets[0].outcomes[0].price, dec!(2.1));
    }

    #[test]
    fn odds_api_events_are_flattened() {
        let event = parse(
            r#"{"id":"abc","sport_title":"EPL","home_team":"Arsenal","away_team":"Chelsea",
                "bookmakers":[{"key":"b365","title":"Bet365","markets":[
                    {"key":"h2h","outcomes":[{"name":"Arsenal","price":2.1},{"name":"Chelsea","price":3.4}]}]}]}"#,
        );

        assert_eq!(event.identifier, "Arsenal vs Chelsea");
        assert_eq!(event.sport.as_deref(), Some("EPL"));
        assert_eq!(event.markets.len(), 1);
        assert_eq!(event.markets[0].bookmaker_name, "Bet365");
        assert_eq!(event.markets[0].market_key.as_str(), "h2h");
    }

    #[test]
    fn points_split_lines_and_label_outcomes() {
        let event = parse(
            r#"{"home_team":"A","away_team":"B","bookmakers":[{"title":"One","markets":[
                {"key":"totals","outcomes":[
                    {"name":"Over","price":1.9,"point":2.5},{"name":"Under","price":1.9,"point":2.5},
                    {"name":"Over","price":2.4,"point":3.5},{"name":"Under","price":1.5,"point":3.5}]},
                {"key":"spreads","outcomes":[
                    {"name":"A","price":1.9,"point":-1.5},{"name":"B","price":1.9,"point":1.5}]}]}]}"#,
        );

        let keys: Vec<&str> = event.markets.iter().map(|m| m.market_key.as_str()).collect();
        assert_eq!(keys, vec!["totals:2.5", "totals:3.5", "spreads:1.5"]);

        let names: Vec<&str> = event.markets[0].outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Over 2.5", "Under 2.5"]);

        let names: Vec<&str> = event.markets[2].outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A -1.5", "B +1.5"]);
    }

    #[test]
    fn unknown_shape_fails_to_parse() {
        assert!(serde_json::from_str::<SnapshotEvent>(r#"{"foo":1}"#).is_err());
        assert!(serde_json::from_str::<SnapshotEvent>("42").is_err());
    }
}
