//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions so tests focus on assertions rather
//! than construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::{BookmakerMarket, EventLabel, EventSnapshot, Market, MarketKey, OutcomePrice, OutcomeQuote};

/// One bookmaker's prices for one market.
pub fn bookmaker_market(bookmaker: &str, key: &str, outcomes: &[(&str, Decimal)]) -> BookmakerMarket {
    BookmakerMarket {
        bookmaker_name: bookmaker.to_string(),
        market_key: MarketKey::from(key),
        outcomes: outcomes
            .iter()
            .map(|(name, price)| OutcomePrice::new(*name, *price))
            .collect(),
    }
}

/// An event with the given bookmaker markets and no sport label.
pub fn event(identifier: &str, markets: Vec<BookmakerMarket>) -> EventSnapshot {
    EventSnapshot::new(identifier, markets)
}

/// A single quote.
pub fn quote(outcome: &str, price: Decimal, bookmaker: &str) -> OutcomeQuote {
    OutcomeQuote::new(outcome, price, bookmaker)
}

/// A grouped market for `event` built directly from quotes.
pub fn market(event: &str, key: &str, quotes: Vec<OutcomeQuote>) -> Market {
    Market::new(EventLabel::new(event, None), MarketKey::from(key), quotes)
}

/// Two-bookmaker, two-way market where each side's best price comes from a
/// different bookmaker.
pub fn crossed_two_way(identifier: &str, home: Decimal, away: Decimal) -> EventSnapshot {
    event(
        identifier,
        vec![
            bookmaker_market("Bookie1", "h2h", &[("Home", home), ("Away", Decimal::new(15, 1))]),
            bookmaker_market("Bookie2", "h2h", &[("Home", Decimal::new(15, 1)), ("Away", away)]),
        ],
    )
}
