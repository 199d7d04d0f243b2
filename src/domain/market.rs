//! Market-related domain types.
//!
//! - [`EventSnapshot`] - One event as supplied by an odds source: a flat list of
//!   per-bookmaker markets
//! - [`Market`] - All bookmakers' quotes for one market type of one event
//! - [`OutcomeQuote`] - One bookmaker's price for one named outcome

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::MarketKey;
use super::money::Price;

/// A named outcome and its decimal price, as quoted inside a bookmaker market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomePrice {
    pub name: String,
    pub price: Price,
}

impl OutcomePrice {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// One bookmaker's offer for one market of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmakerMarket {
    pub bookmaker_name: String,
    pub market_key: MarketKey,
    #[serde(default)]
    pub outcomes: Vec<OutcomePrice>,
}

/// Descriptive label of the event a market belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLabel {
    identifier: String,
    sport: Option<String>,
}

impl EventLabel {
    pub fn new(identifier: impl Into<String>, sport: Option<String>) -> Self {
        Self {
            identifier: identifier.into(),
            sport,
        }
    }

    /// Human-readable event identifier, e.g. `"Arsenal vs Chelsea"`.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Sport title when the source provides one.
    #[must_use]
    pub fn sport(&self) -> Option<&str> {
        self.sport.as_deref()
    }
}

/// Odds snapshot for a single event.
///
/// `markets` holds one entry per (bookmaker, market type) pair; use
/// [`EventSnapshot::markets`] to regroup them by market type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default)]
    pub markets: Vec<BookmakerMarket>,
}

impl EventSnapshot {
    pub fn new(identifier: impl Into<String>, markets: Vec<BookmakerMarket>) -> Self {
        Self {
            identifier: identifier.into(),
            sport: None,
            markets,
        }
    }

    /// Attach a sport title.
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// Label shared by every market of this event.
    #[must_use]
    pub fn label(&self) -> EventLabel {
        EventLabel::new(self.identifier.clone(), self.sport.clone())
    }

    /// Group bookmaker entries by market key.
    ///
    /// Markets come back in the order their key was first seen, and quotes
    /// inside a market keep bookmaker order followed by outcome order.
    #[must_use]
    pub fn markets(&self) -> Vec<Market> {
        let label = self.label();
        let mut markets: Vec<Market> = Vec::new();

        for entry in &self.markets {
            let quotes = entry
                .outcomes
                .iter()
                .map(|o| OutcomeQuote::new(o.name.clone(), o.price, entry.bookmaker_name.clone()));

            match markets.iter_mut().find(|m| m.key == entry.market_key) {
                Some(market) => market.quotes.extend(quotes),
                None => markets.push(Market::new(
                    label.clone(),
                    entry.market_key.clone(),
                    quotes.collect(),
                )),
            }
        }

        markets
    }
}

/// One bookmaker's price for one named outcome of a market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeQuote {
    outcome_name: String,
    price: Price,
    bookmaker_name: String,
}

impl OutcomeQuote {
    pub fn new(
        outcome_name: impl Into<String>,
        price: Price,
        bookmaker_name: impl Into<String>,
    ) -> Self {
        Self {
            outcome_name: outcome_name.into(),
            price,
            bookmaker_name: bookmaker_name.into(),
        }
    }

    #[must_use]
    pub fn outcome_name(&self) -> &str {
        &self.outcome_name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn bookmaker_name(&self) -> &str {
        &self.bookmaker_name
    }

    /// Whether the price is a real offer.
    ///
    /// Decimal odds at or below 1.0 cannot return more than the stake and are
    /// treated as non-offers.
    #[must_use]
    pub fn is_offer(&self) -> bool {
        self.price > Decimal::ONE
    }
}

/// A single betting market for one event, holding quotes from any number of
/// bookmakers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    event: EventLabel,
    key: MarketKey,
    quotes: Vec<OutcomeQuote>,
}

impl Market {
    pub fn new(event: EventLabel, key: MarketKey, quotes: Vec<OutcomeQuote>) -> Self {
        Self { event, key, quotes }
    }

    #[must_use]
    pub const fn event(&self) -> &EventLabel {
        &self.event
    }

    #[must_use]
    pub const fn key(&self) -> &MarketKey {
        &self.key
    }

    #[must_use]
    pub fn quotes(&self) -> &[OutcomeQuote] {
        &self.quotes
    }

    /// Distinct outcome names, in first-seen order, whether priced or not.
    #[must_use]
    pub fn outcome_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for quote in &self.quotes {
            if !names.contains(&quote.outcome_name()) {
                names.push(quote.outcome_name());
            }
        }
        names
    }
}
