//! Best available price per outcome for one market.

use super::id::MarketKey;
use super::market::EventLabel;
use super::money::Price;

/// Highest price found for one outcome and the bookmaker offering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPrice {
    outcome_name: String,
    price: Price,
    bookmaker_name: String,
}

impl BestPrice {
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
}

/// Mapping from outcome name to its best price, in first-seen outcome order.
///
/// Outcome names are unique within the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestOdds {
    event: EventLabel,
    market_key: MarketKey,
    entries: Vec<BestPrice>,
}

impl BestOdds {
    /// Build a mapping from already-reduced entries.
    ///
    /// If `entries` repeats an outcome name, the first occurrence wins.
    pub fn new(event: EventLabel, market_key: MarketKey, entries: Vec<BestPrice>) -> Self {
        let mut unique: Vec<BestPrice> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().all(|e| e.outcome_name != entry.outcome_name) {
                unique.push(entry);
            }
        }

        Self {
            event,
            market_key,
            entries: unique,
        }
    }

    #[must_use]
    pub const fn event(&self) -> &EventLabel {
        &self.event
    }

    #[must_use]
    pub const fn market_key(&self) -> &MarketKey {
        &self.market_key
    }

    #[must_use]
    pub fn entries(&self) -> &[BestPrice] {
        &self.entries
    }

    /// Best price for an outcome, if present.
    #[must_use]
    pub fn get(&self, outcome_name: &str) -> Option<&BestPrice> {
        self.entries.iter().find(|e| e.outcome_name == outcome_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn duplicate_names_keep_first_entry() {
        let odds = BestOdds::new(
            EventLabel::new("A vs B", None),
            MarketKey::from("h2h"),
            vec![
                BestPrice::new("A", dec!(2.0), "One"),
                BestPrice::new("B", dec!(2.0), "One"),
                BestPrice::new("A", dec!(2.5), "Two"),
            ],
        );

        assert_eq!(odds.len(), 2);
        assert_eq!(odds.get("A").map(BestPrice::bookmaker_name), Some("One"));
        assert!(odds.get("Draw").is_none());
    }
}
