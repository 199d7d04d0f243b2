//! Best-price reduction across bookmakers.

use tracing::trace;

use crate::domain::{BestOdds, BestPrice, Market, Rejection};

/// Smallest outcome set the arbitrage math is defined for.
pub const MIN_OUTCOMES: usize = 2;
/// Largest outcome set the arbitrage math is defined for.
pub const MAX_OUTCOMES: usize = 3;

/// Collapse a market's quotes into the single best price per outcome.
///
/// A quote replaces the stored entry only when its price is strictly
/// greater, so ties keep the first bookmaker seen. Quotes priced at or below
/// 1.0 are dropped.
///
/// # Errors
///
/// - [`Rejection::UnpricedOutcome`] when an outcome appears only with invalid prices
/// - [`Rejection::MalformedMarket`] when the market does not have 2 or 3 outcomes
pub fn normalize(market: &Market) -> Result<BestOdds, Rejection> {
    let mut entries: Vec<BestPrice> = Vec::new();

    for quote in market.quotes() {
        if !quote.is_offer() {
            trace!(
                market = %market.key(),
                outcome = quote.outcome_name(),
                bookmaker = quote.bookmaker_name(),
                price = %quote.price(),
                "Dropping invalid price"
            );
            continue;
        }

        match entries
            .iter_mut()
            .find(|e| e.outcome_name() == quote.outcome_name())
        {
            Some(best) if quote.price() > best.price() => {
                *best = BestPrice::new(
                    quote.outcome_name(),
                    quote.price(),
                    quote.bookmaker_name(),
                );
            }
            Some(_) => {}
            None => entries.push(BestPrice::new(
                quote.outcome_name(),
                quote.price(),
                quote.bookmaker_name(),
            )),
        }
    }

    if let Some(unpriced) = market
        .outcome_names()
        .into_iter()
        .find(|name| entries.iter().all(|e| e.outcome_name() != *name))
    {
        return Err(Rejection::UnpricedOutcome {
            market_key: market.key().clone(),
            outcome: unpriced.to_string(),
        });
    }

    if !(MIN_OUTCOMES..=MAX_OUTCOMES).contains(&entries.len()) {
        return Err(Rejection::MalformedMarket {
            market_key: market.key().clone(),
            outcome_count: entries.len(),
        });
    }

    Ok(BestOdds::new(
        market.event().clone(),
        market.key().clone(),
        entries,
    ))
}
