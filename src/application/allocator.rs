//! Stake allocation for a detected arbitrage.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::detector::Detection;
use crate::domain::{ArbitrageOpportunity, OpportunityLeg, Rejection, Stake};

/// Split `total_stake` across outcomes so every outcome pays the same.
///
/// Each outcome receives `(1 / price) / implied * total_stake`. The split is
/// then re-checked: the smallest gross return must cover the stake, or the
/// opportunity is dropped rather than reported with a phantom profit.
///
/// # Errors
///
/// - [`Rejection::NonPositiveStake`] when `total_stake` is zero or negative
/// - [`Rejection::OutOfRange`] when a stake, payout or ROI does not fit in a `Decimal`
/// - [`Rejection::AllocationIntegrityFailure`] when the split loses money under some outcome
pub fn allocate(detection: &Detection, total_stake: Stake) -> Result<ArbitrageOpportunity, Rejection> {
    if total_stake <= Decimal::ZERO {
        return Err(Rejection::NonPositiveStake { total_stake });
    }

    let implied = detection.implied();
    let best_odds = detection.best_odds();
    let out_of_range = || {
        debug!(
            event = best_odds.event().identifier(),
            market = %best_odds.market_key(),
            %total_stake,
            "Stake split overflows"
        );
        Rejection::OutOfRange {
            market_key: best_odds.market_key().clone(),
        }
    };

    let legs = best_odds
        .entries()
        .iter()
        .filter(|e| e.price() > Decimal::ZERO)
        .map(|e| {
            let stake = Decimal::ONE
                .checked_div(e.price())
                .and_then(|share| share.checked_div(implied))
                .and_then(|share| share.checked_mul(total_stake))?;
            Some(OpportunityLeg::new(e.outcome_name(), e.price(), e.bookmaker_name(), stake))
        })
        .collect::<Option<Vec<OpportunityLeg>>>()
        .ok_or_else(out_of_range)?;

    let min_return = legs
        .iter()
        .map(OpportunityLeg::payout)
        .collect::<Option<Vec<Decimal>>>()
        .ok_or_else(out_of_range)?
        .into_iter()
        .min()
        .unwrap_or(Decimal::ZERO);

    if min_return < total_stake {
        warn!(
            event = best_odds.event().identifier(),
            market = %best_odds.market_key(),
            %min_return,
            %total_stake,
            "Stake split fails to cover stake, dropping opportunity"
        );
        return Err(Rejection::AllocationIntegrityFailure {
            min_return,
            total_stake,
        });
    }

    ArbitrageOpportunity::new(
        best_odds.event().clone(),
        best_odds.market_key().clone(),
        legs,
        total_stake,
        implied,
        min_return,
    )
    .ok_or_else(out_of_range)
}
