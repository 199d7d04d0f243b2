//! Monetary types and presentation rounding.
//!
//! All arithmetic runs on unrounded values; rounding is applied once, when a
//! value is shown to a user or exported.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal odds: gross payout per unit stake, stake included.
pub type Price = Decimal;

/// Amount of money placed or returned.
pub type Stake = Decimal;

/// Round a money amount (stake, return, profit) to cents.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage (margin, ROI) to two decimal places.
#[must_use]
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an implied probability to four decimal places.
#[must_use]
pub fn round_probability(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}
