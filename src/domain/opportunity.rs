//! Arbitrage opportunity record.
//!
//! An [`ArbitrageOpportunity`] is produced once per (event, market) per scan
//! and never mutated afterwards. All stored figures are unrounded; the
//! `display_*` accessors apply presentation rounding.

use rust_decimal::Decimal;

use super::id::MarketKey;
use super::market::EventLabel;
use super::money::{round_money, round_percent, round_probability, Price, Stake};

/// One outcome of an opportunity: where to bet and how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityLeg {
    outcome_name: String,
    price: Price,
    bookmaker_name: String,
    stake: Stake,
}

impl OpportunityLeg {
    pub fn new(
        outcome_name: impl Into<String>,
        price: Price,
        bookmaker_name: impl Into<String>,
        stake: Stake,
    ) -> Self {
        Self {
            outcome_name: outcome_name.into(),
            price,
            bookmaker_name: bookmaker_name.into(),
            stake,
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

    /// Unrounded stake.
    #[must_use]
    pub const fn stake(&self) -> Stake {
        self.stake
    }

    /// Stake rounded to cents, as it would be placed.
    #[must_use]
    pub fn display_stake(&self) -> Stake {
        round_money(self.stake)
    }

    /// Gross return if this outcome wins, or `None` if it does not fit in a
    /// `Decimal`.
    #[must_use]
    pub fn payout(&self) -> Option<Decimal> {
        self.stake.checked_mul(self.price)
    }
}

/// A detected, validated arbitrage with its stake split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitrageOpportunity {
    event: EventLabel,
    market_key: MarketKey,
    legs: Vec<OpportunityLeg>,
    total_stake: Stake,
    total_implied_probability: Decimal,
    profit_margin_percent: Decimal,
    guaranteed_return: Decimal,
    guaranteed_profit: Decimal,
    roi_percent: Decimal,
}

impl ArbitrageOpportunity {
    /// Assemble an opportunity, deriving profit and ROI from the minimum return.
    ///
    /// Returns `None` when a derived figure overflows.
    pub(crate) fn new(
        event: EventLabel,
        market_key: MarketKey,
        legs: Vec<OpportunityLeg>,
        total_stake: Stake,
        total_implied_probability: Decimal,
        guaranteed_return: Decimal,
    ) -> Option<Self> {
        let profit_margin_percent = (Decimal::ONE - total_implied_probability)
            .checked_mul(Decimal::ONE_HUNDRED)?;
        let guaranteed_profit = guaranteed_return.checked_sub(total_stake)?;
        let roi_percent = guaranteed_profit
            .checked_div(total_stake)?
            .checked_mul(Decimal::ONE_HUNDRED)?;

        Some(Self {
            event,
            market_key,
            legs,
            total_stake,
            total_implied_probability,
            profit_margin_percent,
            guaranteed_return,
            guaranteed_profit,
            roi_percent,
        })
    }

    #[must_use]
    pub const fn event(&self) -> &EventLabel {
        &self.event
    }

    #[must_use]
    pub const fn market_key(&self) -> &MarketKey {
        &self.market_key
    }

    /// Legs in outcome discovery order.
    #[must_use]
    pub fn legs(&self) -> &[OpportunityLeg] {
        &self.legs
    }

    #[must_use]
    pub fn outcome_count(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub const fn total_stake(&self) -> Stake {
        self.total_stake
    }

    /// Sum of `1 / price` over all legs.
    #[must_use]
    pub const fn total_implied_probability(&self) -> Decimal {
        self.total_implied_probability
    }

    /// `(1 - implied) * 100`.
    #[must_use]
    pub const fn profit_margin_percent(&self) -> Decimal {
        self.profit_margin_percent
    }

    /// Smallest gross return across outcomes.
    #[must_use]
    pub const fn guaranteed_return(&self) -> Decimal {
        self.guaranteed_return
    }

    #[must_use]
    pub const fn guaranteed_profit(&self) -> Decimal {
        self.guaranteed_profit
    }

    #[must_use]
    pub const fn roi_percent(&self) -> Decimal {
        self.roi_percent
    }

    /// Smallest gross return when every leg is placed at its rounded stake.
    #[must_use]
    pub fn rounded_min_return(&self) -> Decimal {
        self.legs
            .iter()
            .filter_map(|leg| leg.display_stake().checked_mul(leg.price()))
            .min()
            .unwrap_or(Decimal::ZERO)
    }

    #[must_use]
    pub fn display_implied_probability(&self) -> Decimal {
        round_probability(self.total_implied_probability)
    }

    #[must_use]
    pub fn display_margin(&self) -> Decimal {
        round_percent(self.profit_margin_percent)
    }

    #[must_use]
    pub fn display_profit(&self) -> Decimal {
        round_money(self.guaranteed_profit)
    }

    #[must_use]
    pub fn display_roi(&self) -> Decimal {
        round_percent(self.roi_percent)
    }
}
