//! Reasons a market does not produce an opportunity.
//!
//! None of these are faults. A scan treats every variant as "skip this market
//! and continue"; they exist so callers can count and log what was skipped.
//!
//! # Examples
//!
//! ```
//! use surebet::application::detector::detect;
//! use surebet::application::normalizer::normalize;
//! use surebet::domain::{EventLabel, Market, MarketKey, OutcomeQuote, Rejection};
//! use rust_decimal_macros::dec;
//!
//! let market = Market::new(
//!     EventLabel::new("Home vs Away", None),
//!     MarketKey::from("h2h"),
//!     vec![
//!         OutcomeQuote::new("Home", dec!(2.6), "One"),
//!         OutcomeQuote::new("Draw", dec!(3.4), "One"),
//!         OutcomeQuote::new("Away", dec!(3.0), "One"),
//!     ],
//! );
//!
//! let best = normalize(&market).unwrap();
//! assert!(matches!(detect(best, dec!(2.0)), Err(Rejection::NoArbitrage { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::id::MarketKey;

/// Why a market was skipped by the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Outcome set is not a 2-way or 3-way market.
    #[error("market {market_key} has {outcome_count} distinct outcomes, expected 2 or 3")]
    MalformedMarket {
        market_key: MarketKey,
        outcome_count: usize,
    },

    /// An outcome is listed but none of its quotes carries a usable price.
    #[error("market {market_key} has no valid price for outcome {outcome}")]
    UnpricedOutcome { market_key: MarketKey, outcome: String },

    /// Total implied probability is at or above 1.
    #[error("no arbitrage: implied probability {implied} >= 1")]
    NoArbitrage { implied: Decimal },

    /// Margin exists but is thinner than the configured minimum.
    #[error("margin {margin}% below minimum {min_margin}%")]
    SubThresholdMargin { margin: Decimal, min_margin: Decimal },

    /// The computed stake split does not return the stake under every outcome.
    #[error("allocation returns {min_return} on a stake of {total_stake}")]
    AllocationIntegrityFailure {
        min_return: Decimal,
        total_stake: Decimal,
    },

    /// Stake to split must be positive.
    #[error("total stake must be positive, got {total_stake}")]
    NonPositiveStake { total_stake: Decimal },

    /// Prices or stake are too large for the stake split to be computed.
    #[error("market {market_key} is out of numeric range")]
    OutOfRange { market_key: MarketKey },
}

impl Rejection {
    /// Short machine-friendly name used in logs and tallies.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedMarket { .. } => "malformed_market",
            Self::UnpricedOutcome { .. } => "unpriced_outcome",
            Self::NoArbitrage { .. } => "no_arbitrage",
            Self::SubThresholdMargin { .. } => "sub_threshold_margin",
            Self::AllocationIntegrityFailure { .. } => "allocation_integrity_failure",
            Self::NonPositiveStake { .. } => "non_positive_stake",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }
}
