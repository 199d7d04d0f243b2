//! Bookmaker-agnostic domain types: quotes, markets, best odds, opportunities.

pub mod best_odds;
pub mod error;
pub mod id;
pub mod market;
pub mod money;
pub mod opportunity;

pub use best_odds::{BestOdds, BestPrice};
pub use error::Rejection;
pub use id::MarketKey;
pub use market::{BookmakerMarket, EventLabel, EventSnapshot, Market, OutcomePrice, OutcomeQuote};
pub use money::{Price, Stake};
pub use opportunity::{ArbitrageOpportunity, OpportunityLeg};
