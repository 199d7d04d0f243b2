//! Surebet - sports betting arbitrage detection and stake allocation.
//!
//! Given decimal odds from several bookmakers for the same event and market,
//! surebet finds the best price per outcome, decides whether backing every
//! outcome at those prices guarantees a profit, and splits a stake so that
//! every outcome pays the same.
//!
//! # Architecture
//!
//! - [`domain`] - Quotes, markets, best odds, opportunities and rejection reasons
//! - [`application`] - The pipeline (`normalize` → `detect` → `allocate`),
//!   the [`Scanner`](application::Scanner) that runs it over events, and the
//!   bounded [`ScanHistory`](application::ScanHistory)
//! - [`port`] - The [`OddsSource`](port::OddsSource) trait
//! - [`adapter`] - JSON snapshot source and the CLI
//! - [`infrastructure`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use surebet::application::{ScanConfig, Scanner};
//! use surebet::domain::{BookmakerMarket, EventSnapshot, MarketKey, OutcomePrice};
//! use rust_decimal_macros::dec;
//!
//! let event = EventSnapshot::new(
//!     "TeamA vs TeamB",
//!     vec![
//!         BookmakerMarket {
//!             bookmaker_name: "Bookie1".into(),
//!             market_key: MarketKey::from("h2h"),
//!             outcomes: vec![
//!                 OutcomePrice::new("TeamA", dec!(2.10)),
//!                 OutcomePrice::new("TeamB", dec!(1.80)),
//!             ],
//!         },
//!         BookmakerMarket {
//!             bookmaker_name: "Bookie2".into(),
//!             market_key: MarketKey::from("h2h"),
//!             outcomes: vec![
//!                 OutcomePrice::new("TeamA", dec!(1.90)),
//!                 OutcomePrice::new("TeamB", dec!(2.05)),
//!             ],
//!         },
//!     ],
//! );
//!
//! let report = Scanner::new(ScanConfig::default()).scan(&[event]);
//! let opp = &report.opportunities()[0];
//! assert_eq!(opp.display_margin(), dec!(3.60));
//! assert_eq!(opp.legs()[0].display_stake(), dec!(49.40));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
