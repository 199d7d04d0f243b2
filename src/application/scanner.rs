//! Scan composition: normalize, detect and allocate across many markets.
//!
//! The [`Scanner`] owns no state beyond its configuration. Every call works
//! only on the events it is handed, so independent scans may run in parallel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::allocator::allocate;
use super::detector::{detect, DEFAULT_MIN_MARGIN_PERCENT};
use super::normalizer::normalize;
use crate::domain::{ArbitrageOpportunity, EventSnapshot, Market, MarketKey, Rejection, Stake};

/// Scan parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Minimum profit margin, in percent, for a market to qualify.
    #[serde(default = "default_min_margin_percent")]
    pub min_margin_percent: Decimal,

    /// Stake split across the outcomes of every opportunity.
    #[serde(default = "default_total_stake")]
    pub total_stake: Stake,

    /// Market keys to evaluate. Empty means every key.
    #[serde(default)]
    pub markets: Vec<MarketKey>,

    /// Sport titles to evaluate, matched case-insensitively. Empty means
    /// every event, including events without a sport.
    #[serde(default)]
    pub sports: Vec<String>,
}

const fn default_min_margin_percent() -> Decimal {
    DEFAULT_MIN_MARGIN_PERCENT
}

const fn default_total_stake() -> Stake {
    Decimal::ONE_HUNDRED
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_margin_percent: default_min_margin_percent(),
            total_stake: default_total_stake(),
            markets: Vec::new(),
            sports: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Whether `key` passes the market allow-list.
    ///
    /// Line keys such as `totals:2.5` match an allow-list entry of either the
    /// full key or its base type.
    #[must_use]
    pub fn allows(&self, key: &MarketKey) -> bool {
        self.markets.is_empty()
            || self
                .markets
                .iter()
                .any(|allowed| allowed == key || allowed.as_str() == key.base())
    }

    /// Whether an event with this sport title passes the sport filter.
    #[must_use]
    pub fn allows_sport(&self, sport: Option<&str>) -> bool {
        if self.sports.is_empty() {
            return true;
        }
        sport.is_some_and(|sport| self.sports.iter().any(|s| s.eq_ignore_ascii_case(sport)))
    }
}

/// Counts of what a scan looked at and why markets were skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanTally {
    pub events: usize,
    /// Events outside the sport filter.
    pub events_skipped: usize,
    pub markets_evaluated: usize,
    /// Markets outside the allow-list.
    pub markets_skipped: usize,
    pub malformed: usize,
    pub no_arbitrage: usize,
    pub sub_threshold: usize,
    pub integrity_failures: usize,
    /// Markets whose prices or stake split do not fit in a `Decimal`.
    pub out_of_range: usize,
    /// Quotes dropped for carrying a price at or below 1.0.
    pub invalid_quotes: usize,
}

impl ScanTally {
    fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::MalformedMarket { .. } | Rejection::UnpricedOutcome { .. } => {
                self.malformed += 1;
            }
            Rejection::NoArbitrage { .. } => self.no_arbitrage += 1,
            Rejection::SubThresholdMargin { .. } => self.sub_threshold += 1,
            Rejection::AllocationIntegrityFailure { .. } | Rejection::NonPositiveStake { .. } => {
                self.integrity_failures += 1;
            }
            Rejection::OutOfRange { .. } => self.out_of_range += 1,
        }
    }

    fn absorb(&mut self, other: &Self) {
        self.events += other.events;
        self.events_skipped += other.events_skipped;
        self.markets_evaluated += other.markets_evaluated;
        self.markets_skipped += other.markets_skipped;
        self.malformed += other.malformed;
        self.no_arbitrage += other.no_arbitrage;
        self.sub_threshold += other.sub_threshold;
        self.integrity_failures += other.integrity_failures;
        self.out_of_range += other.out_of_range;
        self.invalid_quotes += other.invalid_quotes;
    }

    /// Markets that were evaluated but produced no opportunity.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.malformed
            + self.no_arbitrage
            + self.sub_threshold
            + self.integrity_failures
            + self.out_of_range
    }
}

/// Result of scanning one or more events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    opportunities: Vec<ArbitrageOpportunity>,
    tally: ScanTally,
}

impl ScanReport {
    /// Opportunities ordered by profit margin, highest first.
    #[must_use]
    pub fn opportunities(&self) -> &[ArbitrageOpportunity] {
        &self.opportunities
    }

    #[must_use]
    pub const fn tally(&self) -> &ScanTally {
        &self.tally
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }

    #[must_use]
    pub fn into_opportunities(self) -> Vec<ArbitrageOpportunity> {
        self.opportunities
    }

    fn merge(&mut self, other: Self) {
        self.opportunities.extend(other.opportunities);
        self.tally.absorb(&other.tally);
    }

    // Stable, so equal margins keep input order.
    fn sort(&mut self) {
        self.opportunities
            .sort_by(|a, b| b.profit_margin_percent().cmp(&a.profit_margin_percent()));
    }
}

/// Runs the three pipeline stages over events and markets.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    #[must_use]
    pub const fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Evaluate a single market through normalize, detect and allocate.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first stage that declined the market.
    pub fn evaluate(&self, market: &Market) -> Result<ArbitrageOpportunity, Rejection> {
        let best = normalize(market)?;
        let detection = detect(best, self.config.min_margin_percent)?;
        allocate(&detection, self.config.total_stake)
    }

    /// Scan every market of one event.
    #[must_use]
    pub fn scan_event(&self, event: &EventSnapshot) -> ScanReport {
        let mut report = ScanReport::default();
        report.tally.events = 1;

        if !self.config.allows_sport(event.sport.as_deref()) {
            trace!(event = %event.identifier, sport = ?event.sport, "Event not in sport filter");
            report.tally.events_skipped = 1;
            return report;
        }

        for market in event.markets() {
            if !self.config.allows(market.key()) {
                trace!(event = %event.identifier, market = %market.key(), "Market not in allow-list");
                report.tally.markets_skipped += 1;
                continue;
            }

            report.tally.markets_evaluated += 1;
            report.tally.invalid_quotes += market.quotes().iter().filter(|q| !q.is_offer()).count();

            match self.evaluate(&market) {
                Ok(opportunity) => {
                    debug!(
                        event = %event.identifier,
                        market = %market.key(),
                        margin = %opportunity.display_margin(),
                        "Arbitrage found"
                    );
                    report.opportunities.push(opportunity);
                }
                Err(rejection) => {
                    debug!(
                        event = %event.identifier,
                        market = %market.key(),
                        kind = rejection.kind(),
                        reason = %rejection,
                        "Market skipped"
                    );
                    report.tally.record(&rejection);
                }
            }
        }

        report.sort();
        report
    }

    /// Scan a batch of events and return one merged, sorted report.
    #[must_use]
    pub fn scan(&self, events: &[EventSnapshot]) -> ScanReport {
        let mut report = ScanReport::default();
        for event in events {
            report.merge(self.scan_event(event));
        }
        report.sort();

        let tally = report.tally();
        info!(
            events = tally.events,
            events_skipped = tally.events_skipped,
            markets = tally.markets_evaluated,
            skipped = tally.markets_skipped,
            rejected = tally.rejected(),
            invalid_quotes = tally.invalid_quotes,
            opportunities = report.opportunities.len(),
            "Scan complete"
        );

        report
    }
}
