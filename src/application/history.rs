//! Bounded log of past opportunities.
//!
//! The pipeline never touches this. A host (the `watch` command) owns one
//! [`ScanHistory`] and appends each report to it.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::scanner::ScanReport;
use crate::domain::ArbitrageOpportunity;

/// Default number of entries retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 500;

/// One recorded opportunity and the scan time it was seen at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    scanned_at: DateTime<Utc>,
    opportunity: ArbitrageOpportunity,
}

impl HistoryEntry {
    #[must_use]
    pub const fn scanned_at(&self) -> DateTime<Utc> {
        self.scanned_at
    }

    #[must_use]
    pub const fn opportunity(&self) -> &ArbitrageOpportunity {
        &self.opportunity
    }
}

/// Append-only ring of opportunities, oldest evicted first.
#[derive(Debug, Clone)]
pub struct ScanHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for ScanHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ScanHistory {
    /// Create a history holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append every opportunity of `report`, stamped with the current time.
    ///
    /// Returns how many entries were appended.
    pub fn record(&mut self, report: &ScanReport) -> usize {
        self.record_at(report, Utc::now())
    }

    /// Append every opportunity of `report` with an explicit timestamp.
    pub fn record_at(&mut self, report: &ScanReport, scanned_at: DateTime<Utc>) -> usize {
        for opportunity in report.opportunities() {
            self.entries.push_back(HistoryEntry {
                scanned_at,
                opportunity: opportunity.clone(),
            });
        }

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        report.opportunities().len()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Highest margin seen across the retained entries.
    #[must_use]
    pub fn best(&self) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .max_by(|a, b| {
                a.opportunity
                    .profit_margin_percent()
                    .cmp(&b.opportunity.profit_margin_percent())
            })
    }
}
