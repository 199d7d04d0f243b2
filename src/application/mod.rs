//! Application services (use cases).
//!
//! The three pipeline stages run in order for every market:
//! [`normalizer::normalize`] → [`detector::detect`] → [`allocator::allocate`].
//! [`scanner::Scanner`] composes them over whole events; [`history`] is the
//! host-owned log the `watch` command keeps between scans.

pub mod allocator;
pub mod detector;
pub mod history;
pub mod normalizer;
pub mod scanner;

pub use history::{HistoryEntry, ScanHistory};
pub use scanner::{ScanConfig, ScanReport, ScanTally, Scanner};
