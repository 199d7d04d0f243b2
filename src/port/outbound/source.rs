//! Odds source port.
//!
//! A source delivers one batch of event snapshots per call. Structural
//! validation of the upstream payload happens here, before the pipeline sees
//! any data.

use async_trait::async_trait;

use crate::domain::EventSnapshot;
use crate::error::Result;

/// Provider of event snapshots for a scan.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Fetch the current snapshot of every event the source knows about.
    async fn fetch(&self) -> Result<Vec<EventSnapshot>>;
}
