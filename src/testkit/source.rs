//! In-memory [`OddsSource`] implementations for testing.
//!
//! - [`StaticSource`] - Returns the same events on every fetch.
//! - [`ScriptedSource`] - Pops one scripted result per fetch and counts calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::EventSnapshot;
use crate::error::Result;
use crate::port::OddsSource;

/// A source that always yields the same events.
pub struct StaticSource {
    events: Vec<EventSnapshot>,
}

impl StaticSource {
    pub fn new(events: Vec<EventSnapshot>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl OddsSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<EventSnapshot>> {
        Ok(self.events.clone())
    }
}

/// A source with a queue of scripted fetch results.
///
/// Returns an empty batch once the queue is exhausted.
pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<Vec<EventSnapshot>>>>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedSource {
    pub fn new(results: Vec<Result<Vec<EventSnapshot>>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OddsSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Vec<EventSnapshot>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let next = match self.results.lock() {
            Ok(mut results) => results.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        next.unwrap_or_else(|| Ok(Vec::new()))
    }
}
