//! Odds snapshots read from JSON files on disk.
//!
//! A snapshot file is a JSON array of events in either layout described in
//! [`dto`]. Elements that match neither are skipped with a warning; a file
//! that is not an array at all is rejected.

pub mod dto;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use self::dto::SnapshotEvent;
use crate::domain::EventSnapshot;
use crate::error::{Error, Result};
use crate::port::OddsSource;

/// [`OddsSource`] backed by a JSON file, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OddsSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<EventSnapshot>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let events = parse_snapshot(&raw)?;
        debug!(source = %self.name, events = events.len(), "Snapshot loaded");
        Ok(events)
    }
}

/// Parse a snapshot document into events.
///
/// # Errors
///
/// Returns [`Error::Json`] for invalid JSON and [`Error::Snapshot`] when the
/// document is not an array.
pub fn parse_snapshot(raw: &str) -> Result<Vec<EventSnapshot>> {
    let elements = match serde_json::from_str::<serde_json::Value>(raw)? {
        serde_json::Value::Array(elements) => elements,
        other => {
            return Err(Error::Snapshot(format!(
                "expected a JSON array of events, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut events = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        if !element.is_object() {
            warn!(index, kind = json_kind(&element), "Skipping non-object event");
            continue;
        }
        match serde_json::from_value::<SnapshotEvent>(element) {
            Ok(event) => events.push(event.into_snapshot()),
            Err(e) => warn!(index, error = %e, "Skipping unrecognised event"),
        }
    }

    Ok(events)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_non_object_elements() {
        let events = parse_snapshot(
            r#"[42, "x", {"identifier":"A vs B","markets":[]}, null]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].identifier, "A vs B");
    }

    #[test]
    fn skips_unrecognised_objects() {
        let events = parse_snapshot(r#"[{"foo":"bar"},{"identifier":"ok"}]"#).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn rejects_non_array_document() {
        let err = parse_snapshot(r#"{"identifier":"A vs B"}"#).unwrap_err();
        assert!(matches!(err, Error::Snapshot(_)));
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(parse_snapshot("not json"), Err(Error::Json(_))));
    }
}
