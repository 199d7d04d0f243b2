//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

const LINE_SEPARATOR: char = ':';

/// Market type identifier (e.g. `h2h`, `totals`) - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketKey(String);

impl MarketKey {
    /// Create a new `MarketKey` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key for one handicap or total line of a market type, e.g. `totals:2.5`.
    pub fn with_line(base: &str, line: impl fmt::Display) -> Self {
        Self(format!("{base}{LINE_SEPARATOR}{line}"))
    }

    /// Get the market key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Market type without any line suffix.
    #[must_use]
    pub fn base(&self) -> &str {
        self.0
            .split_once(LINE_SEPARATOR)
            .map_or(self.0.as_str(), |(base, _)| base)
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MarketKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MarketKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
