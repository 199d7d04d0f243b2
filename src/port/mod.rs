//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────────┐      ┌─────────────┐
//!   │ OddsSource   │ ───► │ Scanner          │ ───► │ CLI output  │
//!   │ (adapter)    │      │ (application)    │      │ (adapter)   │
//!   └──────────────┘      └──────────────────┘      └─────────────┘
//! ```

pub mod outbound;

pub use outbound::source::OddsSource;
