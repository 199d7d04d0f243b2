//! Infrastructure configuration modules.

pub mod logging;
pub mod scan;
pub mod settings;

pub use settings::Config;
