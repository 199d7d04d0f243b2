//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Run: surebet config validate -c {}", path.display()));
    output::note(&format!("3. Run: surebet scan odds.json -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
///
/// A missing file is not an error here; the defaults are shown instead.
pub fn execute_show(path: &Path) -> Result<()> {
    let from_file = path.exists();
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "from_file": from_file,
            "scan": {
                "min_margin_percent": config.scan.min_margin_percent.normalize().to_string(),
                "total_stake": config.scan.total_stake.normalize().to_string(),
                "markets": config.scan.markets,
                "sports": config.scan.sports,
            },
            "history": { "capacity": config.history.capacity },
            "watch": { "interval_secs": config.watch.interval_secs },
            "logging": { "level": config.logging.level, "format": config.logging.format },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !from_file {
        output::warning("File not found, showing defaults");
    }

    output::section("Scan");
    output::field("Min margin", format!("{}%", config.scan.min_margin_percent.normalize()));
    output::field("Stake", config.scan.total_stake.normalize());
    if config.scan.markets.is_empty() {
        output::field("Markets", "all");
    } else {
        let markets: Vec<&str> = config.scan.markets.iter().map(|m| m.as_str()).collect();
        output::field("Markets", markets.join(", "));
    }
    if config.scan.sports.is_empty() {
        output::field("Sports", "all");
    } else {
        output::field("Sports", config.scan.sports.join(", "));
    }

    output::section("Watch");
    output::field("Interval", format!("{}s", config.watch.interval_secs));
    output::field("History", config.history.capacity);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    if config.scan.min_margin_percent.is_zero() {
        output::warning("min_margin_percent is 0, every arbitrage will be reported");
    }

    output::field("Next", format!("surebet config show -c {}", path.display()));
    Ok(())
}
