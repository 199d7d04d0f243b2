//! Astral-style CLI output formatting.
//!
//! Every printer has two renderings: a styled line for humans and a
//! `{"type": ..., "payload": ...}` JSON line for scripts. `--quiet` silences
//! the human rendering of informational lines; warnings, errors and JSON are
//! never silenced.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn json_line(kind: &str, payload: serde_json::Value) -> serde_json::Value {
    json!({
        "type": kind,
        "payload": payload,
    })
}

/// Informational line: JSON in JSON mode, nothing when quiet, `human` otherwise.
fn emit(kind: &str, payload: serde_json::Value, human: impl FnOnce()) {
    let config = read_config();
    if config.json {
        println!("{}", json_line(kind, payload));
    } else if !regular_output_suppressed(config) {
        human();
    }
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    emit("header", json!({ "app": "surebet", "version": version }), || {
        println!("{} {}", "surebet".bold(), version.dimmed());
        println!();
    });
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit("field", json!({ "label": label, "value": value }), || {
        println!("  {:<12} {}", label.dimmed(), value);
    });
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

/// Print a warning line. Shown even in quiet mode.
pub fn warning(message: &str) {
    if is_json() {
        println!("{}", json_line("warning", json!({ "message": message })));
    } else {
        println!("  {} {}", "⚠".yellow(), message);
    }
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json_line("error", json!({ "message": message })));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), || {
        println!();
        println!("{}", title.bold());
    });
}

/// Print a timestamped status line (for streaming output).
pub fn info(timestamp: &str, label: &str, message: &str) {
    emit(
        "info",
        json!({ "timestamp": timestamp, "label": label, "message": message }),
        || println!("  {} {} {}", timestamp.dimmed(), label.cyan(), message),
    );
}

/// Print a timestamped opportunity line (for streaming output).
pub fn opportunity(timestamp: &str, message: &str, payload: serde_json::Value) {
    emit("opportunity", payload, || {
        println!(
            "  {} {} {}",
            timestamp.dimmed(),
            "opportunity".yellow(),
            message
        );
    });
}

fn styled(value: impl Display, style: impl FnOnce(&str) -> String) -> String {
    let value = value.to_string();
    if is_json() {
        value
    } else {
        style(&value)
    }
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    styled(value, |v| v.green().to_string())
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    styled(value, |v| v.cyan().to_string())
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    styled(value, |v| v.dimmed().to_string())
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), || {
        println!("  {}", message.dimmed());
    });
}

/// Print a hint with "hint:" prefix (Astral-style).
pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}
