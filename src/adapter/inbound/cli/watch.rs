//! Handler for the `watch` command.
//!
//! Re-reads one snapshot on a fixed interval, scans it, and appends every
//! opportunity to a bounded in-memory history until Ctrl-C.

use std::time::Duration;

use chrono::Utc;
use tokio::signal;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::adapter::inbound::cli::command::WatchArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::scan::{load_config, opportunity_json, opportunity_summary};
use crate::adapter::outbound::snapshot::JsonFileSource;
use crate::application::history::ScanHistory;
use crate::application::scanner::Scanner;
use crate::error::Result;
use crate::port::OddsSource;

/// Execute `watch`.
pub async fn execute(args: &WatchArgs) -> Result<()> {
    let config = load_config(&args.overrides, args.interval)?;
    let source = JsonFileSource::new(&args.snapshot);
    let scanner = Scanner::new(config.scan.clone());
    let mut history = ScanHistory::with_capacity(config.history.capacity);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Snapshot", source.name());
    output::field("Interval", format!("{}s", config.watch.interval_secs));
    output::field("Stake", config.scan.total_stake.normalize());
    output::field("Min margin", format!("{}%", config.scan.min_margin_percent.normalize()));
    output::note("Press Ctrl-C to stop");

    let mut ticker = interval(Duration::from_secs(config.watch.interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut cycles = 0u64;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                run_cycle(&source, &scanner, &mut history).await;
                cycles += 1;
                if args.cycles.is_some_and(|limit| cycles >= limit) {
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    output::section("Session");
    output::field("Cycles", cycles);
    output::field("Recorded", history.len());
    if let Some(best) = history.best() {
        output::field("Best", opportunity_summary(best.opportunity()));
    }

    Ok(())
}

/// One fetch-and-scan pass. Source failures are reported and the loop goes on.
async fn run_cycle(source: &JsonFileSource, scanner: &Scanner, history: &mut ScanHistory) {
    let timestamp = Utc::now().format("%H:%M:%S").to_string();

    let events = match source.fetch().await {
        Ok(events) => events,
        Err(e) => {
            warn!(source = source.name(), error = %e, "Snapshot fetch failed");
            output::warning(&format!("{}: {e}", source.name()));
            return;
        }
    };

    let report = scanner.scan(&events);
    let recorded = history.record(&report);

    for opp in report.opportunities() {
        output::opportunity(&timestamp, &opportunity_summary(opp), opportunity_json(opp));
    }
    output::info(
        &timestamp,
        "scan",
        &format!(
            "{} events, {} markets, {} opportunities ({} in history)",
            report.tally().events,
            report.tally().markets_evaluated,
            recorded,
            history.len()
        ),
    );
}
