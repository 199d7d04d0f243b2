//! Handler for the `scan` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{ScanArgs, ScanOverrides};
use crate::adapter::inbound::cli::{export, output};
use crate::adapter::outbound::snapshot::JsonFileSource;
use crate::application::scanner::{ScanReport, ScanTally, Scanner};
use crate::domain::{ArbitrageOpportunity, EventSnapshot};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::OddsSource;

#[derive(Tabled)]
struct OpportunityRow {
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Margin %")]
    margin: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

/// Load config, apply CLI overrides and start logging.
pub(crate) fn load_config(overrides: &ScanOverrides, interval: Option<u64>) -> Result<Config> {
    let config = Config::load_or_default(&overrides.config)?
        .with_sports(&overrides.sports)
        .with_overrides(overrides.stake, overrides.min_margin, interval)?;
    config.logging.init_with_verbosity(output::verbosity());
    Ok(config)
}

/// Fetch every source in order and concatenate their events.
pub(crate) async fn fetch_all(sources: &[JsonFileSource]) -> Result<Vec<EventSnapshot>> {
    let mut events = Vec::new();
    for source in sources {
        events.extend(source.fetch().await?);
    }
    Ok(events)
}

/// JSON rendering of one opportunity, display-rounded.
pub(crate) fn opportunity_json(opp: &ArbitrageOpportunity) -> serde_json::Value {
    json!({
        "sport": opp.event().sport(),
        "event": opp.event().identifier(),
        "market": opp.market_key().as_str(),
        "legs": opp.legs().iter().map(|leg| json!({
            "outcome": leg.outcome_name(),
            "bookmaker": leg.bookmaker_name(),
            "odds": leg.price().normalize().to_string(),
            "stake": leg.display_stake().to_string(),
        })).collect::<Vec<_>>(),
        "total_stake": opp.total_stake().normalize().to_string(),
        "total_implied_probability": opp.display_implied_probability().to_string(),
        "profit_margin_percent": opp.display_margin().to_string(),
        "guaranteed_profit": opp.display_profit().to_string(),
        "roi_percent": opp.display_roi().to_string(),
    })
}

/// One-line human summary of an opportunity.
pub(crate) fn opportunity_summary(opp: &ArbitrageOpportunity) -> String {
    format!(
        "{} {} margin {}% profit {}",
        opp.event().identifier(),
        output::muted(opp.market_key()),
        output::highlight(opp.display_margin()),
        output::positive(opp.display_profit()),
    )
}

fn tally_json(tally: &ScanTally) -> serde_json::Value {
    serde_json::to_value(tally).unwrap_or_default()
}

/// Execute `scan`.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let config = load_config(&args.overrides, None)?;
    let sources: Vec<JsonFileSource> = args.snapshots.iter().map(JsonFileSource::new).collect();
    let events = fetch_all(&sources).await?;

    let scanner = Scanner::new(config.scan.clone());
    let report = scanner.scan(&events);

    let csv_bytes = match &args.csv {
        Some(path) => Some(export::write_csv(path, report.opportunities())?),
        None => None,
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "scan",
            "total_stake": config.scan.total_stake.normalize().to_string(),
            "min_margin_percent": config.scan.min_margin_percent.normalize().to_string(),
            "opportunities": report.opportunities().iter().map(opportunity_json).collect::<Vec<_>>(),
            "tally": tally_json(report.tally()),
            "csv": args.csv.as_ref().map(|p| p.display().to_string()),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Snapshots", args.snapshots.len());
    output::field("Events", events.len());
    output::field("Stake", config.scan.total_stake.normalize());
    output::field("Min margin", format!("{}%", config.scan.min_margin_percent.normalize()));

    print_report(&report);

    if let (Some(path), Some(bytes)) = (&args.csv, csv_bytes) {
        output::success(&format!("Wrote {} ({bytes} bytes)", path.display()));
    }

    Ok(())
}

fn print_report(report: &ScanReport) {
    if report.is_empty() {
        output::section("No arbitrage opportunities found");
        output::hint("lower --min-margin or add more bookmakers to the snapshot");
    } else {
        output::section(&format!("Found {} opportunities", report.opportunities().len()));
        output::lines(&render_table(report.opportunities()));
    }

    let tally = report.tally();
    output::section("Summary");
    output::field("Markets", tally.markets_evaluated);
    output::field("Rejected", tally.rejected());
    if output::verbosity() > 0 {
        output::field("Off-sport", tally.events_skipped);
        output::field("Skipped", tally.markets_skipped);
        output::field("Malformed", tally.malformed);
        output::field("No arb", tally.no_arbitrage);
        output::field("Below min", tally.sub_threshold);
        output::field("Integrity", tally.integrity_failures);
        output::field("Out of range", tally.out_of_range);
        output::field("Bad quotes", tally.invalid_quotes);
    }
}

/// One table row per leg; event-level columns only on the first leg.
fn render_table(opportunities: &[ArbitrageOpportunity]) -> String {
    let rows: Vec<OpportunityRow> = opportunities
        .iter()
        .flat_map(|opp| {
            opp.legs().iter().enumerate().map(move |(i, leg)| {
                let first = i == 0;
                OpportunityRow {
                    event: if first { opp.event().identifier().to_string() } else { String::new() },
                    market: if first { opp.market_key().to_string() } else { String::new() },
                    outcome: leg.outcome_name().to_string(),
                    bookmaker: leg.bookmaker_name().to_string(),
                    odds: leg.price().normalize().to_string(),
                    stake: leg.display_stake().to_string(),
                    margin: if first { opp.display_margin().to_string() } else { String::new() },
                    profit: if first { opp.display_profit().to_string() } else { String::new() },
                }
            })
        })
        .collect();

    Table::new(rows).to_string()
}
