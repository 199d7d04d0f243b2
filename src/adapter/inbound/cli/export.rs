//! CSV export of opportunities.

use std::path::Path;

use crate::domain::{ArbitrageOpportunity, OpportunityLeg};
use crate::error::Result;

const CSV_HEADER: &str = "sport,event,market,outcomes,bookmakers,odds,total_implied_prob,profit_margin_pct,stake_distribution,guaranteed_profit,roi_pct\n";

/// Render opportunities as CSV, one row per opportunity.
///
/// Per-leg columns hold `|`-separated values in leg order.
#[must_use]
pub fn render_csv(opportunities: &[ArbitrageOpportunity]) -> String {
    let mut csv = String::from(CSV_HEADER);

    for opp in opportunities {
        let legs = opp.legs();
        let row = [
            escape(opp.event().sport().unwrap_or("N/A")),
            escape(opp.event().identifier()),
            escape(opp.market_key().as_str()),
            escape(&join_legs(legs, |l| l.outcome_name().to_string())),
            escape(&join_legs(legs, |l| l.bookmaker_name().to_string())),
            join_legs(legs, |l| l.price().normalize().to_string()),
            opp.display_implied_probability().to_string(),
            opp.display_margin().to_string(),
            join_legs(legs, |l| l.display_stake().to_string()),
            opp.display_profit().to_string(),
            opp.display_roi().to_string(),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

/// Write the CSV rendering of `opportunities` to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_csv(path: &Path, opportunities: &[ArbitrageOpportunity]) -> Result<usize> {
    let csv = render_csv(opportunities);
    std::fs::write(path, &csv)?;
    Ok(csv.len())
}

fn join_legs(legs: &[OpportunityLeg], f: impl Fn(&OpportunityLeg) -> String) -> String {
    legs.iter().map(f).collect::<Vec<_>>().join("|")
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
