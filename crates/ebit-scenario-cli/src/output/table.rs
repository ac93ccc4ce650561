use colored::Colorize;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabled::{builder::Builder, Table};

use ebit_scenario_core::projection::engine::ScenarioProjection;
use ebit_scenario_core::projection::summary::ScenarioSummary;

use crate::report::Report;

/// Render the report as tables using the tabled crate. Monetary series
/// print in millions; full precision stays in the JSON and CSV formats.
pub fn print_table(report: &Report) {
    match report {
        Report::Projection { envelope, summary } => {
            print_series_table(&envelope.result);
            println!();
            print_price_table(summary);
            println!();
            print_summary_block(summary);

            if !envelope.warnings.is_empty() {
                println!("\nWarnings:");
                for w in &envelope.warnings {
                    println!("  - {}", w);
                }
            }

            println!("\nMethodology: {}", envelope.methodology);
        }
        Report::Summary(summary) => {
            print_price_table(summary);
            println!();
            print_summary_block(summary);
        }
    }
}

fn print_series_table(projection: &ScenarioProjection) {
    let mut builder = Builder::default();
    builder.push_record([
        "Month",
        "EBIT unhedged (M)",
        "EBIT hedged (M)",
        "Hedge savings (M)",
    ]);
    for i in 0..projection.ebit_unhedged.len() {
        builder.push_record([
            format!("M{i}"),
            fmt_millions(&projection.ebit_unhedged[i]),
            fmt_millions(&projection.ebit_hedged[i]),
            fmt_millions(&projection.hedge_savings[i]),
        ]);
    }
    println!("{}", Table::from(builder));
}

fn print_price_table(summary: &ScenarioSummary) {
    let mut builder = Builder::default();
    builder.push_record(["Commodity", "Spot (P0)", "Final price", "Change %"]);
    for line in &summary.price_lines {
        builder.push_record([
            line.name.clone(),
            line.spot_price.round_dp(2).to_string(),
            line.target_price.round_dp(2).to_string(),
            format!("{} %", (line.change_pct * dec!(100)).round_dp(2)),
        ]);
    }
    println!("{}", Table::from(builder));
}

fn print_summary_block(summary: &ScenarioSummary) {
    println!("{}", "Scenario summary".bold());
    println!("  Base EBIT:           {}", fmt_millions(&summary.base_ebit));
    println!(
        "  Final EBIT unhedged: {}",
        fmt_millions(&summary.final_ebit_unhedged)
    );
    println!(
        "  Final EBIT hedged:   {}",
        fmt_millions(&summary.final_ebit_hedged)
    );

    let gap = fmt_millions(&summary.final_hedge_gap);
    if summary.final_hedge_gap >= Decimal::ZERO {
        println!("  Hedge protection:    {}", format!("+{gap}").green());
    } else {
        println!("  Hedge protection:    {}", gap.red());
    }
}

fn fmt_millions(value: &Decimal) -> String {
    format!("{} M", (*value / dec!(1_000_000)).round_dp(1))
}
