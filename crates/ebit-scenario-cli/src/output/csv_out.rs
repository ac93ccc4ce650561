use std::io;

use ebit_scenario_core::projection::engine::ScenarioProjection;
use ebit_scenario_core::projection::summary::ScenarioSummary;

use crate::report::Report;

/// Write the report as CSV to stdout, one row per month at full precision.
pub fn print_csv(report: &Report) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match report {
        Report::Projection { envelope, .. } => write_projection_csv(&mut wtr, &envelope.result),
        Report::Summary(summary) => write_summary_csv(&mut wtr, summary),
    }

    let _ = wtr.flush();
}

fn write_projection_csv(
    wtr: &mut csv::Writer<io::StdoutLock<'_>>,
    projection: &ScenarioProjection,
) {
    let mut headers = vec!["month".to_string()];
    headers.extend(
        projection
            .price_paths
            .keys()
            .map(|name| format!("price_{}", name.to_lowercase())),
    );
    headers.extend([
        "ebit_unhedged".to_string(),
        "ebit_hedged".to_string(),
        "hedge_savings".to_string(),
    ]);
    let _ = wtr.write_record(&headers);

    for i in 0..projection.ebit_unhedged.len() {
        let mut row = vec![i.to_string()];
        row.extend(projection.price_paths.values().map(|path| path[i].to_string()));
        row.extend([
            projection.ebit_unhedged[i].to_string(),
            projection.ebit_hedged[i].to_string(),
            projection.hedge_savings[i].to_string(),
        ]);
        let _ = wtr.write_record(&row);
    }
}

fn write_summary_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, summary: &ScenarioSummary) {
    let _ = wtr.write_record(["field", "value"]);
    let _ = wtr.write_record(["base_ebit", summary.base_ebit.to_string().as_str()]);
    let _ = wtr.write_record([
        "final_ebit_unhedged",
        summary.final_ebit_unhedged.to_string().as_str(),
    ]);
    let _ = wtr.write_record([
        "final_ebit_hedged",
        summary.final_ebit_hedged.to_string().as_str(),
    ]);
    let _ = wtr.write_record([
        "final_hedge_gap",
        summary.final_hedge_gap.to_string().as_str(),
    ]);
    for line in &summary.price_lines {
        let _ = wtr.write_record([
            format!("target_{}", line.name.to_lowercase()).as_str(),
            line.target_price.to_string().as_str(),
        ]);
    }
}
