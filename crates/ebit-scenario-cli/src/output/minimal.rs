use crate::report::Report;

/// Print just the headline number: hedge protection at the final month.
pub fn print_minimal(report: &Report) {
    let summary = match report {
        Report::Projection { summary, .. } => summary,
        Report::Summary(summary) => summary,
    };
    println!("{}", summary.final_hedge_gap);
}
