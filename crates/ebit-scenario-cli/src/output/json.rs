use serde_json::json;

use crate::report::Report;

/// Pretty-print the report as JSON to stdout.
pub fn print_json(report: &Report) {
    let value = match report {
        Report::Projection { envelope, summary } => json!({
            "projection": envelope,
            "summary": summary,
        }),
        Report::Summary(summary) => json!({ "summary": summary }),
    };

    match serde_json::to_string_pretty(&value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
