pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::report::Report;
use crate::OutputFormat;

/// Dispatch the report to the appropriate renderer.
pub fn render(format: &OutputFormat, report: &Report) {
    match format {
        OutputFormat::Json => json::print_json(report),
        OutputFormat::Table => table::print_table(report),
        OutputFormat::Csv => csv_out::print_csv(report),
        OutputFormat::Minimal => minimal::print_minimal(report),
    }
}
