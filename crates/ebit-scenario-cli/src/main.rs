mod commands;
mod defaults;
mod input;
mod output;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::projection::ScenarioArgs;

/// Commodity-hedging EBIT scenario projections
#[derive(Parser)]
#[command(
    name = "ebitsim",
    version,
    about = "Commodity-hedging EBIT scenario projections",
    long_about = "Projects operating income (EBIT) over a monthly horizon under \
                  chosen final commodity prices, contrasting hedged and unhedged \
                  outcomes. Ships with the default three-commodity parameter set; \
                  alternative parameters load from JSON or YAML files."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project EBIT month by month under the chosen target prices
    Project(ScenarioArgs),
    /// Print only the headline scenario figures
    Summary(ScenarioArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Project(args) => commands::projection::run_project(args),
        Commands::Summary(args) => commands::projection::run_summary(args),
        Commands::Version => {
            println!("ebitsim {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(report) => {
            output::render(&cli.output, &report);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
