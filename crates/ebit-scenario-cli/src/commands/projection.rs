use clap::Args;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use ebit_scenario_core::projection::{engine, summary};
use ebit_scenario_core::types::ScenarioConfig;

use crate::defaults;
use crate::input;
use crate::report::Report;

/// Arguments shared by the projection commands
#[derive(Args)]
pub struct ScenarioArgs {
    /// Target price for one commodity, as NAME=PRICE (repeatable)
    #[arg(long = "target", value_name = "NAME=PRICE")]
    pub targets: Vec<String>,

    /// Path to a JSON file mapping commodity names to target prices
    #[arg(long)]
    pub targets_file: Option<String>,

    /// Path to a JSON or YAML parameter file (defaults to the built-in set)
    #[arg(long)]
    pub params: Option<String>,

    /// Accept target prices outside the plausible band
    #[arg(long)]
    pub allow_out_of_range: bool,
}

pub fn run_project(args: ScenarioArgs) -> Result<Report, Box<dyn std::error::Error>> {
    let (config, targets) = load_scenario(&args)?;
    let envelope = engine::compute_scenario(&config, &targets)?;
    let summary = summary::summarize_scenario(&config, &envelope.result)?;
    Ok(Report::Projection { envelope, summary })
}

pub fn run_summary(args: ScenarioArgs) -> Result<Report, Box<dyn std::error::Error>> {
    let (config, targets) = load_scenario(&args)?;
    let envelope = engine::compute_scenario(&config, &targets)?;
    let summary = summary::summarize_scenario(&config, &envelope.result)?;
    Ok(Report::Summary(summary))
}

/// Resolve configuration and targets from flags, files, or stdin.
fn load_scenario(
    args: &ScenarioArgs,
) -> Result<(ScenarioConfig, BTreeMap<String, Decimal>), Box<dyn std::error::Error>> {
    let config = match &args.params {
        Some(path) => input::file::read_params(path)?,
        None => defaults::base_config(),
    };
    config.validate()?;

    let targets: BTreeMap<String, Decimal> = if let Some(ref path) = args.targets_file {
        input::file::read_targets(path)?
    } else if !args.targets.is_empty() {
        parse_target_pairs(&args.targets)?
    } else if let Some(piped) = input::stdin::read_targets()? {
        piped
    } else {
        return Err(
            "--target NAME=PRICE, --targets-file <file.json>, or targets on stdin required".into(),
        );
    };

    if !args.allow_out_of_range {
        check_bands(&config, &targets)?;
    }

    Ok((config, targets))
}

fn parse_target_pairs(
    pairs: &[String],
) -> Result<BTreeMap<String, Decimal>, Box<dyn std::error::Error>> {
    let mut targets = BTreeMap::new();
    for pair in pairs {
        let (name, price) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid --target '{pair}': expected NAME=PRICE"))?;
        let price: Decimal = price
            .trim()
            .parse()
            .map_err(|_| format!("Invalid price in --target '{pair}'"))?;
        targets.insert(name.trim().to_string(), price);
    }
    Ok(targets)
}

/// Reject targets outside the plausible band for their commodity.
fn check_bands(
    config: &ScenarioConfig,
    targets: &BTreeMap<String, Decimal>,
) -> Result<(), Box<dyn std::error::Error>> {
    for c in &config.commodities {
        if let Some(target) = targets.get(&c.name) {
            let (floor, cap) = defaults::target_band(&c.name);
            let lo = c.spot_price * floor;
            let hi = c.spot_price * cap;
            if *target < lo || *target > hi {
                return Err(format!(
                    "Target {} for {} is outside the plausible band {}..{} \
                     (use --allow-out-of-range to override)",
                    target, c.name, lo, hi
                )
                .into());
            }
        }
    }
    Ok(())
}
