use std::collections::BTreeMap;

use napi::Result as NapiResult;
use napi_derive::napi;

use ebit_scenario_core::projection::{engine, summary};
use ebit_scenario_core::types::ScenarioConfig;
use rust_decimal::Decimal;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_scenario(
    config_json: &str,
    targets_json: &str,
) -> NapiResult<(ScenarioConfig, BTreeMap<String, Decimal>)> {
    let config: ScenarioConfig = serde_json::from_str(config_json).map_err(to_napi_error)?;
    config.validate().map_err(to_napi_error)?;
    let targets: BTreeMap<String, Decimal> =
        serde_json::from_str(targets_json).map_err(to_napi_error)?;
    Ok((config, targets))
}

/// Project EBIT under the supplied target prices. Returns the full
/// computation envelope (price paths plus the three series) as JSON.
#[napi]
pub fn compute_scenario(config_json: String, targets_json: String) -> NapiResult<String> {
    let (config, targets) = parse_scenario(&config_json, &targets_json)?;
    let output = engine::compute_scenario(&config, &targets).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Headline figures for a scenario: final-month EBIT hedged and unhedged,
/// the hedge gap, and the spot-vs-target price comparison. Returns JSON.
#[napi]
pub fn scenario_summary(config_json: String, targets_json: String) -> NapiResult<String> {
    let (config, targets) = parse_scenario(&config_json, &targets_json)?;
    let envelope = engine::compute_scenario(&config, &targets).map_err(to_napi_error)?;
    let summary =
        summary::summarize_scenario(&config, &envelope.result).map_err(to_napi_error)?;
    serde_json::to_string(&summary).map_err(to_napi_error)
}
