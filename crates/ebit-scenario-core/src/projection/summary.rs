//! Headline figures derived from a computed projection: final-month EBIT
//! with and without hedges, the hedge gap, and the spot-vs-target price
//! comparison per commodity. Rendering and unit conversion stay with the
//! presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EbitScenarioError;
use crate::projection::engine::ScenarioProjection;
use crate::types::{Money, Rate, ScenarioConfig};
use crate::EbitScenarioResult;

/// Spot-vs-target comparison for one commodity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLine {
    pub name: String,
    /// Spot price anchoring the scenario.
    pub spot_price: Money,
    /// Price at the final month of the horizon.
    pub target_price: Money,
    /// target / spot − 1, as a rate.
    pub change_pct: Rate,
}

/// Headline scenario figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub base_ebit: Money,
    /// EBIT at the final month without the hedge programme.
    pub final_ebit_unhedged: Money,
    /// EBIT at the final month with the hedge programme.
    pub final_ebit_hedged: Money,
    /// hedged − unhedged at the final month; what the programme protected.
    pub final_hedge_gap: Money,
    pub price_lines: Vec<PriceLine>,
}

/// Derive headline figures from an existing projection.
///
/// The projection must have been produced from the same configuration:
/// every configured commodity needs a price path, and series must be
/// non-empty.
pub fn summarize_scenario(
    config: &ScenarioConfig,
    projection: &ScenarioProjection,
) -> EbitScenarioResult<ScenarioSummary> {
    let final_unhedged = last_point(&projection.ebit_unhedged, "ebit_unhedged")?;
    let final_hedged = last_point(&projection.ebit_hedged, "ebit_hedged")?;

    let mut price_lines = Vec::with_capacity(config.commodities.len());
    for c in &config.commodities {
        let path =
            projection
                .price_paths
                .get(&c.name)
                .ok_or_else(|| EbitScenarioError::InvalidInput {
                    field: format!("price_paths.{}", c.name),
                    reason: "Commodity missing from projection".to_string(),
                })?;
        let target = last_point(path, &format!("price_paths.{}", c.name))?;

        if c.spot_price.is_zero() {
            return Err(EbitScenarioError::DivisionByZero {
                context: format!("spot price of {}", c.name),
            });
        }

        price_lines.push(PriceLine {
            name: c.name.clone(),
            spot_price: c.spot_price,
            target_price: target,
            change_pct: target / c.spot_price - Decimal::ONE,
        });
    }

    Ok(ScenarioSummary {
        base_ebit: config.base_ebit,
        final_ebit_unhedged: final_unhedged,
        final_ebit_hedged: final_hedged,
        final_hedge_gap: final_hedged - final_unhedged,
        price_lines,
    })
}

fn last_point(series: &[Decimal], field: &str) -> EbitScenarioResult<Decimal> {
    series
        .last()
        .copied()
        .ok_or_else(|| EbitScenarioError::InvalidInput {
            field: field.to_string(),
            reason: "Series is empty".to_string(),
        })
}
