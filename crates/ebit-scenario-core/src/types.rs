use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EbitScenarioError;
use crate::EbitScenarioResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Fixed exposure parameters for one commodity.
///
/// Defined once per scenario configuration and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommodityParams {
    /// Commodity identifier, unique within a configuration, e.g. "UREA"
    pub name: String,
    /// Current market (spot) price, the interpolation anchor. Must be > 0.
    pub spot_price: Money,
    /// Annualised cost base multiplied against relative price movement
    /// to obtain the dollar cost impact.
    pub annual_volume_exposure: Money,
    /// Fraction of this commodity's price risk neutralised by the hedge
    /// programme, in [0, 1]. 0 = unhedged, 1 = fully hedged.
    pub hedge_effectiveness: Rate,
}

/// Immutable base parameters for a scenario computation: the starting
/// EBIT, the projection horizon, and the commodity exposure set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Operating income at month 0, before any price movement.
    pub base_ebit: Money,
    /// Number of months projected; series have horizon_months + 1 points.
    pub horizon_months: u32,
    /// Commodity exposures, accumulated independently into the projection.
    pub commodities: Vec<CommodityParams>,
}

impl ScenarioConfig {
    /// Validate the configuration ahead of any computation.
    ///
    /// A zero spot price is a configuration error, not a per-call input
    /// error, so it is rejected here rather than left to surface as a
    /// division failure inside the engine.
    pub fn validate(&self) -> EbitScenarioResult<()> {
        if self.commodities.is_empty() {
            return Err(EbitScenarioError::InvalidInput {
                field: "commodities".to_string(),
                reason: "At least one commodity required".to_string(),
            });
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.commodities.len());
        for c in &self.commodities {
            if seen.contains(&c.name.as_str()) {
                return Err(EbitScenarioError::InvalidInput {
                    field: format!("commodities.{}", c.name),
                    reason: "Duplicate commodity name".to_string(),
                });
            }
            seen.push(c.name.as_str());

            if c.spot_price.is_zero() {
                return Err(EbitScenarioError::DivisionByZero {
                    context: format!("spot price of {}", c.name),
                });
            }
            if c.spot_price < Decimal::ZERO {
                return Err(EbitScenarioError::InvalidInput {
                    field: format!("commodities.{}.spot_price", c.name),
                    reason: "Spot price must be positive".to_string(),
                });
            }
            if c.hedge_effectiveness < Decimal::ZERO || c.hedge_effectiveness > Decimal::ONE {
                return Err(EbitScenarioError::InvalidInput {
                    field: format!("commodities.{}.hedge_effectiveness", c.name),
                    reason: "Hedge effectiveness must be between 0 and 1".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
