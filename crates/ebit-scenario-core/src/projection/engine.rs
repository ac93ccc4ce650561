//! Scenario engine: projects EBIT over the horizon under chosen final
//! commodity prices, with and without the hedge programme.
//!
//! For each commodity the engine builds a linear price path from spot to
//! the target, converts relative price movement into a dollar cost impact
//! via the annual volume exposure, and accumulates three series:
//! - **EBIT unhedged**: full cost impact subtracted
//! - **EBIT hedged**: only the residual (1 − R²) fraction subtracted
//! - **Hedge savings**: the R² fraction absorbed by the programme
//!
//! Commodity contributions are independent and additive; there are no
//! cross terms or portfolio covariance adjustments.

use std::collections::BTreeMap;
use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EbitScenarioError;
use crate::types::{with_metadata, ComputationOutput, Money, ScenarioConfig};
use crate::EbitScenarioResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Full scenario projection: per-commodity price paths plus the three
/// EBIT-related series. Every series has horizon_months + 1 points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioProjection {
    /// Number of months projected; echoed from the configuration.
    pub horizon_months: u32,
    /// Monthly price path per commodity, spot at index 0, target at the end.
    pub price_paths: BTreeMap<String, Vec<Money>>,
    /// EBIT per month with no hedge programme.
    pub ebit_unhedged: Vec<Money>,
    /// EBIT per month with the hedge programme in place.
    pub ebit_hedged: Vec<Money>,
    /// Hedge savings per month: exactly the gap between the two EBIT series.
    pub hedge_savings: Vec<Money>,
}

// ---------------------------------------------------------------------------
// Price path
// ---------------------------------------------------------------------------

/// Linear price path from spot to target across the horizon.
///
/// Index 0 is the spot price and the final index is the target, exactly.
/// A zero-month horizon degenerates to the single target value, so the
/// whole price movement lands on month 0.
pub fn price_path(spot: Money, target: Money, horizon_months: u32) -> Vec<Money> {
    if horizon_months == 0 {
        return vec![target];
    }
    let steps = Decimal::from(horizon_months);
    (0..=horizon_months)
        .map(|i| spot + (target - spot) * (Decimal::from(i) / steps))
        .collect()
}

// ---------------------------------------------------------------------------
// Scenario computation
// ---------------------------------------------------------------------------

/// Project EBIT over the horizon under the supplied target prices.
///
/// `targets` must contain an entry for every configured commodity; extra
/// entries are ignored with a warning. The computation either fully
/// succeeds or fails on the first error; there are no partial series.
pub fn compute_scenario(
    config: &ScenarioConfig,
    targets: &BTreeMap<String, Money>,
) -> EbitScenarioResult<ComputationOutput<ScenarioProjection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let points = config.horizon_months as usize + 1;
    let mut ebit_unhedged = vec![config.base_ebit; points];
    let mut ebit_hedged = vec![config.base_ebit; points];
    let mut hedge_savings = vec![Decimal::ZERO; points];
    let mut price_paths: BTreeMap<String, Vec<Money>> = BTreeMap::new();

    for c in &config.commodities {
        let target = *targets
            .get(&c.name)
            .ok_or_else(|| EbitScenarioError::MissingTarget {
                commodity: c.name.clone(),
            })?;

        if c.spot_price.is_zero() {
            return Err(EbitScenarioError::DivisionByZero {
                context: format!("spot price of {}", c.name),
            });
        }

        if target <= Decimal::ZERO {
            warnings.push(format!(
                "Target price for {} is not positive ({}); propagated as-is",
                c.name, target
            ));
        }

        let path = price_path(c.spot_price, target, config.horizon_months);

        for (i, price) in path.iter().enumerate() {
            // Fractional movement relative to spot; 0 at month 0.
            let relative_change = *price / c.spot_price - Decimal::ONE;
            // Dollar cost impact: a price rise raises cost, lowering EBIT.
            let delta_cost = c.annual_volume_exposure * relative_change;

            ebit_unhedged[i] -= delta_cost;
            ebit_hedged[i] -= (Decimal::ONE - c.hedge_effectiveness) * delta_cost;
            hedge_savings[i] += c.hedge_effectiveness * delta_cost;
        }

        price_paths.insert(c.name.clone(), path);
    }

    for name in targets.keys() {
        if !price_paths.contains_key(name) {
            warnings.push(format!(
                "Target provided for unconfigured commodity {name}; ignored"
            ));
        }
    }

    let output = ScenarioProjection {
        horizon_months: config.horizon_months,
        price_paths,
        ebit_unhedged,
        ebit_hedged,
        hedge_savings,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Linear Price Interpolation with Hedged vs Unhedged EBIT Projection",
        &serde_json::json!({
            "base_ebit": config.base_ebit.to_string(),
            "horizon_months": config.horizon_months,
            "num_commodities": config.commodities.len(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommodityParams;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const TOLERANCE: Decimal = dec!(0.000001);

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn urea_params() -> CommodityParams {
        CommodityParams {
            name: "UREA".to_string(),
            spot_price: dec!(494.98),
            annual_volume_exposure: dec!(946_856.35) * dec!(12),
            hedge_effectiveness: dec!(0.7007),
        }
    }

    fn single_commodity_config() -> ScenarioConfig {
        ScenarioConfig {
            base_ebit: dec!(380_266_000),
            horizon_months: 12,
            commodities: vec![urea_params()],
        }
    }

    fn three_commodity_config() -> ScenarioConfig {
        ScenarioConfig {
            base_ebit: dec!(380_266_000),
            horizon_months: 12,
            commodities: vec![
                urea_params(),
                CommodityParams {
                    name: "METANOL".to_string(),
                    spot_price: dec!(664.69),
                    annual_volume_exposure: dec!(774_925.06) * dec!(12),
                    hedge_effectiveness: dec!(0.5487),
                },
                CommodityParams {
                    name: "MADERA".to_string(),
                    spot_price: dec!(445.10),
                    annual_volume_exposure: dec!(858_115_026.19),
                    hedge_effectiveness: dec!(0.62),
                },
            ],
        }
    }

    fn targets(pairs: &[(&str, Decimal)]) -> BTreeMap<String, Decimal> {
        pairs
            .iter()
            .map(|(name, price)| (name.to_string(), *price))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Price path
    // -----------------------------------------------------------------------

    #[test]
    fn test_path_endpoints_are_exact() {
        let path = price_path(dec!(494.98), dec!(650.00), 12);
        assert_eq!(path.len(), 13);
        assert_eq!(path[0], dec!(494.98));
        assert_eq!(path[12], dec!(650.00));
    }

    #[test]
    fn test_path_evenly_spaced() {
        let path = price_path(dec!(100), dec!(200), 2);
        assert_eq!(path, vec![dec!(100), dec!(150), dec!(200)]);
    }

    #[test]
    fn test_path_strictly_increasing_when_target_above_spot() {
        let path = price_path(dec!(494.98), dec!(650.00), 12);
        for window in path.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_path_strictly_decreasing_when_target_below_spot() {
        let path = price_path(dec!(664.69), dec!(400.00), 12);
        for window in path.windows(2) {
            assert!(window[0] > window[1]);
        }
    }

    #[test]
    fn test_path_constant_when_target_equals_spot() {
        let path = price_path(dec!(445.10), dec!(445.10), 12);
        for price in &path {
            assert_eq!(*price, dec!(445.10));
        }
    }

    #[test]
    fn test_path_zero_horizon_is_single_target_value() {
        let path = price_path(dec!(494.98), dec!(650.00), 0);
        assert_eq!(path, vec![dec!(650.00)]);
    }

    // -----------------------------------------------------------------------
    // Zero movement
    // -----------------------------------------------------------------------

    #[test]
    fn test_zero_movement_holds_baseline() {
        let config = single_commodity_config();
        let result = compute_scenario(&config, &targets(&[("UREA", dec!(494.98))])).unwrap();
        let p = &result.result;
        for i in 0..=12 {
            assert_eq!(p.ebit_unhedged[i], dec!(380_266_000));
            assert_eq!(p.ebit_hedged[i], dec!(380_266_000));
            assert_eq!(p.hedge_savings[i], Decimal::ZERO);
        }
    }

    #[test]
    fn test_month_zero_always_at_baseline() {
        let config = three_commodity_config();
        let t = targets(&[
            ("UREA", dec!(650.00)),
            ("METANOL", dec!(800.00)),
            ("MADERA", dec!(495.54)),
        ]);
        let p = compute_scenario(&config, &t).unwrap().result;
        assert_eq!(p.ebit_unhedged[0], dec!(380_266_000));
        assert_eq!(p.ebit_hedged[0], dec!(380_266_000));
        assert_eq!(p.hedge_savings[0], Decimal::ZERO);
    }

    // -----------------------------------------------------------------------
    // Series identities
    // -----------------------------------------------------------------------

    #[test]
    fn test_savings_equals_hedge_gap_at_every_month() {
        let config = three_commodity_config();
        let t = targets(&[
            ("UREA", dec!(650.00)),
            ("METANOL", dec!(800.00)),
            ("MADERA", dec!(495.54)),
        ]);
        let p = compute_scenario(&config, &t).unwrap().result;
        for i in 0..=12 {
            let gap = p.ebit_hedged[i] - p.ebit_unhedged[i];
            assert!((gap - p.hedge_savings[i]).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_all_series_share_length() {
        let config = three_commodity_config();
        let t = targets(&[
            ("UREA", dec!(650.00)),
            ("METANOL", dec!(800.00)),
            ("MADERA", dec!(495.54)),
        ]);
        let p = compute_scenario(&config, &t).unwrap().result;
        assert_eq!(p.ebit_unhedged.len(), 13);
        assert_eq!(p.ebit_hedged.len(), 13);
        assert_eq!(p.hedge_savings.len(), 13);
        for path in p.price_paths.values() {
            assert_eq!(path.len(), 13);
        }
    }

    // -----------------------------------------------------------------------
    // Hedge effectiveness boundaries
    // -----------------------------------------------------------------------

    #[test]
    fn test_zero_effectiveness_means_no_hedge_effect() {
        let mut config = single_commodity_config();
        config.commodities[0].hedge_effectiveness = Decimal::ZERO;
        let p = compute_scenario(&config, &targets(&[("UREA", dec!(650.00))]))
            .unwrap()
            .result;
        for i in 0..=12 {
            assert_eq!(p.ebit_hedged[i], p.ebit_unhedged[i]);
            assert_eq!(p.hedge_savings[i], Decimal::ZERO);
        }
    }

    #[test]
    fn test_full_effectiveness_neutralises_the_movement() {
        let mut config = single_commodity_config();
        config.commodities[0].hedge_effectiveness = Decimal::ONE;
        let p = compute_scenario(&config, &targets(&[("UREA", dec!(650.00))]))
            .unwrap()
            .result;
        for i in 0..=12 {
            assert_eq!(p.ebit_hedged[i], dec!(380_266_000));
            let absorbed = p.ebit_hedged[i] - p.ebit_unhedged[i];
            assert!((absorbed - p.hedge_savings[i]).abs() < TOLERANCE);
        }
    }

    // -----------------------------------------------------------------------
    // Additivity across commodities
    // -----------------------------------------------------------------------

    #[test]
    fn test_contributions_are_additive_across_commodities() {
        let combined = three_commodity_config();
        let t = targets(&[
            ("UREA", dec!(650.00)),
            ("METANOL", dec!(800.00)),
            ("MADERA", dec!(495.54)),
        ]);
        let combined_p = compute_scenario(&combined, &t).unwrap().result;

        // Sum three single-commodity runs, then strip the double-counted
        // baseline: each run carries its own base EBIT.
        let base = combined.base_ebit;
        let mut summed_unhedged = vec![Decimal::ZERO; 13];
        let mut summed_hedged = vec![Decimal::ZERO; 13];
        let mut summed_savings = vec![Decimal::ZERO; 13];
        for c in &combined.commodities {
            let single = ScenarioConfig {
                base_ebit: base,
                horizon_months: 12,
                commodities: vec![c.clone()],
            };
            let single_t = targets(&[(c.name.as_str(), t[&c.name])]);
            let p = compute_scenario(&single, &single_t).unwrap().result;
            for i in 0..=12 {
                summed_unhedged[i] += p.ebit_unhedged[i];
                summed_hedged[i] += p.ebit_hedged[i];
                summed_savings[i] += p.hedge_savings[i];
            }
        }

        let two = dec!(2);
        for i in 0..=12 {
            assert!((summed_unhedged[i] - two * base - combined_p.ebit_unhedged[i]).abs() < TOLERANCE);
            assert!((summed_hedged[i] - two * base - combined_p.ebit_hedged[i]).abs() < TOLERANCE);
            assert!((summed_savings[i] - combined_p.hedge_savings[i]).abs() < TOLERANCE);
        }
    }

    // -----------------------------------------------------------------------
    // Reference scenario
    // -----------------------------------------------------------------------

    #[test]
    fn test_reference_urea_scenario_final_month() {
        // Urea rising from 494.98 to 650.00 over 12 months against an
        // 11.36M annual exposure, 70.07% hedged.
        let config = single_commodity_config();
        let p = compute_scenario(&config, &targets(&[("UREA", dec!(650.00))]))
            .unwrap()
            .result;

        assert_eq!(p.price_paths["UREA"][0], dec!(494.98));
        assert_eq!(p.price_paths["UREA"][12], dec!(650.00));

        let relative_change = dec!(650.00) / dec!(494.98) - Decimal::ONE;
        let delta_cost = dec!(946_856.35) * dec!(12) * relative_change;
        assert_eq!(p.ebit_unhedged[12], dec!(380_266_000) - delta_cost);

        // Headline magnitudes, to the nearest few dollars.
        assert!((p.ebit_unhedged[12] - dec!(376_707_513)).abs() < dec!(5));
        assert!((p.hedge_savings[12] - dec!(2_493_432)).abs() < dec!(5));
        assert!((p.ebit_hedged[12] - dec!(379_200_945)).abs() < dec!(5));
    }

    // -----------------------------------------------------------------------
    // Error conditions and edge cases
    // -----------------------------------------------------------------------

    #[test]
    fn test_missing_target_names_the_commodity() {
        let config = three_commodity_config();
        let t = targets(&[("UREA", dec!(650.00)), ("MADERA", dec!(495.54))]);
        let err = compute_scenario(&config, &t).unwrap_err();
        assert!(matches!(
            err,
            EbitScenarioError::MissingTarget { ref commodity } if commodity == "METANOL"
        ));
    }

    #[test]
    fn test_zero_spot_price_fails_at_compute_time() {
        let mut config = single_commodity_config();
        config.commodities[0].spot_price = Decimal::ZERO;
        let err = compute_scenario(&config, &targets(&[("UREA", dec!(650.00))])).unwrap_err();
        assert!(matches!(err, EbitScenarioError::DivisionByZero { .. }));
    }

    #[test]
    fn test_zero_horizon_carries_full_movement_at_month_zero() {
        let mut config = single_commodity_config();
        config.horizon_months = 0;
        let p = compute_scenario(&config, &targets(&[("UREA", dec!(650.00))]))
            .unwrap()
            .result;
        assert_eq!(p.price_paths["UREA"], vec![dec!(650.00)]);
        assert_eq!(p.ebit_unhedged.len(), 1);

        let relative_change = dec!(650.00) / dec!(494.98) - Decimal::ONE;
        let delta_cost = dec!(946_856.35) * dec!(12) * relative_change;
        assert_eq!(p.ebit_unhedged[0], dec!(380_266_000) - delta_cost);
    }

    #[test]
    fn test_non_positive_target_is_propagated_with_warning() {
        let config = single_commodity_config();
        let result = compute_scenario(&config, &targets(&[("UREA", Decimal::ZERO)])).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("UREA") && w.contains("not positive")));
        // A target of zero is a -100% move: the full exposure lands on EBIT.
        let exposure = dec!(946_856.35) * dec!(12);
        assert_eq!(result.result.ebit_unhedged[12], dec!(380_266_000) + exposure);
    }

    #[test]
    fn test_unconfigured_target_is_ignored_with_warning() {
        let config = single_commodity_config();
        let t = targets(&[("UREA", dec!(650.00)), ("COBRE", dec!(9_000))]);
        let result = compute_scenario(&config, &t).unwrap();
        assert!(!result.result.price_paths.contains_key("COBRE"));
        assert!(result.warnings.iter().any(|w| w.contains("COBRE")));
    }

    #[test]
    fn test_negative_base_ebit_is_numerically_valid() {
        let mut config = single_commodity_config();
        config.base_ebit = dec!(-1_000_000);
        let p = compute_scenario(&config, &targets(&[("UREA", dec!(494.98))]))
            .unwrap()
            .result;
        assert_eq!(p.ebit_unhedged[12], dec!(-1_000_000));
    }
}
