use ebit_scenario_core::types::{CommodityParams, ScenarioConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Built-in parameter set: a pulp-and-panels producer exposed to urea,
/// methanol, and wood purchases over a 12-month horizon. Urea and methanol
/// exposures are annualised from monthly cost figures.
pub fn base_config() -> ScenarioConfig {
    ScenarioConfig {
        base_ebit: dec!(380_266_000),
        horizon_months: 12,
        commodities: vec![
            CommodityParams {
                name: "UREA".to_string(),
                spot_price: dec!(494.98),
                annual_volume_exposure: dec!(946_856.35) * dec!(12),
                hedge_effectiveness: dec!(0.7007),
            },
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

/// Plausible target band for a commodity, as (floor, cap) ratios of spot.
/// Wood carries a higher floor than the chemical inputs.
pub fn target_band(name: &str) -> (Decimal, Decimal) {
    match name {
        "MADERA" => (dec!(0.7), dec!(2.0)),
        _ => (dec!(0.5), dec!(2.0)),
    }
}
