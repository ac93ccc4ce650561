use ebit_scenario_core::projection::engine::ScenarioProjection;
use ebit_scenario_core::projection::summary::ScenarioSummary;
use ebit_scenario_core::types::ComputationOutput;

/// What a command hands to the renderers.
pub enum Report {
    /// Full projection plus the derived headline figures.
    Projection {
        envelope: ComputationOutput<ScenarioProjection>,
        summary: ScenarioSummary,
    },
    /// Headline figures only.
    Summary(ScenarioSummary),
}
