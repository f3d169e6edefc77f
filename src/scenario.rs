//! Scenario runner for presets and batch projections
//!
//! Holds one engine and runs many projections against it. Batches fan out
//! over rayon; results come back in input order.

use std::str::FromStr;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{DprError, Result};
use crate::projection::{
    ProjectionConstants, ProjectionEngine, ProjectionInput, ProjectionResult, GROWTH_RATE_RANGE,
    LOAN_TENURE_RANGE, WORKING_CAPITAL_RANGE,
};

/// Named slider positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioPreset {
    Pessimistic,
    Base,
    Optimistic,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 3] = [
        ScenarioPreset::Pessimistic,
        ScenarioPreset::Base,
        ScenarioPreset::Optimistic,
    ];

    /// Slider positions for the preset
    pub fn input(&self) -> ProjectionInput {
        match self {
            // Slowest growth, shortest tenure, heaviest working capital
            ScenarioPreset::Pessimistic => ProjectionInput::new(5.0, 2, 6),
            ScenarioPreset::Base => ProjectionInput::default(),
            ScenarioPreset::Optimistic => ProjectionInput::new(24.0, 10, 1),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioPreset::Pessimistic => "Pessimistic",
            ScenarioPreset::Base => "Base Case",
            ScenarioPreset::Optimistic => "Optimistic",
        }
    }
}

impl FromStr for ScenarioPreset {
    type Err = DprError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pessimistic" => Ok(ScenarioPreset::Pessimistic),
            "base" => Ok(ScenarioPreset::Base),
            "optimistic" => Ok(ScenarioPreset::Optimistic),
            _ => Err(DprError::UnknownPreset(s.to_string())),
        }
    }
}

/// One row of a sweep: inputs and the headline outputs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub growth_rate_percent: f64,
    pub loan_tenure_years: u32,
    pub working_capital_months: u32,
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub closing_cash: i64,
    pub dscr: f64,
    pub meets_threshold: bool,
}

impl From<&ProjectionResult> for SweepRow {
    fn from(result: &ProjectionResult) -> Self {
        let summary = result.summary();
        Self {
            growth_rate_percent: result.input.growth_rate_percent,
            loan_tenure_years: result.input.loan_tenure_years,
            working_capital_months: result.input.working_capital_months,
            total_revenue: summary.total_revenue,
            total_expenses: summary.total_expenses,
            closing_cash: summary.closing_cash,
            dscr: result.dscr,
            meets_threshold: summary.bankability.meets_threshold,
        }
    }
}

/// Runs projections against a shared engine
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default constants
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: ProjectionConstants) -> Self {
        Self {
            engine: ProjectionEngine::new(constants),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        self.engine.project(input)
    }

    pub fn run_preset(&self, preset: ScenarioPreset) -> Result<ProjectionResult> {
        self.engine.project(&preset.input())
    }

    /// Run every preset, in `ScenarioPreset::ALL` order
    pub fn run_presets(&self) -> Result<Vec<(ScenarioPreset, ProjectionResult)>> {
        ScenarioPreset::ALL
            .iter()
            .map(|&preset| self.run_preset(preset).map(|r| (preset, r)))
            .collect()
    }

    /// Run many inputs in parallel; fails on the first invalid input
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Result<Vec<ProjectionResult>> {
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Every integer growth rate on the slider for a fixed tenure and working capital
    pub fn growth_sweep(&self, loan_tenure_years: u32, working_capital_months: u32) -> Result<Vec<SweepRow>> {
        let (min, max) = GROWTH_RATE_RANGE;
        let inputs: Vec<ProjectionInput> = (min as u32..=max as u32)
            .map(|g| ProjectionInput::new(g as f64, loan_tenure_years, working_capital_months))
            .collect();

        let results = self.run_batch(&inputs)?;
        Ok(results.iter().map(SweepRow::from).collect())
    }

    /// Every slider position (growth × tenure × working capital)
    pub fn full_grid(&self) -> Result<Vec<SweepRow>> {
        let results = self.run_batch(&grid_inputs())?;
        Ok(results.iter().map(SweepRow::from).collect())
    }
}

/// All integer slider positions, growth varying slowest
pub fn grid_inputs() -> Vec<ProjectionInput> {
    let (g_min, g_max) = GROWTH_RATE_RANGE;
    let (t_min, t_max) = LOAN_TENURE_RANGE;
    let (w_min, w_max) = WORKING_CAPITAL_RANGE;

    let mut inputs = Vec::new();
    for g in g_min as u32..=g_max as u32 {
        for t in t_min..=t_max {
            for w in w_min..=w_max {
                inputs.push(ProjectionInput::new(g as f64, t, w));
            }
        }
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid_and_ordered() {
        let runner = ScenarioRunner::new();
        let results = runner.run_presets().unwrap();
        assert_eq!(results.len(), 3);

        let dscrs: Vec<f64> = results.iter().map(|(_, r)| r.dscr).collect();
        assert!(dscrs[0] < dscrs[1]);
        assert!(dscrs[1] < dscrs[2]);
    }

    #[test]
    fn test_base_preset_matches_default_input() {
        let runner = ScenarioRunner::new();
        let preset = runner.run_preset(ScenarioPreset::Base).unwrap();
        let direct = runner.run(&ProjectionInput::default()).unwrap();
        assert_eq!(preset, direct);
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let inputs = vec![
            ProjectionInput::new(24.0, 2, 1),
            ProjectionInput::new(5.0, 10, 6),
            ProjectionInput::new(14.0, 5, 3),
        ];
        let results = runner.run_batch(&inputs).unwrap();
        for (result, input) in results.iter().zip(&inputs) {
            assert_eq!(result.input, *input);
        }
    }

    #[test]
    fn test_batch_rejects_invalid_input() {
        let runner = ScenarioRunner::new();
        let inputs = vec![ProjectionInput::default(), ProjectionInput::new(14.0, 0, 3)];
        assert!(matches!(
            runner.run_batch(&inputs),
            Err(DprError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_growth_sweep_covers_slider() {
        let runner = ScenarioRunner::new();
        let rows = runner.growth_sweep(5, 3).unwrap();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].growth_rate_percent, 5.0);
        assert_eq!(rows[19].growth_rate_percent, 24.0);
        assert!(rows.windows(2).all(|w| w[0].total_revenue <= w[1].total_revenue));
    }

    #[test]
    fn test_full_grid_size() {
        assert_eq!(grid_inputs().len(), 20 * 9 * 6);
        let rows = ScenarioRunner::new().full_grid().unwrap();
        assert_eq!(rows.len(), 1080);
        assert!(rows.iter().all(|r| r.meets_threshold));
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("Base".parse::<ScenarioPreset>().unwrap(), ScenarioPreset::Base);
        assert!(matches!(
            "Wild".parse::<ScenarioPreset>(),
            Err(DprError::UnknownPreset(ref raw)) if raw == "Wild"
        ));
    }
}
