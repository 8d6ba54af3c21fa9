//! Scenario runner for batch and sensitivity projections
//!
//! Each scenario is projected independently, so batches run in parallel
//! with no shared state.

use crate::inputs::{LoanInputs, NamedInputs, ValidationError};
use crate::projection::{compute, ProjectionResult};
use rayon::prelude::*;

/// Outcome of one scenario in a batch
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult, ValidationError>,
}

/// Runs projections over many sets of inputs
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(LoanInputs::default());
///
/// for outcome in runner.interest_rate_sweep(&[7.5, 8.25, 9.0]) {
///     println!("{}: {:?}", outcome.name, outcome.result.map(|r| r.summary()));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Inputs that sensitivity sweeps vary from
    base_inputs: LoanInputs,
}

impl ScenarioRunner {
    pub fn new(base_inputs: LoanInputs) -> Self {
        Self { base_inputs }
    }

    /// Project the base inputs
    pub fn run(&self) -> Result<ProjectionResult, ValidationError> {
        compute(self.base_inputs)
    }

    /// Project every scenario in parallel; output order matches input order
    ///
    /// An invalid scenario yields an error outcome without affecting the rest.
    pub fn run_batch(&self, scenarios: &[NamedInputs]) -> Vec<ScenarioOutcome> {
        log::info!("Running {} scenarios", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: compute(scenario.inputs),
            })
            .collect()
    }

    /// Re-run the base inputs at each annual interest rate (%)
    pub fn interest_rate_sweep(&self, rates: &[f64]) -> Vec<ScenarioOutcome> {
        let scenarios: Vec<NamedInputs> = rates
            .iter()
            .map(|&rate| NamedInputs {
                name: format!("rate-{}", rate),
                inputs: self.base_inputs.with_interest_rate(rate),
            })
            .collect();

        self.run_batch(&scenarios)
    }

    pub fn base_inputs(&self) -> &LoanInputs {
        &self.base_inputs
    }

    pub fn base_inputs_mut(&mut self) -> &mut LoanInputs {
        &mut self.base_inputs
    }
}
