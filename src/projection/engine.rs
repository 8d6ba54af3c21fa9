//! Projection engine: validation followed by the calculation pipeline

use crate::inputs::{validate, LoanInputs, ValidationError};
use super::dataset::ProjectionDataset;
use super::emi::calculate_emi;
use super::result::ProjectionResult;
use super::schedule::{AmortizationSchedule, MonthlyRecord};
use super::yearly::{aggregate_yearly, project_rental, project_tax};

/// Projection engine for a single set of inputs
///
/// Holds the inputs for one computation only; nothing is cached.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    inputs: LoanInputs,
}

impl ProjectionEngine {
    pub fn new(inputs: LoanInputs) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &LoanInputs {
        &self.inputs
    }

    /// Validate the inputs and, if they pass, run every stage
    pub fn compute(&self) -> Result<ProjectionResult, ValidationError> {
        if let Err(err) = validate(&self.inputs) {
            log::warn!("Rejected inputs: {}", err);
            return Err(err);
        }

        let inputs = &self.inputs;
        let monthly_emi = self.monthly_emi();
        log::debug!(
            "EMI {:.2} on principal {:.2} over {} months",
            monthly_emi,
            inputs.principal(),
            inputs.tenure_months()
        );

        let months: Vec<MonthlyRecord> = self.schedule(monthly_emi).collect();
        let yearly_loan = aggregate_yearly(&months, inputs.loan_tenure);
        let yearly_rental = project_rental(inputs.monthly_rent, inputs.rent_escalation, inputs.loan_tenure);
        let yearly_tax = project_tax(inputs.property_tax, inputs.loan_tenure);

        let dataset = ProjectionDataset::synthesize(
            inputs,
            monthly_emi,
            &yearly_loan,
            &yearly_rental,
            &yearly_tax,
        );

        Ok(ProjectionResult {
            inputs: *inputs,
            monthly_emi,
            yearly_loan,
            yearly_rental,
            yearly_tax,
            dataset,
        })
    }

    /// Monthly amortization schedule, after validating the inputs
    pub fn amortization_schedule(&self) -> Result<AmortizationSchedule, ValidationError> {
        validate(&self.inputs)?;
        Ok(self.schedule(self.monthly_emi()))
    }

    fn monthly_emi(&self) -> f64 {
        calculate_emi(
            self.inputs.principal(),
            self.inputs.monthly_rate(),
            self.inputs.tenure_months(),
        )
    }

    fn schedule(&self, emi: f64) -> AmortizationSchedule {
        AmortizationSchedule::new(
            self.inputs.principal(),
            emi,
            self.inputs.monthly_rate(),
            self.inputs.tenure_months(),
        )
    }
}

/// Run a projection for `inputs`
pub fn compute(inputs: LoanInputs) -> Result<ProjectionResult, ValidationError> {
    ProjectionEngine::new(inputs).compute()
}
