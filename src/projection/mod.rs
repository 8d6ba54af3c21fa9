//! Projection pipeline: EMI, amortization, yearly aggregation, and dataset synthesis

mod emi;
mod schedule;
mod yearly;
mod dataset;
mod result;
mod engine;
mod irr;

pub use emi::calculate_emi;
pub use schedule::{AmortizationSchedule, MonthlyRecord};
pub use yearly::{
    aggregate_yearly, project_rental, project_tax,
    YearlyLoanRecord, YearlyRentalRecord, YearlyTaxRecord,
};
pub use dataset::{round2, DatasetRow, ProjectionDataset};
pub use result::{ProjectionResult, ProjectionSummary};
pub use engine::{compute, ProjectionEngine};
pub use irr::calculate_irr;
