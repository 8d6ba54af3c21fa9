//! Property Projection - Loan amortization and rental wealth projections
//!
//! This library provides:
//! - Input validation for a leveraged rental property purchase
//! - EMI calculation and monthly amortization schedules
//! - Yearly loan, rental income, and property tax projections
//! - Chart-ready yearly series with break-even, out-of-pocket, and net wealth metrics
//! - Batch and interest-rate sensitivity runs

pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{LoanInputs, ValidationError};
pub use projection::{compute, ProjectionEngine, ProjectionResult, ProjectionDataset, ProjectionSummary};
pub use scenario::ScenarioRunner;
