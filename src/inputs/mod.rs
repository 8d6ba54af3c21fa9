//! Loan and rental inputs, validation, and scenario file loading

mod data;
mod validation;
pub mod loader;

pub use data::LoanInputs;
pub use validation::{validate, ValidationError, MAX_LOAN_TENURE};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedInputs};
