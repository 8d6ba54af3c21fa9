//! Projection output records

use super::dataset::{round2, ProjectionDataset};
use super::irr::calculate_irr;
use super::yearly::{YearlyLoanRecord, YearlyRentalRecord, YearlyTaxRecord};
use crate::inputs::LoanInputs;
use serde::{Deserialize, Serialize};

/// Complete projection for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Inputs the projection was computed from
    pub inputs: LoanInputs,

    /// Unrounded monthly installment
    pub monthly_emi: f64,

    /// Yearly loan totals
    pub yearly_loan: Vec<YearlyLoanRecord>,

    /// Yearly rental income
    pub yearly_rental: Vec<YearlyRentalRecord>,

    /// Yearly property tax
    pub yearly_tax: Vec<YearlyTaxRecord>,

    /// Rounded series and derived metrics
    pub dataset: ProjectionDataset,
}

impl ProjectionResult {
    /// Headline figures for the summary panel
    pub fn summary(&self) -> ProjectionSummary {
        let total_interest: f64 = self.yearly_loan.iter().map(|r| r.interest).sum();
        let total_paid: f64 = self.yearly_loan.iter().map(|r| r.emi).sum();
        let total_rental: f64 = self.yearly_rental.iter().map(|r| r.income).sum();
        let total_tax: f64 = self.yearly_tax.iter().map(|r| r.tax).sum();

        let total_out_of_pocket = self.dataset.total_out_of_pocket_money;
        let final_property_value = self.dataset.final_property_value;

        ProjectionSummary {
            monthly_emi: round2(self.monthly_emi),
            total_interest: round2(total_interest),
            total_paid: round2(total_paid),
            total_rental: round2(total_rental),
            total_tax: round2(total_tax),
            total_out_of_pocket,
            final_property_value,
            net_wealth_gain: round2(final_property_value - total_out_of_pocket),
            break_even_year: self.dataset.break_even_year,
        }
    }

    /// Owner's yearly net cashflows: down payment at year 0, rent less
    /// EMI and tax each year, and the property's final value in the last year
    pub fn equity_cashflows(&self) -> Vec<f64> {
        let mut cashflows = Vec::with_capacity(self.yearly_loan.len() + 1);
        cashflows.push(-self.inputs.down_payment);

        for ((loan, rental), tax) in self.yearly_loan.iter().zip(&self.yearly_rental).zip(&self.yearly_tax) {
            cashflows.push(rental.income - loan.emi - tax.tax);
        }

        if !self.yearly_loan.is_empty() {
            if let Some(last) = cashflows.last_mut() {
                *last += self.dataset.final_property_value;
            }
        }

        cashflows
    }

    /// Annual IRR on the owner's equity, if one exists
    pub fn equity_irr(&self) -> Option<f64> {
        calculate_irr(&self.equity_cashflows(), 1)
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub monthly_emi: f64,
    pub total_interest: f64,
    /// Sum of all installments
    pub total_paid: f64,
    pub total_rental: f64,
    pub total_tax: f64,
    pub total_out_of_pocket: f64,
    pub final_property_value: f64,
    /// Final property value less lifetime out-of-pocket money
    pub net_wealth_gain: f64,
    pub break_even_year: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_year_result() -> ProjectionResult {
        let inputs = LoanInputs {
            price: 1_000.0,
            down_payment: 200.0,
            loan_tenure: 2,
            ..Default::default()
        };

        ProjectionResult {
            inputs,
            monthly_emi: 100.0 / 3.0,
            yearly_loan: vec![
                YearlyLoanRecord { year: 1, emi: 400.0, interest: 30.0, principal: 370.0, remaining: 430.0 },
                YearlyLoanRecord { year: 2, emi: 450.0, interest: 20.0, principal: 430.0, remaining: 0.0 },
            ],
            yearly_rental: vec![
                YearlyRentalRecord { year: 1, income: 300.0 },
                YearlyRentalRecord { year: 2, income: 330.0 },
            ],
            yearly_tax: vec![
                YearlyTaxRecord { year: 1, tax: 10.0 },
                YearlyTaxRecord { year: 2, tax: 10.0 },
            ],
            dataset: ProjectionDataset {
                total_out_of_pocket_money: 410.0,
                final_property_value: 1_210.0,
                break_even_year: None,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = two_year_result().summary();

        assert_eq!(summary.monthly_emi, 33.33);
        assert_eq!(summary.total_interest, 50.0);
        assert_eq!(summary.total_paid, 850.0);
        assert_eq!(summary.total_rental, 630.0);
        assert_eq!(summary.total_tax, 20.0);
        assert_eq!(summary.total_out_of_pocket, 410.0);
        assert_eq!(summary.net_wealth_gain, 800.0);
        assert_eq!(summary.break_even_year, None);
    }

    #[test]
    fn test_equity_cashflows() {
        let cashflows = two_year_result().equity_cashflows();
        assert_eq!(cashflows, vec![-200.0, -110.0, -130.0 + 1_210.0]);
    }

    #[test]
    fn test_equity_cashflows_without_years() {
        let result = ProjectionResult {
            yearly_loan: Vec::new(),
            yearly_rental: Vec::new(),
            yearly_tax: Vec::new(),
            ..two_year_result()
        };

        assert_eq!(result.equity_cashflows(), vec![-200.0]);
        assert_eq!(result.equity_irr(), None);
    }

    #[test]
    fn test_equity_irr_positive() {
        let irr = two_year_result().equity_irr().unwrap();
        assert!(irr > 0.0, "got {}", irr);
    }
}
