//! Chart-ready yearly series and derived wealth metrics

use super::yearly::{YearlyLoanRecord, YearlyRentalRecord, YearlyTaxRecord};
use crate::inputs::LoanInputs;
use serde::{Deserialize, Serialize};

/// Round a monetary figure to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parallel yearly series (index 0 = year 1) plus scalar metrics
///
/// Every value is rounded to 2 decimals when placed here; running totals
/// are accumulated unrounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionDataset {
    pub years: Vec<u32>,
    pub principal_remaining: Vec<f64>,
    pub yearly_interest: Vec<f64>,
    pub cumulative_interest: Vec<f64>,
    pub yearly_emi: Vec<f64>,
    pub cumulative_emi: Vec<f64>,
    /// EMI plus tax not covered by rent, floored at zero per year
    pub out_of_pocket_emi: Vec<f64>,
    pub yearly_rental_income: Vec<f64>,
    pub cumulative_rental_income: Vec<f64>,
    /// Annual rent as a percentage of the purchase price
    pub rental_yield: Vec<f64>,
    pub yearly_property_tax: Vec<f64>,
    pub cumulative_property_tax: Vec<f64>,
    /// Cumulative rent minus cumulative EMI
    pub net_position: Vec<f64>,

    /// First year where cumulative rent strictly exceeds cumulative EMI
    pub break_even_year: Option<u32>,
    /// Down payment + EMI + tax - rent over the whole tenure (may be negative)
    pub total_out_of_pocket_money: f64,
    pub final_property_value: f64,
    pub monthly_emi: f64,
}

/// One year of the dataset, for tabular output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRow {
    pub year: u32,
    pub principal_remaining: f64,
    pub yearly_interest: f64,
    pub cumulative_interest: f64,
    pub yearly_emi: f64,
    pub cumulative_emi: f64,
    pub out_of_pocket_emi: f64,
    pub yearly_rental_income: f64,
    pub cumulative_rental_income: f64,
    pub rental_yield: f64,
    pub yearly_property_tax: f64,
    pub cumulative_property_tax: f64,
    pub net_position: f64,
}

impl ProjectionDataset {
    /// Build the dataset from index-aligned yearly loan, rental, and tax records
    pub fn synthesize(
        inputs: &LoanInputs,
        monthly_emi: f64,
        loan: &[YearlyLoanRecord],
        rental: &[YearlyRentalRecord],
        tax: &[YearlyTaxRecord],
    ) -> Self {
        let mut dataset = Self {
            monthly_emi: round2(monthly_emi),
            ..Default::default()
        };

        let mut cumulative_interest = 0.0;
        let mut cumulative_emi = 0.0;
        let mut cumulative_rental = 0.0;
        let mut cumulative_tax = 0.0;

        for ((loan_year, rental_year), tax_year) in loan.iter().zip(rental).zip(tax) {
            cumulative_interest += loan_year.interest;
            cumulative_emi += loan_year.emi;
            cumulative_rental += rental_year.income;
            cumulative_tax += tax_year.tax;

            let uncovered = loan_year.emi - rental_year.income + tax_year.tax;
            let out_of_pocket = if uncovered > 0.0 { round2(uncovered) } else { 0.0 };
            let rental_yield = round2(rental_year.income / inputs.price * 100.0);

            dataset.years.push(loan_year.year);
            dataset.principal_remaining.push(round2(loan_year.remaining));
            dataset.yearly_interest.push(round2(loan_year.interest));
            dataset.cumulative_interest.push(round2(cumulative_interest));
            dataset.yearly_emi.push(round2(loan_year.emi));
            dataset.cumulative_emi.push(round2(cumulative_emi));
            dataset.out_of_pocket_emi.push(out_of_pocket);
            dataset.yearly_rental_income.push(round2(rental_year.income));
            dataset.cumulative_rental_income.push(round2(cumulative_rental));
            dataset.rental_yield.push(rental_yield);
            dataset.yearly_property_tax.push(round2(tax_year.tax));
            dataset.cumulative_property_tax.push(round2(cumulative_tax));
            dataset.net_position.push(round2(cumulative_rental - cumulative_emi));

            if dataset.break_even_year.is_none() && cumulative_rental > cumulative_emi {
                dataset.break_even_year = Some(loan_year.year);
            }
        }

        // Lifetime totals use the unrounded sums, not the floored yearly series
        let total_out_of_pocket = inputs.down_payment + cumulative_emi + cumulative_tax - cumulative_rental;
        dataset.total_out_of_pocket_money = round2(total_out_of_pocket);

        let appreciation = 1.0 + inputs.property_appreciation / 100.0;
        dataset.final_property_value = round2(inputs.price * appreciation.powi(inputs.loan_tenure as i32));

        log::debug!(
            "Dataset synthesized: {} years, break-even {:?}, out-of-pocket {:.2}",
            dataset.years.len(),
            dataset.break_even_year,
            dataset.total_out_of_pocket_money,
        );

        dataset
    }

    /// Number of projected years
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Transpose the parallel series into one row per year
    pub fn rows(&self) -> Vec<DatasetRow> {
        (0..self.len())
            .map(|i| DatasetRow {
                year: self.years[i],
                principal_remaining: self.principal_remaining[i],
                yearly_interest: self.yearly_interest[i],
                cumulative_interest: self.cumulative_interest[i],
                yearly_emi: self.yearly_emi[i],
                cumulative_emi: self.cumulative_emi[i],
                out_of_pocket_emi: self.out_of_pocket_emi[i],
                yearly_rental_income: self.yearly_rental_income[i],
                cumulative_rental_income: self.cumulative_rental_income[i],
                rental_yield: self.rental_yield[i],
                yearly_property_tax: self.yearly_property_tax[i],
                cumulative_property_tax: self.cumulative_property_tax[i],
                net_position: self.net_position[i],
            })
            .collect()
    }
}
