//! Yearly loan aggregation and rental / tax projections

use super::schedule::MonthlyRecord;
use serde::{Deserialize, Serialize};

/// Loan repayment totals for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyLoanRecord {
    /// Year index (1-based)
    pub year: u32,

    /// Sum of the year's installments
    pub emi: f64,

    /// Sum of the year's interest
    pub interest: f64,

    /// Sum of the year's principal repaid
    pub principal: f64,

    /// Outstanding principal at year end
    pub remaining: f64,
}

/// Rental income for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRentalRecord {
    pub year: u32,
    pub income: f64,
}

/// Property tax for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyTaxRecord {
    pub year: u32,
    pub tax: f64,
}

/// Collapse a monthly schedule into `years` consecutive 12-month windows
///
/// Year `y` covers months `[(y-1)*12, y*12)`. A window with no records
/// (schedule shorter than expected) yields zero totals and a zero balance.
pub fn aggregate_yearly(months: &[MonthlyRecord], years: u32) -> Vec<YearlyLoanRecord> {
    (1..=years)
        .map(|year| {
            let start = ((year - 1) * 12) as usize;
            let end = (year * 12) as usize;
            let window = &months[start.min(months.len())..end.min(months.len())];

            YearlyLoanRecord {
                year,
                emi: window.iter().map(|m| m.emi).sum(),
                interest: window.iter().map(|m| m.interest).sum(),
                principal: window.iter().map(|m| m.principal).sum(),
                remaining: window.last().map(|m| m.remaining_principal).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Annual rent compounded by `escalation_pct` each year; year 1 is unescalated
pub fn project_rental(monthly_rent: f64, escalation_pct: f64, years: u32) -> Vec<YearlyRentalRecord> {
    let initial_annual_rent = monthly_rent * 12.0;
    let growth = 1.0 + escalation_pct / 100.0;

    (1..=years)
        .map(|year| YearlyRentalRecord {
            year,
            income: initial_annual_rent * growth.powi(year as i32 - 1),
        })
        .collect()
}

/// Flat property tax repeated for every year
pub fn project_tax(property_tax: f64, years: u32) -> Vec<YearlyTaxRecord> {
    (1..=years)
        .map(|year| YearlyTaxRecord { year, tax: property_tax })
        .collect()
}
