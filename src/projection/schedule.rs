//! Monthly amortization schedule

use serde::{Deserialize, Serialize};

/// One month of loan repayment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    /// Month index (1-based)
    pub month: u32,

    /// Installment paid (identical every month)
    pub emi: f64,

    /// Interest portion of this month's installment
    pub interest: f64,

    /// Principal portion of this month's installment
    pub principal: f64,

    /// Outstanding principal after this payment, never below zero
    pub remaining_principal: f64,
}

/// Lazily generated amortization schedule
///
/// Yields exactly `months` records in order and then stops; the schedule
/// cannot be restarted.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    emi: f64,
    monthly_rate: f64,
    months: u32,

    /// Last month emitted (0 before the first payment)
    month: u32,

    /// Outstanding principal carried into the next month
    remaining_principal: f64,
}

impl AmortizationSchedule {
    pub fn new(principal: f64, emi: f64, monthly_rate: f64, months: u32) -> Self {
        Self {
            emi,
            monthly_rate,
            months,
            month: 0,
            remaining_principal: principal,
        }
    }

    /// Total number of months in the schedule
    pub fn months(&self) -> u32 {
        self.months
    }
}

impl Iterator for AmortizationSchedule {
    type Item = MonthlyRecord;

    fn next(&mut self) -> Option<MonthlyRecord> {
        if self.month >= self.months {
            return None;
        }
        self.month += 1;

        let interest = self.remaining_principal * self.monthly_rate;
        let principal = self.emi - interest;

        // Floating point residue can push the final balance just under zero
        self.remaining_principal = (self.remaining_principal - principal).max(0.0);

        Some(MonthlyRecord {
            month: self.month,
            emi: self.emi,
            interest,
            principal,
            remaining_principal: self.remaining_principal,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.months - self.month) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AmortizationSchedule {}
