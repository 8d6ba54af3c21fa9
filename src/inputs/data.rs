//! Input record for a single property projection

use serde::{Deserialize, Serialize};

/// Caller-supplied terms of the purchase, loan, and rental
///
/// Percentages are expressed as whole numbers (8.25 means 8.25%), matching
/// how they are entered on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInputs {
    /// Purchase price of the property
    #[serde(default = "default_price")]
    pub price: f64,

    /// Cash paid up front; the rest is financed
    #[serde(default = "default_down_payment")]
    pub down_payment: f64,

    /// Annual interest rate (%)
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    /// Loan tenure in whole years
    #[serde(default = "default_loan_tenure")]
    pub loan_tenure: u32,

    /// Rent received per month in year 1
    #[serde(default = "default_monthly_rent")]
    pub monthly_rent: f64,

    /// Annual rent growth (%), compounded
    #[serde(default = "default_rent_escalation")]
    pub rent_escalation: f64,

    /// Flat property tax paid every year
    #[serde(default = "default_property_tax")]
    pub property_tax: f64,

    /// Annual property value growth (%), compounded
    #[serde(default = "default_property_appreciation")]
    pub property_appreciation: f64,
}

fn default_price() -> f64 { 31_200_000.0 }
fn default_down_payment() -> f64 { 5_000_000.0 }
fn default_interest_rate() -> f64 { 8.25 }
fn default_loan_tenure() -> u32 { 20 }
fn default_monthly_rent() -> f64 { 170_000.0 }
fn default_rent_escalation() -> f64 { 5.0 }
fn default_property_tax() -> f64 { 95_000.0 }
fn default_property_appreciation() -> f64 { 6.0 }

impl LoanInputs {
    /// Amount financed by the loan
    pub fn principal(&self) -> f64 {
        self.price - self.down_payment
    }

    /// Monthly interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        (self.interest_rate / 100.0) / 12.0
    }

    /// Number of monthly installments over the tenure
    pub fn tenure_months(&self) -> u32 {
        self.loan_tenure.saturating_mul(12)
    }

    /// Rent received over the first year, before escalation
    pub fn initial_annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }

    /// Parse a JSON body, mapping an out-of-range `loanTenure` onto the
    /// nearest `u32` so validation reports it instead of the deserializer
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(body)?;

        if let Some(tenure) = value.get_mut("loanTenure") {
            match tenure.as_f64() {
                Some(years) if years < 0.0 => *tenure = serde_json::Value::from(0u32),
                Some(years) if years > u32::MAX as f64 => *tenure = serde_json::Value::from(u32::MAX),
                _ => {}
            }
        }

        serde_json::from_value(value)
    }

    /// Copy of these inputs with a different annual interest rate
    pub fn with_interest_rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = interest_rate;
        self
    }
}

impl Default for LoanInputs {
    /// Reference scenario used by the calculator form on first load
    fn default() -> Self {
        Self {
            price: default_price(),
            down_payment: default_down_payment(),
            interest_rate: default_interest_rate(),
            loan_tenure: default_loan_tenure(),
            monthly_rent: default_monthly_rent(),
            rent_escalation: default_rent_escalation(),
            property_tax: default_property_tax(),
            property_appreciation: default_property_appreciation(),
        }
    }
}
