//! Input validation run before any projection stage

use super::LoanInputs;
use thiserror::Error;

/// Longest loan tenure accepted, in years
pub const MAX_LOAN_TENURE: u32 = 100;

/// Reason a set of inputs was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("down payment exceeds price")]
    DownPaymentExceedsPrice,

    #[error("inputs must be positive/non-negative as specified")]
    NotPositive,

    #[error("inputs must be finite numbers")]
    NotFinite,

    #[error("loan tenure must not exceed 100 years")]
    TenureTooLong,
}

impl ValidationError {
    /// Human-readable reason shown to the caller
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Check inputs in rule order; the first failing rule wins
pub fn validate(inputs: &LoanInputs) -> Result<(), ValidationError> {
    if inputs.down_payment > inputs.price {
        return Err(ValidationError::DownPaymentExceedsPrice);
    }

    if inputs.price <= 0.0
        || inputs.down_payment < 0.0
        || inputs.loan_tenure == 0
        || inputs.monthly_rent < 0.0
    {
        return Err(ValidationError::NotPositive);
    }

    let numbers = [
        inputs.price,
        inputs.down_payment,
        inputs.interest_rate,
        inputs.monthly_rent,
        inputs.rent_escalation,
        inputs.property_tax,
        inputs.property_appreciation,
    ];
    if numbers.iter().any(|v| !v.is_finite()) {
        return Err(ValidationError::NotFinite);
    }

    if inputs.loan_tenure > MAX_LOAN_TENURE {
        return Err(ValidationError::TenureTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_valid() {
        assert_eq!(validate(&LoanInputs::default()), Ok(()));
    }

    #[test]
    fn test_down_payment_exceeds_price() {
        let inputs = LoanInputs {
            price: 5_000_000.0,
            down_payment: 6_000_000.0,
            ..Default::default()
        };

        let err = validate(&inputs).unwrap_err();
        assert_eq!(err, ValidationError::DownPaymentExceedsPrice);
        assert_eq!(err.reason(), "down payment exceeds price");
    }

    #[test]
    fn test_down_payment_rule_checked_first() {
        // Negative price with a larger down payment fails on the first rule
        let inputs = LoanInputs {
            price: -1.0,
            down_payment: 0.0,
            ..Default::default()
        };
        assert_eq!(validate(&inputs), Err(ValidationError::DownPaymentExceedsPrice));
    }

    #[test]
    fn test_non_positive_inputs() {
        let cases = [
            LoanInputs { price: 0.0, down_payment: 0.0, ..Default::default() },
            LoanInputs { down_payment: -1.0, ..Default::default() },
            LoanInputs { loan_tenure: 0, ..Default::default() },
            LoanInputs { monthly_rent: -10.0, ..Default::default() },
        ];

        for inputs in &cases {
            let err = validate(inputs).unwrap_err();
            assert_eq!(err, ValidationError::NotPositive, "inputs: {:?}", inputs);
            assert_eq!(err.to_string(), "inputs must be positive/non-negative as specified");
        }
    }

    #[test]
    fn test_full_cash_purchase_valid() {
        let inputs = LoanInputs {
            down_payment: 31_200_000.0,
            ..Default::default()
        };
        assert!(validate(&inputs).is_ok());
    }

    #[test]
    fn test_negative_growth_rates_allowed() {
        let inputs = LoanInputs {
            rent_escalation: -2.0,
            property_appreciation: -3.5,
            ..Default::default()
        };
        assert!(validate(&inputs).is_ok());
    }

    #[test]
    fn test_nan_rejected() {
        let inputs = LoanInputs {
            interest_rate: f64::NAN,
            ..Default::default()
        };
        assert_eq!(validate(&inputs), Err(ValidationError::NotFinite));
    }

    #[test]
    fn test_tenure_upper_bound() {
        let longest = LoanInputs { loan_tenure: MAX_LOAN_TENURE, ..Default::default() };
        assert!(validate(&longest).is_ok());

        for tenure in [MAX_LOAN_TENURE + 1, 357_913_942, u32::MAX] {
            let inputs = LoanInputs { loan_tenure: tenure, ..Default::default() };
            let err = validate(&inputs).unwrap_err();
            assert_eq!(err, ValidationError::TenureTooLong);
            assert_eq!(err.to_string(), "loan tenure must not exceed 100 years");
        }
    }

    #[test]
    fn test_tenure_bound_checked_after_earlier_rules() {
        let inputs = LoanInputs {
            price: 5_000_000.0,
            down_payment: 6_000_000.0,
            loan_tenure: u32::MAX,
            ..Default::default()
        };
        assert_eq!(validate(&inputs), Err(ValidationError::DownPaymentExceedsPrice));
    }
}
