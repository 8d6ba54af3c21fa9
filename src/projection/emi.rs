//! Equal monthly installment (EMI) for a fully amortizing loan

/// Constant monthly installment that retires `principal` over `months`
/// payments at `monthly_rate` (decimal, e.g. 0.006875).
///
/// A zero rate falls back to straight-line repayment. No rounding is
/// applied here so the amortization schedule keeps full precision.
pub fn calculate_emi(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }

    if monthly_rate == 0.0 {
        return principal / months as f64;
    }

    let growth = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_emi() {
        // 26.2M over 20 years at 8.25%
        let emi = calculate_emi(26_200_000.0, 0.0825 / 12.0, 240);

        assert!(emi > 222_000.0 && emi < 226_000.0, "EMI out of range: {}", emi);
        assert_relative_eq!(emi, 223_241.2009054487, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_interest_is_straight_line() {
        let emi = calculate_emi(1_200_000.0, 0.0, 12);
        assert_eq!(emi, 100_000.0);
        assert_relative_eq!(emi * 12.0, 1_200_000.0, epsilon = f64::EPSILON * 1_200_000.0);
    }

    #[test]
    fn test_single_payment_covers_one_month_interest() {
        let emi = calculate_emi(1_000.0, 0.01, 1);
        assert_relative_eq!(emi, 1_010.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_principal() {
        assert_eq!(calculate_emi(0.0, 0.005, 120), 0.0);
        assert_eq!(calculate_emi(0.0, 0.0, 120), 0.0);
    }

    #[test]
    fn test_higher_rate_higher_emi() {
        let low = calculate_emi(500_000.0, 0.05 / 12.0, 360);
        let high = calculate_emi(500_000.0, 0.07 / 12.0, 360);
        assert!(high > low);
    }
}
