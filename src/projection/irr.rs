//! Internal Rate of Return (IRR) calculation
//!
//! Used to express the owner's equity cashflows as a single annual return

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;

/// Rate search bounds (per period)
const MIN_RATE: f64 = -0.99;
const MAX_RATE: f64 = 10.0;

/// IRR of periodic cashflows, annualized over `periods_per_year`
///
/// `cashflows[0]` is at time zero. Solves with Newton-Raphson and falls back
/// to bisection when the derivative vanishes or iteration fails to converge.
/// Returns `None` when the flows never change sign or no root is bracketed.
pub fn calculate_irr(cashflows: &[f64], periods_per_year: u32) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    if cashflows.iter().all(|cf| cf.abs() < TOLERANCE) {
        return Some(0.0);
    }

    let has_inflow = cashflows.iter().any(|&cf| cf > TOLERANCE);
    let has_outflow = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    if !has_inflow || !has_outflow {
        return None;
    }

    let annualize = |rate: f64| (1.0 + rate).powi(periods_per_year as i32) - 1.0;

    let mut rate = 0.05 / periods_per_year as f64;
    for _ in 0..MAX_ITERATIONS {
        let (npv, slope) = npv_with_slope(cashflows, rate);
        if slope.abs() < 1e-20 {
            break;
        }

        let next = (rate - npv / slope).clamp(MIN_RATE, MAX_RATE);
        if (next - rate).abs() < TOLERANCE {
            return Some(annualize(next));
        }
        rate = next;
    }

    bisect(cashflows).map(annualize)
}

/// NPV at `rate` and its derivative with respect to `rate`
fn npv_with_slope(cashflows: &[f64], rate: f64) -> (f64, f64) {
    cashflows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(npv, slope), (t, &cf)| {
            let discount = (1.0 + rate).powi(t as i32);
            (npv + cf / discount, slope - t as f64 * cf / (discount * (1.0 + rate)))
        })
}

fn npv(cashflows: &[f64], rate: f64) -> f64 {
    npv_with_slope(cashflows, rate).0
}

/// Periodic rate by bisection over the search bounds
fn bisect(cashflows: &[f64]) -> Option<f64> {
    let mut low = MIN_RATE;
    let mut high = MAX_RATE;
    let mut npv_low = npv(cashflows, low);

    if npv_low * npv(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv(cashflows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_period_return() {
        let irr = calculate_irr(&[-1000.0, 1100.0], 1).unwrap();
        assert!((irr - 0.10).abs() < 1e-8, "Expected 10% IRR, got {}", irr);
    }

    #[test]
    fn test_monthly_annualized() {
        let mut cashflows = vec![-1000.0];
        cashflows.extend(vec![0.0; 11]);
        cashflows.push(1100.0);

        let irr = calculate_irr(&cashflows, 12).unwrap();
        assert!((irr - 0.10).abs() < 1e-6, "Expected ~10% IRR, got {}", irr);
    }

    #[test]
    fn test_no_sign_change() {
        assert_eq!(calculate_irr(&[100.0, 100.0], 1), None);
        assert_eq!(calculate_irr(&[-100.0, -5.0], 1), None);
        assert_eq!(calculate_irr(&[], 1), None);
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(calculate_irr(&[0.0, 0.0, 0.0], 1), Some(0.0));
    }

    #[test]
    fn test_level_annuity() {
        // 3-year annuity of 402.11 on 1000 at 10%
        let irr = calculate_irr(&[-1000.0, 402.11, 402.11, 402.11], 1).unwrap();
        assert!((irr - 0.10).abs() < 1e-4, "got {}", irr);
    }
}
