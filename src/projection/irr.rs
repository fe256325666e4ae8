//! Internal Rate of Return (IRR) calculation
//!
//! Solves NPV(r) = 0 for the annual series [-investment, cf_1 .. cf_N]
//! using the Newton-Raphson method with a bisection fallback.

/// Calculate the Internal Rate of Return (IRR) for a series of annual cash flows.
///
/// # Arguments
/// * `cashflows` - Annual cash flows starting at year 0 (positive = inflow,
///   negative = outflow); the year-0 entry is normally the investment outlay
///
/// # Returns
/// * `Option<f64>` - Annual IRR as a decimal (e.g., 0.05 for 5%), or None if no solution found
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    // Handle edge cases
    if cashflows.is_empty() {
        return None;
    }

    // Check if all cashflows are zero
    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    // Check if there's at least one sign change (required for IRR to exist)
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None; // No sign change means no IRR
    }

    // Newton-Raphson iteration on the annual rate
    let mut rate = 0.05; // Initial guess: 5%
    let tolerance = 1e-10;
    let max_iterations = 1000;

    for _ in 0..max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            // Derivative too small, try bisection instead
            return calculate_irr_bisection(cashflows);
        }

        let new_rate = rate - npv / dnpv;

        // Bound the rate to reasonable values
        let new_rate = new_rate.clamp(-0.99, 10.0);

        if (new_rate - rate).abs() < tolerance {
            return Some(new_rate);
        }

        rate = new_rate;
    }

    // Newton-Raphson didn't converge, try bisection
    calculate_irr_bisection(cashflows)
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        npv += cf / discount;
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

/// Fallback IRR calculation using bisection method
fn calculate_irr_bisection(cashflows: &[f64]) -> Option<f64> {
    let mut low = -0.99_f64;
    let mut high = 10.0_f64;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    let npv_low = npv_at_rate(cashflows, low);
    let npv_high = npv_at_rate(cashflows, high);

    // Check that we have a root in this interval
    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if npv_mid * npv_at_rate(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

/// Calculate NPV at a given annual rate
fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}
