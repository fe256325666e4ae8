//! Financial metrics for a single candidate project
//!
//! All four metrics are pure functions of the projected cash-flow series
//! and the initial investment. IRR and risk can be undefined for
//! degenerate series; that is signaled with `None` (and `Payback::Never`
//! for an unrecovered investment), never with NaN or infinity.

use serde::{Deserialize, Serialize};

use super::irr::calculate_irr;

/// Payback period: years until cumulative cash flow recovers the investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payback {
    /// Recovered within the project lifetime, at the end of this year
    Years(u32),
    /// Cumulative cash flow never reaches the investment
    Never,
}

impl Payback {
    /// Finite year count, if the investment is recovered
    pub fn years(&self) -> Option<u32> {
        match self {
            Payback::Years(y) => Some(*y),
            Payback::Never => None,
        }
    }

    /// Display form used in tables and CSV output
    pub fn as_display(&self) -> String {
        match self {
            Payback::Years(y) => y.to_string(),
            Payback::Never => "never".to_string(),
        }
    }
}

/// The four per-project metrics consumed by the scoring engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricSet {
    /// Net present value at the configured discount rate
    pub npv: f64,

    /// Internal rate of return; None when the series has no real root
    pub irr: Option<f64>,

    /// Payback period in years
    pub payback: Payback,

    /// Coefficient of variation of the cash flows; None when the mean is zero
    pub risk: Option<f64>,
}

impl MetricSet {
    /// Compute all four metrics for one project's cash-flow series
    pub fn compute(cashflows: &[f64], investment: f64, discount_rate: f64) -> Self {
        let mut series = Vec::with_capacity(cashflows.len() + 1);
        series.push(-investment);
        series.extend_from_slice(cashflows);

        Self {
            npv: npv(cashflows, investment, discount_rate),
            irr: calculate_irr(&series),
            payback: payback(cashflows, investment),
            risk: risk(cashflows),
        }
    }
}

/// Net present value: discounted cash flows minus the year-0 investment outflow
pub fn npv(cashflows: &[f64], investment: f64, rate: f64) -> f64 {
    let discounted: f64 = cashflows
        .iter()
        .enumerate()
        .map(|(i, &cf)| cf / (1.0 + rate).powi(i as i32 + 1))
        .sum();
    discounted - investment
}

/// Payback period: smallest year i with cumulative cash flow >= investment
pub fn payback(cashflows: &[f64], investment: f64) -> Payback {
    let mut cumulative = 0.0;
    for (i, &cf) in cashflows.iter().enumerate() {
        cumulative += cf;
        if cumulative >= investment {
            return Payback::Years(i as u32 + 1);
        }
    }
    Payback::Never
}

/// Risk proxy: population standard deviation of the cash flows divided by their mean
///
/// Returns None for an empty series or a mean of exactly zero.
pub fn risk(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    let n = cashflows.len() as f64;
    let mean = cashflows.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return None;
    }

    let variance = cashflows.iter().map(|&cf| (cf - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt() / mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_discounts_each_year() {
        // 100 in year 1, 100 in year 2, at 10%, against 150 invested
        let value = npv(&[100.0, 100.0], 150.0, 0.10);
        let expected = 100.0 / 1.1 + 100.0 / 1.21 - 150.0;
        assert_relative_eq!(value, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_npv_can_be_negative() {
        let value = npv(&[10.0, 10.0], 100.0, 0.11);
        assert!(value < 0.0);
    }

    #[test]
    fn test_npv_of_empty_series_is_minus_investment() {
        assert_relative_eq!(npv(&[], 40.0, 0.11), -40.0);
    }

    #[test]
    fn test_payback_two_year_recovery() {
        // cumulative: 10 after yr1, 20 after yr2 -> recovered in year 2
        assert_eq!(payback(&[10.0, 10.0, 10.0], 20.0), Payback::Years(2));
    }

    #[test]
    fn test_payback_never() {
        assert_eq!(payback(&[5.0, 5.0, 5.0], 100.0), Payback::Never);
        assert_eq!(payback(&[], 10.0), Payback::Never);
    }

    #[test]
    fn test_payback_first_year() {
        assert_eq!(payback(&[50.0, 10.0], 30.0), Payback::Years(1));
    }

    #[test]
    fn test_risk_coefficient_of_variation() {
        // mean 20, population std dev sqrt(((10-20)^2 + (30-20)^2)/2) = 10
        let cv = risk(&[10.0, 30.0]).unwrap();
        assert_relative_eq!(cv, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_risk_undefined_on_zero_mean_or_empty() {
        assert!(risk(&[-10.0, 10.0]).is_none());
        assert!(risk(&[]).is_none());
    }

    #[test]
    fn test_constant_series_has_zero_risk() {
        assert_relative_eq!(risk(&[25.0, 25.0, 25.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_metric_set_for_losing_project() {
        // All-negative cash flows: no IRR root, payback never, finite risk
        let metrics = MetricSet::compute(&[-10.0, -10.0], 50.0, 0.11);
        assert!(metrics.npv < -50.0);
        assert!(metrics.irr.is_none());
        assert_eq!(metrics.payback, Payback::Never);
        assert!(metrics.risk.is_some());
    }

    #[test]
    fn test_metric_set_for_healthy_project() {
        let metrics = MetricSet::compute(&[30.0, 31.2, 32.448], 50.0, 0.11);
        assert!(metrics.npv > 0.0);
        assert!(metrics.irr.unwrap() > 0.0);
        assert_eq!(metrics.payback, Payback::Years(2));
        let cv = metrics.risk.unwrap();
        assert!(cv > 0.0 && cv < 0.1);
    }
}
