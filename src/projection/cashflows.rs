//! Annual cash-flow projection from a scenario-adjusted forecast
//!
//! The model compounds the net margin forward at a fixed annual growth
//! rate; there is no per-year variation beyond the compounding term.

/// Fixed annual growth rate applied to the net margin
pub const GROWTH_RATE: f64 = 0.04;

/// Project annual net cash flows over the project lifetime
///
/// Year i (1-indexed) receives `(revenue - cost) * (1 + GROWTH_RATE)^i`.
/// A negative margin produces negative cash flows for every year; they
/// propagate unclamped so downstream metrics see the loss. A lifetime of
/// zero yields an empty series.
pub fn project_cashflows(revenue: f64, cost: f64, lifetime: u32) -> Vec<f64> {
    let margin = revenue - cost;
    (1..=lifetime)
        .map(|year| margin * (1.0 + GROWTH_RATE).powi(year as i32))
        .collect()
}
