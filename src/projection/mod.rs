//! Cash-flow projection and per-project financial metrics

mod cashflows;
mod irr;
mod metrics;

pub use cashflows::{project_cashflows, GROWTH_RATE};
pub use irr::calculate_irr;
pub use metrics::{npv, payback, risk, MetricSet, Payback};
