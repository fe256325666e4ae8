//! Capital Allocation Engine - scores candidate investment projects and fills a fixed budget
//!
//! This library provides:
//! - Deterministic scenario shocks on forecasted revenue/cost
//! - Growth-compounded annual cash-flow projection per project
//! - Financial metrics (NPV, IRR, payback period, cash-flow volatility risk)
//! - Population-relative min-max scoring across the candidate set
//! - Greedy budget allocation with Funded/Rejected decisions
//! - Canned executive explanations over the allocation result

pub mod allocation;
pub mod error;
pub mod explain;
pub mod project;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use allocation::{
    allocate_capital, AllocationConfig, AllocationEngine, AllocationResult, AllocationRow, Decision,
};
pub use error::AllocationError;
pub use project::{Forecast, Project};
pub use projection::{MetricSet, Payback};
pub use scenario::Scenario;
