//! Input validation errors for an allocation run
//!
//! These are fatal to the single request, never to the process. Undefined
//! per-project metrics (IRR with no root, risk with zero mean) are not
//! errors; they are represented as `None` / `Payback::Never` and handled
//! inside the scoring engine.

use thiserror::Error;

/// Errors returned by the allocation entry point before any computation runs
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Budget must be strictly positive
    #[error("budget must be positive, got {0}")]
    InvalidBudget(f64),

    /// Discount rate must keep 1 + r positive so discount factors exist
    #[error("discount rate must be greater than -1, got {0}")]
    InvalidDiscountRate(f64),

    /// Every candidate needs a strictly positive initial investment
    #[error("project {id}: initial investment must be positive, got {investment}")]
    InvalidInvestment { id: String, investment: f64 },

    /// Cash-flow-dependent metrics need at least one projection year
    #[error("project {id}: lifetime must be at least one year")]
    InvalidLifetime { id: String },

    /// Forecast scalars come from the forecasting collaborator and must be positive
    #[error("forecast {field} must be positive, got {value}")]
    InvalidForecast { field: &'static str, value: f64 },

    /// An allocation over zero candidates has no meaningful result
    #[error("candidate set is empty")]
    EmptyCandidateSet,
}
