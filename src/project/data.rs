//! Candidate project data structures
//!
//! Industry and strategic priority are display metadata only; the scoring
//! model never reads them.

use serde::{Deserialize, Serialize};

/// Strategic priority label assigned by the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Get the string representation matching the candidate CSV format
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// A candidate investment project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: String,

    /// Initial investment outlay (currency units, year 0)
    pub investment: f64,

    /// Project lifetime in years
    pub lifetime: u32,

    /// Industry label (display only)
    #[serde(default)]
    pub industry: Option<String>,

    /// Strategic priority (display only)
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl Project {
    /// Create a project with required fields only
    pub fn new(id: impl Into<String>, investment: f64, lifetime: u32) -> Self {
        Self {
            id: id.into(),
            investment,
            lifetime,
            industry: None,
            priority: None,
        }
    }

    /// Create a project with display metadata
    pub fn with_metadata(
        id: impl Into<String>,
        investment: f64,
        lifetime: u32,
        industry: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            investment,
            lifetime,
            industry: Some(industry.into()),
            priority: Some(priority),
        }
    }
}

/// Forecasted baseline financials supplied by the forecasting collaborator
///
/// The core treats these as opaque scalars; how they were produced
/// (regression, trend model, analyst input) is outside this crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Forecast {
    /// Baseline annual revenue (currency units)
    pub revenue: f64,

    /// Baseline annual operating cost (currency units)
    pub cost: f64,
}

impl Forecast {
    pub fn new(revenue: f64, cost: f64) -> Self {
        Self { revenue, cost }
    }

    /// Baseline forecast used by the demo dataset
    pub fn sample() -> Self {
        Self {
            revenue: 50.0,
            cost: 30.0,
        }
    }
}

/// The six-project demo candidate set used by the CLI and tests
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::with_metadata("P1", 20.0, 5, "Energy", Priority::High),
        Project::with_metadata("P2", 25.0, 6, "FinTech", Priority::High),
        Project::with_metadata("P3", 15.0, 4, "Healthcare", Priority::Medium),
        Project::with_metadata("P4", 30.0, 7, "Manufacturing", Priority::Medium),
        Project::with_metadata("P5", 18.0, 5, "Retail", Priority::Low),
        Project::with_metadata("P6", 22.0, 6, "AI", Priority::High),
    ]
}
