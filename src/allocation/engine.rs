//! Pipeline orchestration for one allocation run
//!
//! scenario shock -> cash-flow projection -> metrics (per project) ->
//! scoring (whole set) -> greedy budget fill.
//!
//! Scoring normalizes against the whole candidate set, so the metrics
//! phase is a barrier: every MetricSet is materialized before any score is
//! computed. Metrics are independent per project and run as a parallel
//! map; order is preserved when collecting, so the output is identical to
//! the sequential pipeline.

use log::debug;
use rayon::prelude::*;

use super::allocator::{allocate, AllocationResult};
use super::scoring::score_projects;
use crate::error::AllocationError;
use crate::project::{Forecast, Project};
use crate::projection::{project_cashflows, MetricSet};
use crate::scenario::Scenario;

/// Configuration for an allocation run
#[derive(Debug, Clone, Copy)]
pub struct AllocationConfig {
    /// Macroeconomic scenario applied to the forecast
    pub scenario: Scenario,

    /// Discount rate (WACC) used for NPV
    pub discount_rate: f64,

    /// Total capital budget to fill
    pub budget: f64,

    /// Whether to apply the strategic raw-risk penalty multiplier
    pub apply_risk_penalty: bool,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::Base,
            discount_rate: 0.11,
            budget: 100.0,
            apply_risk_penalty: false,
        }
    }
}

/// Allocation engine holding a fixed configuration
///
/// # Example
/// ```
/// use capital_allocation::{AllocationConfig, AllocationEngine, Forecast};
/// use capital_allocation::project::sample_projects;
///
/// let engine = AllocationEngine::new(AllocationConfig::default());
/// let result = engine.run(&sample_projects(), Forecast::sample()).unwrap();
/// assert!(result.spent <= result.budget);
/// ```
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    config: AllocationConfig,
}

impl AllocationEngine {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Validate inputs before any computation
    fn validate(&self, projects: &[Project], forecast: Forecast) -> Result<(), AllocationError> {
        if projects.is_empty() {
            return Err(AllocationError::EmptyCandidateSet);
        }
        if self.config.budget <= 0.0 || !self.config.budget.is_finite() {
            return Err(AllocationError::InvalidBudget(self.config.budget));
        }
        if self.config.discount_rate <= -1.0 || !self.config.discount_rate.is_finite() {
            return Err(AllocationError::InvalidDiscountRate(self.config.discount_rate));
        }
        if forecast.revenue <= 0.0 || !forecast.revenue.is_finite() {
            return Err(AllocationError::InvalidForecast {
                field: "revenue",
                value: forecast.revenue,
            });
        }
        if forecast.cost <= 0.0 || !forecast.cost.is_finite() {
            return Err(AllocationError::InvalidForecast {
                field: "cost",
                value: forecast.cost,
            });
        }
        for project in projects {
            if project.investment <= 0.0 || !project.investment.is_finite() {
                return Err(AllocationError::InvalidInvestment {
                    id: project.id.clone(),
                    investment: project.investment,
                });
            }
            if project.lifetime == 0 {
                return Err(AllocationError::InvalidLifetime {
                    id: project.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Run the full pipeline over a fresh candidate-set snapshot
    pub fn run(&self, projects: &[Project], forecast: Forecast) -> Result<AllocationResult, AllocationError> {
        self.validate(projects, forecast)?;

        let (revenue, cost) = self.config.scenario.apply(forecast.revenue, forecast.cost);
        debug!(
            "scenario {}: revenue {:.2} -> {:.2}, cost {:.2} -> {:.2}",
            self.config.scenario.as_str(),
            forecast.revenue,
            revenue,
            forecast.cost,
            cost
        );

        // Metrics phase: independent per project, deterministic parallel map
        let candidates: Vec<(Project, MetricSet)> = projects
            .par_iter()
            .map(|project| {
                let cashflows = project_cashflows(revenue, cost, project.lifetime);
                let metrics = MetricSet::compute(&cashflows, project.investment, self.config.discount_rate);
                (project.clone(), metrics)
            })
            .collect();

        // Scoring barrier: needs every MetricSet before normalizing
        let scored = score_projects(&candidates, self.config.apply_risk_penalty);

        debug!(
            "scored {} candidates, filling budget {:.2}",
            scored.len(),
            self.config.budget
        );
        Ok(allocate(scored, self.config.budget))
    }
}

/// Run one allocation with the given configuration
///
/// This is the crate's primary entry point; `AllocationEngine` is the
/// reusable form for running several scenarios over the same candidates.
pub fn allocate_capital(
    projects: &[Project],
    forecast: Forecast,
    config: &AllocationConfig,
) -> Result<AllocationResult, AllocationError> {
    AllocationEngine::new(*config).run(projects, forecast)
}
