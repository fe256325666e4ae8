//! Greedy budget allocation over the scored candidate set
//!
//! Projects are taken in descending score order (stable, so equal scores
//! keep first-seen input order) and funded whenever the remaining budget
//! covers the full investment. A project that does not fit is skipped
//! permanently, even if a cheaper lower-ranked one would still fit later.
//! This is rank-greedy by construction, not bin-packing optimal; it keeps
//! the funding order explainable.

use serde::{Deserialize, Serialize};

use super::scoring::ScoredProject;
use crate::project::Priority;
use crate::projection::{MetricSet, Payback};

/// Funding decision for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Funded,
    Rejected,
}

impl Decision {
    pub fn is_funded(&self) -> bool {
        matches!(self, Decision::Funded)
    }

    /// Display name matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Funded => "Funded",
            Decision::Rejected => "Rejected",
        }
    }
}

/// One output row of the allocation table, in original input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRow {
    pub id: String,
    pub investment: f64,
    pub industry: Option<String>,
    pub priority: Option<Priority>,

    // Raw metrics
    pub npv: f64,
    pub irr: Option<f64>,
    pub payback: Payback,
    pub risk: Option<f64>,

    // Normalized metrics and composite score
    pub npv_n: f64,
    pub irr_n: f64,
    pub payback_n: f64,
    pub risk_n: f64,
    pub score: f64,

    pub decision: Decision,
}

impl AllocationRow {
    fn from_scored(scored: ScoredProject, decision: Decision) -> Self {
        let ScoredProject {
            project,
            metrics: MetricSet { npv, irr, payback, risk },
            npv_n,
            irr_n,
            payback_n,
            risk_n,
            score,
        } = scored;

        Self {
            id: project.id,
            investment: project.investment,
            industry: project.industry,
            priority: project.priority,
            npv,
            irr,
            payback,
            risk,
            npv_n,
            irr_n,
            payback_n,
            risk_n,
            score,
            decision,
        }
    }
}

/// Complete result of one allocation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    /// All candidates in original input order, each Funded or Rejected
    pub rows: Vec<AllocationRow>,

    /// Budget the run was filled against
    pub budget: f64,

    /// Total investment across funded projects
    pub spent: f64,

    /// budget - spent
    pub remaining: f64,
}

impl AllocationResult {
    /// Funded rows in input order
    pub fn funded(&self) -> impl Iterator<Item = &AllocationRow> {
        self.rows.iter().filter(|r| r.decision.is_funded())
    }

    /// Rejected rows in input order
    pub fn rejected(&self) -> impl Iterator<Item = &AllocationRow> {
        self.rows.iter().filter(|r| !r.decision.is_funded())
    }

    /// Row with the highest raw risk, ignoring undefined-risk projects
    pub fn highest_risk(&self) -> Option<&AllocationRow> {
        self.rows
            .iter()
            .filter(|r| r.risk.is_some())
            .max_by(|a, b| a.risk.unwrap_or(f64::NEG_INFINITY).total_cmp(&b.risk.unwrap_or(f64::NEG_INFINITY)))
    }

    /// Row with the highest NPV
    pub fn highest_npv(&self) -> Option<&AllocationRow> {
        self.rows.iter().max_by(|a, b| a.npv.total_cmp(&b.npv))
    }
}

/// Fill the budget greedily by descending score
pub fn allocate(scored: Vec<ScoredProject>, budget: f64) -> AllocationResult {
    // Stable sort keeps first-seen input order for equal scores, which makes
    // the allocation deterministic and reproducible
    let mut order: Vec<usize> = (0..scored.len()).collect();
    order.sort_by(|&a, &b| scored[b].score.total_cmp(&scored[a].score));

    let mut decisions = vec![Decision::Rejected; scored.len()];
    let mut spent = 0.0;
    for &idx in &order {
        let investment = scored[idx].project.investment;
        if spent + investment <= budget {
            spent += investment;
            decisions[idx] = Decision::Funded;
        }
    }

    let rows = scored
        .into_iter()
        .zip(decisions)
        .map(|(sp, decision)| AllocationRow::from_scored(sp, decision))
        .collect();

    AllocationResult {
        rows,
        budget,
        spent,
        remaining: budget - spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;
    use approx::assert_relative_eq;

    fn scored(id: &str, investment: f64, score: f64) -> ScoredProject {
        ScoredProject {
            project: Project::new(id, investment, 5),
            metrics: MetricSet {
                npv: score * 100.0,
                irr: Some(0.1),
                payback: Payback::Years(3),
                risk: Some(score / 2.0),
            },
            npv_n: 0.5,
            irr_n: 0.5,
            payback_n: 0.5,
            risk_n: 0.5,
            score,
        }
    }

    #[test]
    fn test_partial_budget_fill() {
        // P3 ranks first (15 fits), P1 second (35 fits), P2 third (60 > 40)
        let candidates = vec![
            scored("P1", 20.0, 0.7),
            scored("P2", 25.0, 0.5),
            scored("P3", 15.0, 0.9),
        ];

        let result = allocate(candidates, 40.0);
        assert_relative_eq!(result.spent, 35.0);
        assert_relative_eq!(result.remaining, 5.0);

        assert_eq!(result.rows[0].decision, Decision::Funded);
        assert_eq!(result.rows[1].decision, Decision::Rejected);
        assert_eq!(result.rows[2].decision, Decision::Funded);
    }

    #[test]
    fn test_rows_keep_input_order_and_partition() {
        let candidates = vec![
            scored("A", 10.0, 0.2),
            scored("B", 10.0, 0.9),
            scored("C", 10.0, 0.4),
        ];
        let result = allocate(candidates, 15.0);

        let ids: Vec<&str> = result.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);

        let funded = result.funded().count();
        let rejected = result.rejected().count();
        assert_eq!(funded + rejected, result.rows.len());

        let funded_total: f64 = result.funded().map(|r| r.investment).sum();
        assert_relative_eq!(funded_total, result.spent);
        assert!(result.spent <= result.budget);
    }

    #[test]
    fn test_equal_scores_break_ties_on_input_order() {
        // Budget covers exactly one: the first-seen project wins
        let candidates = vec![
            scored("First", 10.0, 0.5),
            scored("Second", 10.0, 0.5),
            scored("Third", 10.0, 0.5),
        ];
        let result = allocate(candidates, 10.0);

        assert_eq!(result.rows[0].decision, Decision::Funded);
        assert_eq!(result.rows[1].decision, Decision::Rejected);
        assert_eq!(result.rows[2].decision, Decision::Rejected);
    }

    #[test]
    fn test_no_backtracking() {
        // The top-ranked project consumes most of the budget, the second
        // does not fit and is skipped permanently, the third still fits
        let candidates = vec![
            scored("Big", 30.0, 0.9),
            scored("TooBig", 20.0, 0.8),
            scored("Small", 10.0, 0.1),
        ];
        let result = allocate(candidates, 40.0);

        assert_eq!(result.rows[0].decision, Decision::Funded);
        assert_eq!(result.rows[1].decision, Decision::Rejected);
        assert_eq!(result.rows[2].decision, Decision::Funded);
        assert_relative_eq!(result.spent, 40.0);
        assert_relative_eq!(result.remaining, 0.0);
    }

    #[test]
    fn test_nothing_fits() {
        let result = allocate(vec![scored("P1", 50.0, 0.9)], 40.0);
        assert_eq!(result.rows[0].decision, Decision::Rejected);
        assert_relative_eq!(result.spent, 0.0);
        assert_relative_eq!(result.remaining, 40.0);
    }

    #[test]
    fn test_result_helpers() {
        let candidates = vec![
            scored("P1", 10.0, 0.8),
            scored("P2", 10.0, 0.2),
        ];
        let result = allocate(candidates, 10.0);

        assert_eq!(result.highest_npv().unwrap().id, "P1");
        assert_eq!(result.highest_risk().unwrap().id, "P1");
        assert_eq!(result.funded().next().unwrap().id, "P1");
        assert_eq!(result.rejected().next().unwrap().id, "P2");
    }
}
