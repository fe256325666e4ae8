//! Weighted multi-criteria scoring over the whole candidate set
//!
//! Normalization is population-relative: each metric column is min-max
//! rescaled to [0,1] across the current candidates, so the full metric set
//! must be materialized before any score exists. Scores are only
//! comparable within a single run.
//!
//! Weight vector (payback enters inverted since shorter is better):
//! - NPV      +0.40
//! - IRR      +0.25
//! - Risk     -0.20
//! - Payback  +0.15 on (1 - payback_n)

use log::warn;
use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::projection::MetricSet;

/// Weight on normalized NPV
pub const WEIGHT_NPV: f64 = 0.40;
/// Weight on normalized IRR
pub const WEIGHT_IRR: f64 = 0.25;
/// Weight subtracted on normalized risk
pub const WEIGHT_RISK: f64 = 0.20;
/// Weight on inverted normalized payback
pub const WEIGHT_PAYBACK: f64 = 0.15;

/// Strategic risk penalty coefficient, applied to *raw* risk when enabled
pub const RISK_PENALTY_FACTOR: f64 = 0.2;

/// Neutral normalized value for undefined metrics and zero-spread columns
const MIDPOINT: f64 = 0.5;

/// A candidate annotated with normalized metrics and its composite score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProject {
    pub project: Project,
    pub metrics: MetricSet,
    pub npv_n: f64,
    pub irr_n: f64,
    pub payback_n: f64,
    pub risk_n: f64,
    pub score: f64,
}

/// Min/max of the defined values in one metric column, if any are defined
fn column_range<I: Iterator<Item = Option<f64>>>(values: I) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for value in values.flatten() {
        range = Some(match range {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }
    range
}

/// Min-max normalize one value against its column range
///
/// Undefined values and zero-spread columns map to the neutral midpoint so
/// a single degenerate project or an all-tied column cannot poison the run.
fn normalize(value: Option<f64>, range: Option<(f64, f64)>, id: &str, column: &str) -> f64 {
    match (value, range) {
        (Some(v), Some((lo, hi))) if hi > lo => (v - lo) / (hi - lo),
        (Some(_), Some(_)) => MIDPOINT,
        _ => {
            warn!("project {}: {} undefined, substituting midpoint", id, column);
            MIDPOINT
        }
    }
}

/// Score the full candidate set
///
/// `apply_risk_penalty` enables the strategic penalty multiplier
/// `score *= 1 - RISK_PENALTY_FACTOR * raw_risk`; note this intentionally
/// uses the raw coefficient of variation, not the normalized column.
/// Projects with undefined risk take no penalty.
pub fn score_projects(candidates: &[(Project, MetricSet)], apply_risk_penalty: bool) -> Vec<ScoredProject> {
    let npv_range = column_range(candidates.iter().map(|(_, m)| Some(m.npv)));
    let irr_range = column_range(candidates.iter().map(|(_, m)| m.irr));
    let payback_range =
        column_range(candidates.iter().map(|(_, m)| m.payback.years().map(f64::from)));
    let risk_range = column_range(candidates.iter().map(|(_, m)| m.risk));

    candidates
        .iter()
        .map(|(project, metrics)| {
            let npv_n = normalize(Some(metrics.npv), npv_range, &project.id, "NPV");
            let irr_n = normalize(metrics.irr, irr_range, &project.id, "IRR");
            let payback_n = normalize(
                metrics.payback.years().map(f64::from),
                payback_range,
                &project.id,
                "payback",
            );
            let risk_n = normalize(metrics.risk, risk_range, &project.id, "risk");

            let mut score = WEIGHT_NPV * npv_n + WEIGHT_IRR * irr_n - WEIGHT_RISK * risk_n
                + WEIGHT_PAYBACK * (1.0 - payback_n);

            if apply_risk_penalty {
                score *= 1.0 - RISK_PENALTY_FACTOR * metrics.risk.unwrap_or(0.0);
            }

            ScoredProject {
                project: project.clone(),
                metrics: *metrics,
                npv_n,
                irr_n,
                payback_n,
                risk_n,
                score,
            }
        })
        .collect()
}
