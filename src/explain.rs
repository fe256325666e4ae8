//! Canned executive explanations over an allocation result
//!
//! A fixed rule table keyed by question identifier: table lookups and
//! max/min selections over the result rows, no language understanding and
//! no feedback into the core.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationResult;

/// The fixed set of supported questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Question {
    /// Which projects were selected for funding?
    SelectedProjects,
    /// Which projects were rejected due to budget constraints?
    RejectedProjects,
    /// Which project carries the highest risk?
    HighestRisk,
    /// Which project creates the highest value (NPV)?
    HighestNpv,
    /// What is the overall capital allocation recommendation?
    Recommendation,
}

impl Question {
    /// All questions in presentation order
    pub fn all() -> [Question; 5] {
        [
            Question::SelectedProjects,
            Question::RejectedProjects,
            Question::HighestRisk,
            Question::HighestNpv,
            Question::Recommendation,
        ]
    }

    /// The question text shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::SelectedProjects => "Which projects were selected for funding?",
            Question::RejectedProjects => "Which projects were rejected due to budget constraints?",
            Question::HighestRisk => "Which project carries the highest risk?",
            Question::HighestNpv => "Which project creates the highest value (NPV)?",
            Question::Recommendation => "What is the overall capital allocation recommendation?",
        }
    }
}

/// Format a currency amount for display in ₹ Crore
pub fn format_crore(value: f64) -> String {
    format!("₹ {:.2} Cr", value)
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = ids.collect();
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined.join(", ")
    }
}

/// Answer one canned question from the allocation result
pub fn answer(question: Question, result: &AllocationResult) -> String {
    match question {
        Question::SelectedProjects => format!(
            "The following projects were selected for funding based on their strong \
             risk-adjusted returns and capital efficiency: {}",
            join_ids(result.funded().map(|r| r.id.as_str()))
        ),
        Question::RejectedProjects => format!(
            "The following projects were not funded due to limited capital availability, \
             despite having potential long-term value: {}",
            join_ids(result.rejected().map(|r| r.id.as_str()))
        ),
        Question::HighestRisk => match result.highest_risk() {
            Some(row) => format!(
                "Project {} has the highest risk, measured by cash-flow volatility \
                 relative to expected returns.",
                row.id
            ),
            None => "No project has a defined risk measure in this run.".to_string(),
        },
        Question::HighestNpv => match result.highest_npv() {
            Some(row) => format!(
                "Project {} generates the highest Net Present Value, indicating strong \
                 long-term value creation.",
                row.id
            ),
            None => "No projects were evaluated in this run.".to_string(),
        },
        Question::Recommendation => "The system recommends prioritizing projects that maximize \
             risk-adjusted value within the available capital budget. High-return, lower-risk \
             projects are funded first, while lower-ranked projects are deferred due to capital \
             constraints."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{allocate, score_projects};
    use crate::project::Project;
    use crate::projection::{MetricSet, Payback};

    fn result() -> AllocationResult {
        let candidates = vec![
            (
                Project::new("P1", 20.0, 5),
                MetricSet {
                    npv: 80.0,
                    irr: Some(0.3),
                    payback: Payback::Years(2),
                    risk: Some(0.1),
                },
            ),
            (
                Project::new("P2", 90.0, 6),
                MetricSet {
                    npv: 120.0,
                    irr: Some(0.2),
                    payback: Payback::Years(3),
                    risk: Some(0.4),
                },
            ),
        ];
        let scored = score_projects(&candidates, false);
        allocate(scored, 50.0)
    }

    #[test]
    fn test_selected_and_rejected_lists() {
        let result = result();
        let selected = answer(Question::SelectedProjects, &result);
        assert!(selected.contains("P1"));
        assert!(!selected.contains("P2"));

        let rejected = answer(Question::RejectedProjects, &result);
        assert!(rejected.contains("P2"));
    }

    #[test]
    fn test_superlative_selections() {
        let result = result();
        assert!(answer(Question::HighestRisk, &result).contains("P2"));
        assert!(answer(Question::HighestNpv, &result).contains("P2"));
    }

    #[test]
    fn test_format_crore() {
        assert_eq!(format_crore(1234.5), "₹ 1234.50 Cr");
        assert_eq!(format_crore(-3.125), "₹ -3.12 Cr");
    }

    #[test]
    fn test_every_question_has_an_answer() {
        let result = result();
        for question in Question::all() {
            assert!(!answer(question, &result).is_empty());
            assert!(!question.prompt().is_empty());
        }
    }
}
