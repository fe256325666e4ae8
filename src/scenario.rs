//! Macroeconomic scenario shocks on forecasted revenue and cost
//!
//! Shocks are deterministic multiplicative adjustments applied before any
//! cash flows are projected. Parsing is total: an unrecognized scenario
//! name falls back to the base case so the pipeline never fails on input
//! spelling.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Named macroeconomic scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Scenario {
    /// No adjustment; forecast passes through unchanged
    #[default]
    Base,
    /// Revenue +15%
    Best,
    /// Revenue -20%, cost +10%
    Worst,
}

impl Scenario {
    /// Parse a scenario name, falling back to `Base` for anything unrecognized
    pub fn parse(name: &str) -> Self {
        match name {
            "Best" => Scenario::Best,
            "Worst" => Scenario::Worst,
            _ => Scenario::Base,
        }
    }

    /// Apply the scenario shock to a (revenue, cost) pair
    pub fn apply(&self, revenue: f64, cost: f64) -> (f64, f64) {
        match self {
            Scenario::Base => (revenue, cost),
            Scenario::Best => (revenue * 1.15, cost),
            Scenario::Worst => (revenue * 0.80, cost * 1.10),
        }
    }

    /// Display name matching the CLI and serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Base => "Base",
            Scenario::Best => "Best",
            Scenario::Worst => "Worst",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_best_case_shock() {
        let (revenue, cost) = Scenario::Best.apply(150.0, 85.0);
        assert_relative_eq!(revenue, 172.5, epsilon = 1e-10);
        assert_relative_eq!(cost, 85.0, epsilon = 1e-10);
    }

    #[test]
    fn test_worst_case_shock() {
        let (revenue, cost) = Scenario::Worst.apply(150.0, 85.0);
        assert_relative_eq!(revenue, 120.0, epsilon = 1e-10);
        assert_relative_eq!(cost, 93.5, epsilon = 1e-10);
    }

    #[test]
    fn test_base_is_identity() {
        let (revenue, cost) = Scenario::Base.apply(150.0, 85.0);
        assert_relative_eq!(revenue, 150.0);
        assert_relative_eq!(cost, 85.0);
    }

    #[test]
    fn test_monotonicity() {
        let (base_rev, base_cost) = (200.0, 120.0);

        let (best_rev, best_cost) = Scenario::Best.apply(base_rev, base_cost);
        assert!(best_rev >= base_rev);
        assert_relative_eq!(best_cost, base_cost);

        let (worst_rev, worst_cost) = Scenario::Worst.apply(base_rev, base_cost);
        assert!(worst_rev <= base_rev);
        assert!(worst_cost >= base_cost);
    }

    #[test]
    fn test_unrecognized_name_falls_back_to_base() {
        assert_eq!(Scenario::parse("Best"), Scenario::Best);
        assert_eq!(Scenario::parse("Worst"), Scenario::Worst);
        assert_eq!(Scenario::parse("Base"), Scenario::Base);
        assert_eq!(Scenario::parse("Stagflation"), Scenario::Base);
        assert_eq!(Scenario::parse(""), Scenario::Base);
    }
}
