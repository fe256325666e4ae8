//! Capital Allocation CLI
//!
//! Runs the full pipeline over a candidate CSV (or the built-in sample
//! set), prints the allocation table, and answers the canned executive
//! questions.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use capital_allocation::explain::{answer, format_crore, Question};
use capital_allocation::project::{load_projects, sample_projects};
use capital_allocation::{allocate_capital, AllocationConfig, AllocationResult, Forecast, Scenario};

#[derive(Parser, Debug)]
#[command(name = "capital_allocation", version, about = "Capital allocation advisor")]
struct Args {
    /// Macroeconomic scenario applied to the forecast
    #[arg(long, value_enum, default_value = "base")]
    scenario: Scenario,

    /// Total capital budget
    #[arg(long, default_value_t = 100.0)]
    budget: f64,

    /// Discount rate (WACC) used for NPV
    #[arg(long, default_value_t = 0.11)]
    discount_rate: f64,

    /// Apply the strategic raw-risk penalty to composite scores
    #[arg(long)]
    risk_penalty: bool,

    /// Forecast baseline revenue
    #[arg(long, default_value_t = 50.0)]
    revenue: f64,

    /// Forecast baseline operating cost
    #[arg(long, default_value_t = 30.0)]
    cost: f64,

    /// Candidate CSV (Project_ID, Industry, Initial_Investment, Project_Life,
    /// Strategic_Priority); defaults to the built-in sample set
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the allocation table to this CSV path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let projects = match &args.input {
        Some(path) => load_projects(path)
            .map_err(|e| anyhow!("failed to load candidates from {}: {}", path.display(), e))?,
        None => sample_projects(),
    };

    let config = AllocationConfig {
        scenario: args.scenario,
        discount_rate: args.discount_rate,
        budget: args.budget,
        apply_risk_penalty: args.risk_penalty,
    };
    let forecast = Forecast::new(args.revenue, args.cost);

    let result = allocate_capital(&projects, forecast, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&result, &config);
    }

    if let Some(path) = &args.output {
        write_csv(&result, path).with_context(|| format!("writing {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn print_table(result: &AllocationResult, config: &AllocationConfig) {
    println!("Capital Allocation Advisor v0.1.0");
    println!("=================================\n");
    println!(
        "Scenario: {}   WACC: {:.2}%   Budget: {}   Risk penalty: {}\n",
        config.scenario.as_str(),
        config.discount_rate * 100.0,
        format_crore(config.budget),
        if config.apply_risk_penalty { "on" } else { "off" },
    );

    println!(
        "{:<6} {:>10} {:>12} {:>8} {:>8} {:>8} {:>8} {:>10}",
        "ID", "Invest", "NPV", "IRR", "Payback", "Risk", "Score", "Decision"
    );
    println!("{}", "-".repeat(78));

    for row in &result.rows {
        println!(
            "{:<6} {:>10.2} {:>12.2} {:>8} {:>8} {:>8} {:>8.4} {:>10}",
            row.id,
            row.investment,
            row.npv,
            row.irr.map_or("undef".to_string(), |r| format!("{:.2}%", r * 100.0)),
            row.payback.as_display(),
            row.risk.map_or("undef".to_string(), |r| format!("{:.3}", r)),
            row.score,
            row.decision.as_str(),
        );
    }

    println!("\nSummary:");
    println!("  Funded projects: {}", result.funded().count());
    println!("  Capital spent:   {}", format_crore(result.spent));
    println!("  Remaining:       {}", format_crore(result.remaining));

    println!("\nExecutive Q&A:");
    for question in Question::all() {
        println!("\nQ: {}", question.prompt());
        println!("A: {}", answer(question, result));
    }
}

fn write_csv(result: &AllocationResult, path: &PathBuf) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Project_ID,Initial_Investment,NPV,IRR,Payback,Risk,NPV_n,IRR_n,Payback_n,Risk_n,Score,Decision"
    )?;

    for row in &result.rows {
        writeln!(
            file,
            "{},{:.4},{:.6},{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{}",
            row.id,
            row.investment,
            row.npv,
            row.irr.map_or("undefined".to_string(), |r| format!("{:.6}", r)),
            row.payback.as_display(),
            row.risk.map_or("undefined".to_string(), |r| format!("{:.6}", r)),
            row.npv_n,
            row.irr_n,
            row.payback_n,
            row.risk_n,
            row.score,
            row.decision.as_str(),
        )?;
    }

    Ok(())
}
