use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::planning::goal::{self, GoalInput};

use crate::input;

/// Arguments for goal planning
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct GoalArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Cost of the goal in today's money
    #[arg(long, alias = "goal")]
    pub goal_today: Option<Decimal>,

    /// Years until the goal
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Expected inflation in percent
    #[arg(long, alias = "inflation")]
    pub inflation_pct: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long, alias = "rate")]
    pub annual_return_pct: Option<Decimal>,
}

pub fn run_goal(args: GoalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let goal_input: GoalInput = input::resolve(args.input.as_deref(), || {
        Ok(GoalInput {
            goal_today: args
                .goal_today
                .ok_or("--goal-today is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            inflation_pct: args.inflation_pct.unwrap_or(Decimal::ZERO),
            annual_return_pct: args.annual_return_pct.unwrap_or(Decimal::ZERO),
        })
    })?;
    let result = goal::evaluate_goal(&goal_input)?;
    Ok(serde_json::to_value(result)?)
}
