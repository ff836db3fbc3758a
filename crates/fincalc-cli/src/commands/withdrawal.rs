use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::withdrawal::swp::{self, SwpInput};

use crate::input;

/// Arguments for a systematic withdrawal plan
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SwpArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting corpus
    #[arg(long)]
    pub corpus: Option<Decimal>,

    /// Amount withdrawn each month
    #[arg(long, alias = "withdrawal")]
    pub monthly_withdrawal: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Planned withdrawal horizon in years
    #[arg(long)]
    pub years: Option<Decimal>,
}

pub fn run_swp(args: SwpArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let swp_input: SwpInput = input::resolve(args.input.as_deref(), || {
        Ok(SwpInput {
            corpus: args.corpus.ok_or("--corpus is required (or provide --input)")?,
            monthly_withdrawal: args
                .monthly_withdrawal
                .ok_or("--monthly-withdrawal is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = swp::evaluate_swp(&swp_input)?;
    Ok(serde_json::to_value(result)?)
}
