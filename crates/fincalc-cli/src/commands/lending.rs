use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::lending::emi::{self, EmiInput};

use crate::input;

/// Arguments for an EMI calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Tenure in months
    #[arg(long)]
    pub months: Option<u32>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = input::resolve(args.input.as_deref(), || {
        Ok(EmiInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            months: args.months.ok_or("--months is required (or provide --input)")?,
        })
    })?;
    let result = emi::evaluate_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}
