use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use fincalc_core::returns::xirr::{self, XirrInput};
use fincalc_core::CashFlow;

use crate::input;

/// Arguments for XIRR
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct XirrArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Dated cash flow as YYYY-MM-DD:amount (negative = investment). Repeatable.
    #[arg(long = "flow", value_parser = parse_flow)]
    pub flows: Vec<CashFlow>,

    /// Initial rate guess as a decimal (0.1 = 10%)
    #[arg(long)]
    pub guess: Option<Decimal>,

    /// Fail instead of returning the last estimate when the solve does not converge
    #[arg(long)]
    pub strict: bool,
}

fn parse_flow(s: &str) -> Result<CashFlow, String> {
    let (date, amount) = s
        .split_once(':')
        .ok_or_else(|| format!("expected YYYY-MM-DD:amount, got '{s}'"))?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{date}': {e}"))?;
    let amount =
        Decimal::from_str(amount.trim()).map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    Ok(CashFlow::new(date, amount))
}

pub fn run_xirr(args: XirrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let xirr_input: XirrInput = input::resolve(args.input.as_deref(), || {
        if args.flows.is_empty() {
            return Err("at least two --flow values are required (or provide --input)".into());
        }
        Ok(XirrInput {
            flows: args.flows.clone(),
            guess: args.guess,
            require_convergence: args.strict,
        })
    })?;
    let result = xirr::evaluate_xirr(&xirr_input)?;
    Ok(serde_json::to_value(result)?)
}
