use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::tax::gst::{self, GstInput, GstMode};
use fincalc_core::tax::income_tax::{self, IncomeTaxInput};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GstModeArg {
    /// Amount excludes GST; tax is added on top
    Exclusive,
    /// Amount already includes GST; tax is extracted
    Inclusive,
}

impl From<GstModeArg> for GstMode {
    fn from(m: GstModeArg) -> Self {
        match m {
            GstModeArg::Exclusive => GstMode::Exclusive,
            GstModeArg::Inclusive => GstMode::Inclusive,
        }
    }
}

/// Arguments for a GST breakdown
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct GstArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Invoice amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// GST rate in percent (e.g. 5, 12, 18, 28)
    #[arg(long, alias = "rate")]
    pub rate_pct: Option<Decimal>,

    /// Whether the amount includes GST
    #[arg(long, value_enum, default_value = "exclusive")]
    pub mode: GstModeArg,
}

/// Arguments for income tax
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct IncomeTaxArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Gross annual income
    #[arg(long, alias = "income")]
    pub gross_income: Option<Decimal>,

    /// Total deductions (standard deduction, employer NPS, ...)
    #[arg(long)]
    pub deductions: Option<Decimal>,
}

pub fn run_gst(args: GstArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let gst_input: GstInput = input::resolve(args.input.as_deref(), || {
        Ok(GstInput {
            amount: args.amount.ok_or("--amount is required (or provide --input)")?,
            rate_pct: args.rate_pct.ok_or("--rate-pct is required (or provide --input)")?,
            mode: args.mode.into(),
        })
    })?;
    let result = gst::evaluate_gst(&gst_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_income_tax(args: IncomeTaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let it_input: IncomeTaxInput = input::resolve(args.input.as_deref(), || {
        Ok(IncomeTaxInput {
            gross_income: args
                .gross_income
                .ok_or("--gross-income is required (or provide --input)")?,
            deductions: args.deductions.unwrap_or(Decimal::ZERO),
        })
    })?;
    let result = income_tax::evaluate_income_tax(&it_input)?;
    Ok(serde_json::to_value(result)?)
}
