use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::savings::fd::{self, CompoundingFrequency, FdInput};
use fincalc_core::savings::lumpsum::{self, LumpsumInput};
use fincalc_core::savings::nps::{self, NpsInput};
use fincalc_core::savings::ppf::{self, PpfInput};
use fincalc_core::savings::rd::{self, RdInput};
use fincalc_core::savings::sip::{self, SipInput};
use fincalc_core::savings::step_up_sip::{self, StepUpSipInput};

use crate::input;

/// Arguments for a lumpsum projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LumpsumArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount invested today
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FrequencyArg {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl From<FrequencyArg> for CompoundingFrequency {
    fn from(f: FrequencyArg) -> Self {
        match f {
            FrequencyArg::Monthly => CompoundingFrequency::Monthly,
            FrequencyArg::Quarterly => CompoundingFrequency::Quarterly,
            FrequencyArg::HalfYearly => CompoundingFrequency::HalfYearly,
            FrequencyArg::Yearly => CompoundingFrequency::Yearly,
        }
    }
}

/// Arguments for a fixed deposit
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FdArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Deposit amount
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Tenure in years (fractions allowed)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Compounding frequency
    #[arg(long, value_enum, default_value = "quarterly")]
    pub frequency: FrequencyArg,
}

/// Arguments for a SIP projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SipArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly investment
    #[arg(long, alias = "monthly")]
    pub monthly_investment: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<Decimal>,
}

/// Arguments for a step-up SIP projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct StepUpSipArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting monthly investment
    #[arg(long, alias = "monthly")]
    pub base_monthly: Option<Decimal>,

    /// Yearly increase of the monthly investment in percent
    #[arg(long, alias = "step-up")]
    pub step_up_pct: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<Decimal>,
}

/// Arguments for a recurring deposit
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RdArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly instalment
    #[arg(long, alias = "monthly")]
    pub monthly_deposit: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<Decimal>,
}

/// Arguments for a PPF projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PpfArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Deposit made at the start of each year
    #[arg(long, alias = "yearly")]
    pub yearly_investment: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<Decimal>,
}

/// Arguments for an NPS projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct NpsArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly contribution
    #[arg(long, alias = "monthly")]
    pub monthly_contribution: Option<Decimal>,

    /// Expected annual return before retirement in percent
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Years until retirement
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Annual annuity yield after retirement in percent
    #[arg(long, alias = "annuity-rate")]
    pub annuity_rate_pct: Option<Decimal>,
}

pub fn run_lumpsum(args: LumpsumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ls_input: LumpsumInput = input::resolve(args.input.as_deref(), || {
        Ok(LumpsumInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = lumpsum::evaluate_lumpsum(&ls_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_fd(args: FdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fd_input: FdInput = input::resolve(args.input.as_deref(), || {
        Ok(FdInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
            frequency: args.frequency.into(),
        })
    })?;
    let result = fd::evaluate_fd(&fd_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = input::resolve(args.input.as_deref(), || {
        Ok(SipInput {
            monthly_investment: args
                .monthly_investment
                .ok_or("--monthly-investment is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = sip::evaluate_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_step_up_sip(args: StepUpSipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let su_input: StepUpSipInput = input::resolve(args.input.as_deref(), || {
        Ok(StepUpSipInput {
            base_monthly: args
                .base_monthly
                .ok_or("--base-monthly is required (or provide --input)")?,
            step_up_pct: args.step_up_pct.unwrap_or(Decimal::ZERO),
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = step_up_sip::evaluate_step_up_sip(&su_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_rd(args: RdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rd_input: RdInput = input::resolve(args.input.as_deref(), || {
        Ok(RdInput {
            monthly_deposit: args
                .monthly_deposit
                .ok_or("--monthly-deposit is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = rd::evaluate_rd(&rd_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_ppf(args: PpfArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ppf_input: PpfInput = input::resolve(args.input.as_deref(), || {
        Ok(PpfInput {
            yearly_investment: args
                .yearly_investment
                .ok_or("--yearly-investment is required (or provide --input)")?,
            annual_rate_pct: args
                .annual_rate_pct
                .ok_or("--annual-rate-pct is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = ppf::evaluate_ppf(&ppf_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_nps(args: NpsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let nps_input: NpsInput = input::resolve(args.input.as_deref(), || {
        Ok(NpsInput {
            monthly_contribution: args
                .monthly_contribution
                .ok_or("--monthly-contribution is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate_pct.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
            annuity_rate_pct: args.annuity_rate_pct.unwrap_or(Decimal::ZERO),
        })
    })?;
    let result = nps::evaluate_nps(&nps_input)?;
    Ok(serde_json::to_value(result)?)
}
