use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{monthly_rate, whole_periods, MONTHS_PER_YEAR};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Rate, Years,
};
use crate::FinCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpSipInput {
    pub base_monthly: Money,
    /// Yearly increase in the monthly contribution, in percent.
    pub step_up_pct: Percent,
    pub annual_rate_pct: Percent,
    pub years: Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepUpSipPoint {
    pub month: u32,
    pub contribution: Money,
    pub invested: Money,
    pub value: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepUpSipResult {
    pub maturity: Money,
    pub total_invested: Money,
    pub gains: Money,
    pub series: Vec<StepUpSipPoint>,
}

fn build_series(base: Money, step: Rate, i: Rate, n: u32) -> Option<Vec<StepUpSipPoint>> {
    let mut series = Vec::with_capacity(n as usize);
    let mut contribution = base;
    let mut invested = Decimal::ZERO;
    let mut value = Decimal::ZERO;
    for month in 1..=n {
        // Contribution steps up at months 13, 25, 37, ...
        if month > 1 && (month - 1) % MONTHS_PER_YEAR == 0 {
            contribution = contribution.checked_mul(Decimal::ONE + step)?;
        }
        invested = invested.checked_add(contribution)?;
        value = value
            .checked_add(contribution)?
            .checked_mul(Decimal::ONE + i)?;
        series.push(StepUpSipPoint {
            month,
            contribution,
            invested,
            value,
        });
    }
    Some(series)
}

/// SIP whose monthly contribution grows by `step_up_pct` once every 12 months:
/// `contribution(p) = base * (1 + s)^floor((p - 1) / 12)`.
pub fn calculate_step_up_sip(
    base_monthly: Money,
    step_up_pct: Percent,
    annual_rate_pct: Percent,
    years: Years,
) -> StepUpSipResult {
    let n = whole_periods(years, MONTHS_PER_YEAR);
    if base_monthly <= Decimal::ZERO || n == 0 {
        return StepUpSipResult::default();
    }

    let step = step_up_pct.max(Decimal::ZERO) / dec!(100);
    let i = monthly_rate(annual_rate_pct);
    let Some(series) = build_series(base_monthly, step, i, n) else {
        return StepUpSipResult::default();
    };

    let (maturity, total_invested) = series
        .last()
        .map(|p| (p.value, p.invested))
        .unwrap_or_default();

    StepUpSipResult {
        maturity,
        total_invested,
        gains: maturity - total_invested,
        series,
    }
}

pub fn evaluate_step_up_sip(
    input: &StepUpSipInput,
) -> FinCalcResult<ComputationOutput<StepUpSipResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "base_monthly", input.base_monthly);
    negative_rate_warning(&mut warnings, "step_up_pct", input.step_up_pct);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    if whole_periods(input.years, MONTHS_PER_YEAR) == 0 {
        warnings.push("years must cover at least one month; returning zero result".into());
    }

    let result = calculate_step_up_sip(
        input.base_monthly,
        input.step_up_pct,
        input.annual_rate_pct,
        input.years,
    );

    Ok(with_metadata(
        "Step-up SIP (annual contribution increase, monthly compounding)",
        &serde_json::json!({
            "base_monthly": input.base_monthly.to_string(),
            "step_up_pct": input.step_up_pct.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}
