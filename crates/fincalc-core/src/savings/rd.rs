use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::savings::sip::{level_contribution_series, SipPoint};
use crate::time_value::{fv_annuity_due, monthly_rate, whole_periods, MONTHS_PER_YEAR};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Years,
};
use crate::FinCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdInput {
    pub monthly_deposit: Money,
    pub annual_rate_pct: Percent,
    pub years: Years,
}

/// Recurring deposits accumulate exactly like a SIP.
pub type RdPoint = SipPoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RdResult {
    pub maturity: Money,
    pub total_invested: Money,
    pub interest_earned: Money,
    pub series: Vec<RdPoint>,
}

/// Recurring deposit with monthly instalments and monthly compounding.
pub fn calculate_rd(monthly_deposit: Money, annual_rate_pct: Percent, years: Years) -> RdResult {
    let n = whole_periods(years, MONTHS_PER_YEAR);
    if monthly_deposit <= Decimal::ZERO || n == 0 {
        return RdResult::default();
    }

    let i = monthly_rate(annual_rate_pct);
    let Some(maturity) = fv_annuity_due(monthly_deposit, i, n) else {
        return RdResult::default();
    };
    let Some(total_invested) = monthly_deposit.checked_mul(Decimal::from(n)) else {
        return RdResult::default();
    };
    let Some(series) = level_contribution_series(monthly_deposit, i, n) else {
        return RdResult::default();
    };

    RdResult {
        maturity,
        total_invested,
        interest_earned: maturity - total_invested,
        series,
    }
}

pub fn evaluate_rd(input: &RdInput) -> FinCalcResult<ComputationOutput<RdResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "monthly_deposit", input.monthly_deposit);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    if whole_periods(input.years, MONTHS_PER_YEAR) == 0 {
        warnings.push("years must cover at least one month; returning zero result".into());
    }

    let result = calculate_rd(input.monthly_deposit, input.annual_rate_pct, input.years);

    Ok(with_metadata(
        "Recurring deposit (monthly instalments, monthly compounding)",
        &serde_json::json!({
            "monthly_deposit": input.monthly_deposit.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}
