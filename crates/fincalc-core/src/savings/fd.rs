use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{compound, periodic_rate, whole_periods};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Years,
};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How often interest is credited to a fixed deposit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundingFrequency {
    Monthly,
    #[default]
    Quarterly,
    HalfYearly,
    Yearly,
}

impl CompoundingFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Yearly => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdInput {
    pub principal: Money,
    pub annual_rate_pct: Percent,
    pub years: Years,
    #[serde(default)]
    pub frequency: CompoundingFrequency,
}

/// Deposit value at the end of a year (or at maturity for the final,
/// possibly partial, year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdPoint {
    pub year: u32,
    pub invested: Money,
    pub value: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FdResult {
    pub maturity: Money,
    pub total_invested: Money,
    pub interest_earned: Money,
    pub series: Vec<FdPoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Fixed deposit maturity with compounding every `1/m` years, sampled yearly.
pub fn calculate_fd(
    principal: Money,
    annual_rate_pct: Percent,
    years: Years,
    frequency: CompoundingFrequency,
) -> FdResult {
    let m = frequency.periods_per_year();
    let n = whole_periods(years, m);
    if principal <= Decimal::ZERO || n == 0 {
        return FdResult::default();
    }

    let i = periodic_rate(annual_rate_pct, m);
    let Some(maturity) = compound(i, n).and_then(|g| principal.checked_mul(g)) else {
        return FdResult::default();
    };

    let sample_years = years.ceil().to_u32().unwrap_or(0);
    let mut series = Vec::with_capacity(sample_years as usize);
    for year in 1..=sample_years {
        let elapsed = n.min(year.saturating_mul(m));
        let value = compound(i, elapsed)
            .and_then(|g| principal.checked_mul(g))
            .unwrap_or(maturity);
        series.push(FdPoint {
            year,
            invested: principal,
            value,
        });
    }

    FdResult {
        maturity,
        total_invested: principal,
        interest_earned: maturity - principal,
        series,
    }
}

pub fn evaluate_fd(input: &FdInput) -> FinCalcResult<ComputationOutput<FdResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "principal", input.principal);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    if whole_periods(input.years, input.frequency.periods_per_year()) == 0 {
        warnings.push("tenure is shorter than one compounding period; returning zero result".into());
    }

    let result = calculate_fd(
        input.principal,
        input.annual_rate_pct,
        input.years,
        input.frequency,
    );

    Ok(with_metadata(
        "Fixed deposit (periodic compounding, yearly sampling)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
            "frequency": input.frequency,
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
