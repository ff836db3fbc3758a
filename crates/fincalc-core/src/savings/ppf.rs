use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{fv_annuity_due, periodic_rate, whole_periods};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Years,
};
use crate::FinCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpfInput {
    pub yearly_investment: Money,
    pub annual_rate_pct: Percent,
    pub years: Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfPoint {
    pub year: u32,
    pub invested: Money,
    pub value: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PpfResult {
    pub maturity: Money,
    pub total_invested: Money,
    pub gains: Money,
    pub series: Vec<PpfPoint>,
}

/// Public Provident Fund: one deposit at the start of each financial year,
/// interest compounded yearly.
pub fn calculate_ppf(yearly_investment: Money, annual_rate_pct: Percent, years: Years) -> PpfResult {
    let n = whole_periods(years, 1);
    if yearly_investment <= Decimal::ZERO || n == 0 {
        return PpfResult::default();
    }

    let i = periodic_rate(annual_rate_pct, 1);
    let Some(maturity) = fv_annuity_due(yearly_investment, i, n) else {
        return PpfResult::default();
    };

    let growth = Decimal::ONE + i;
    let mut series = Vec::with_capacity(n as usize);
    let mut invested = Decimal::ZERO;
    let mut value = Decimal::ZERO;
    for year in 1..=n {
        let next = invested.checked_add(yearly_investment).zip(
            value
                .checked_add(yearly_investment)
                .and_then(|v| v.checked_mul(growth)),
        );
        let Some((next_invested, next_value)) = next else {
            return PpfResult::default();
        };
        invested = next_invested;
        value = next_value;
        series.push(PpfPoint {
            year,
            invested,
            value,
        });
    }

    PpfResult {
        maturity,
        total_invested: invested,
        gains: maturity - invested,
        series,
    }
}

pub fn evaluate_ppf(input: &PpfInput) -> FinCalcResult<ComputationOutput<PpfResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "yearly_investment", input.yearly_investment);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    if whole_periods(input.years, 1) == 0 {
        warnings.push("years must be >= 1; returning zero result".into());
    }

    let result = calculate_ppf(input.yearly_investment, input.annual_rate_pct, input.years);

    Ok(with_metadata(
        "PPF (yearly deposits, yearly compounding)",
        &serde_json::json!({
            "yearly_investment": input.yearly_investment.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}
