use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{fv_annuity_due, monthly_rate, whole_periods, MONTHS_PER_YEAR};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Rate, Years,
};
use crate::FinCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: Money,
    pub annual_rate_pct: Percent,
    pub years: Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipPoint {
    pub month: u32,
    pub invested: Money,
    pub value: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub maturity: Money,
    pub total_invested: Money,
    pub gains: Money,
    pub series: Vec<SipPoint>,
}

/// Month-by-month growth of a level contribution made at the start of each
/// month: `value_t = (value_{t-1} + C) * (1 + i)`.
/// `None` on overflow. Shared with NPS and RD.
pub(crate) fn level_contribution_series(
    contribution: Money,
    i: Rate,
    n: u32,
) -> Option<Vec<SipPoint>> {
    let growth = Decimal::ONE.checked_add(i)?;
    let mut series = Vec::with_capacity(n as usize);
    let mut invested = Decimal::ZERO;
    let mut value = Decimal::ZERO;
    for month in 1..=n {
        invested = invested.checked_add(contribution)?;
        value = value.checked_add(contribution)?.checked_mul(growth)?;
        series.push(SipPoint {
            month,
            invested,
            value,
        });
    }
    Some(series)
}

/// Systematic investment plan: maturity from the annuity-due closed form,
/// with the iterative series retained for charting.
pub fn calculate_sip(monthly_investment: Money, annual_rate_pct: Percent, years: Years) -> SipResult {
    let n = whole_periods(years, MONTHS_PER_YEAR);
    if monthly_investment <= Decimal::ZERO || n == 0 {
        return SipResult::default();
    }

    let i = monthly_rate(annual_rate_pct);
    let Some(maturity) = fv_annuity_due(monthly_investment, i, n) else {
        return SipResult::default();
    };
    let Some(total_invested) = monthly_investment.checked_mul(Decimal::from(n)) else {
        return SipResult::default();
    };
    let Some(series) = level_contribution_series(monthly_investment, i, n) else {
        return SipResult::default();
    };

    SipResult {
        maturity,
        total_invested,
        gains: maturity - total_invested,
        series,
    }
}

pub fn evaluate_sip(input: &SipInput) -> FinCalcResult<ComputationOutput<SipResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "monthly_investment", input.monthly_investment);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    if whole_periods(input.years, MONTHS_PER_YEAR) == 0 {
        warnings.push("years must cover at least one month; returning zero result".into());
    }

    let result = calculate_sip(input.monthly_investment, input.annual_rate_pct, input.years);

    Ok(with_metadata(
        "SIP future value (annuity due, monthly compounding)",
        &serde_json::json!({
            "monthly_investment": input.monthly_investment.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sip_closed_form_matches_series() {
        let result = calculate_sip(dec!(10_000), dec!(12), dec!(10));
        assert_eq!(result.series.len(), 120);
        let last = result.series.last().unwrap().value;
        assert!((last - result.maturity).abs() < dec!(0.0001), "{last} vs {}", result.maturity);
        // Well-known figure: 10k/month at 12% for 10y ≈ 23.23 lakh
        assert!((result.maturity - dec!(2_323_390.76)).abs() < dec!(1));
    }

    #[test]
    fn test_sip_zero_rate() {
        let result = calculate_sip(dec!(500), Decimal::ZERO, dec!(1));
        assert_eq!(result.maturity, dec!(6000));
        assert_eq!(result.gains, Decimal::ZERO);
    }

    #[test]
    fn test_first_month_compounds_contribution() {
        let result = calculate_sip(dec!(1000), dec!(12), dec!(1));
        assert_eq!(result.series[0].value, dec!(1010));
        assert_eq!(result.series[0].invested, dec!(1000));
    }

    #[test]
    fn test_sip_zero_inputs() {
        assert_eq!(calculate_sip(Decimal::ZERO, dec!(12), dec!(10)), SipResult::default());
        assert_eq!(calculate_sip(dec!(1000), dec!(12), Decimal::ZERO), SipResult::default());
    }

    #[test]
    fn test_series_overflow_is_none() {
        assert!(level_contribution_series(Decimal::MAX, Decimal::ZERO, 2).is_none());
        assert_eq!(level_contribution_series(dec!(10), Decimal::ZERO, 3).map(|s| s.len()), Some(3));
    }
}
