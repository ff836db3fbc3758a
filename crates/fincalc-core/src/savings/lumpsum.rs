use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{compound, periodic_rate, whole_periods};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Years,
};
use crate::FinCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpsumInput {
    pub principal: Money,
    pub annual_rate_pct: Percent,
    pub years: Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumPoint {
    pub year: u32,
    pub invested: Money,
    pub value: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LumpsumResult {
    pub maturity: Money,
    pub total_invested: Money,
    pub gains: Money,
    pub series: Vec<LumpsumPoint>,
}

/// One-time investment compounded annually for `floor(years)` years.
pub fn calculate_lumpsum(principal: Money, annual_rate_pct: Percent, years: Years) -> LumpsumResult {
    let n = whole_periods(years, 1);
    if principal <= Decimal::ZERO || n == 0 {
        return LumpsumResult::default();
    }

    let i = periodic_rate(annual_rate_pct, 1);
    let Some(maturity) = compound(i, n).and_then(|g| principal.checked_mul(g)) else {
        return LumpsumResult::default();
    };

    let growth = Decimal::ONE + i;
    let mut series = Vec::with_capacity(n as usize);
    let mut value = principal;
    for year in 1..=n {
        let Some(next) = value.checked_mul(growth) else {
            return LumpsumResult::default();
        };
        value = next;
        series.push(LumpsumPoint {
            year,
            invested: principal,
            value,
        });
    }

    LumpsumResult {
        maturity,
        total_invested: principal,
        gains: maturity - principal,
        series,
    }
}

pub fn evaluate_lumpsum(input: &LumpsumInput) -> FinCalcResult<ComputationOutput<LumpsumResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "principal", input.principal);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    let whole_years = whole_periods(input.years, 1);
    if whole_years == 0 {
        warnings.push("years must be >= 1; returning zero result".into());
    } else if input.years.fract() > Decimal::ZERO {
        warnings.push(format!(
            "fractional tenure {} compounded annually over {} whole years",
            input.years, whole_years
        ));
    }

    let result = calculate_lumpsum(input.principal, input.annual_rate_pct, input.years);

    Ok(with_metadata(
        "Lumpsum future value (annual compounding)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
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
    fn test_lumpsum_doubles_at_rule_of_72() {
        // 100k at 12% for 6 years ≈ 1.9738x
        let result = calculate_lumpsum(dec!(100_000), dec!(12), dec!(6));
        assert!((result.maturity - dec!(197_382.27)).abs() < dec!(0.01));
        assert_eq!(result.series.len(), 6);
        assert_eq!(result.series.last().unwrap().value, result.maturity);
        assert_eq!(result.gains, result.maturity - dec!(100_000));
    }

    #[test]
    fn test_fractional_years_floor() {
        let result = calculate_lumpsum(dec!(1000), dec!(10), dec!(2.7));
        assert_eq!(result.series.len(), 2);
        assert_eq!(result.maturity, dec!(1210));
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(calculate_lumpsum(Decimal::ZERO, dec!(10), dec!(5)), LumpsumResult::default());
        assert_eq!(calculate_lumpsum(dec!(1000), dec!(10), dec!(0.5)), LumpsumResult::default());
    }

    #[test]
    fn test_evaluate_warns_on_dropped_months() {
        let out = evaluate_lumpsum(&LumpsumInput {
            principal: dec!(1000),
            annual_rate_pct: dec!(10),
            years: dec!(2.9),
        })
        .unwrap();
        assert_eq!(out.result.series.len(), 2);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("2 whole years"));

        let whole = evaluate_lumpsum(&LumpsumInput {
            principal: dec!(1000),
            annual_rate_pct: dec!(10),
            years: dec!(3),
        })
        .unwrap();
        assert!(whole.warnings.is_empty());
    }

    #[test]
    fn test_overflowing_growth_gives_zero_result() {
        assert_eq!(
            calculate_lumpsum(dec!(1e27), dec!(100), dec!(10)),
            LumpsumResult::default()
        );
    }
}
