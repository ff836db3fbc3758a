use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{monthly_rate, whole_periods, MONTHS_PER_YEAR};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Years,
};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpInput {
    pub corpus: Money,
    pub monthly_withdrawal: Money,
    pub annual_rate_pct: Percent,
    pub years: Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpPoint {
    pub month: u32,
    pub withdrawal: Money,
    pub interest: Money,
    pub balance: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwpResult {
    /// Months the corpus lasted; below `years * 12` when it ran out.
    pub months_survived: u32,
    pub total_withdrawn: Money,
    pub total_interest: Money,
    pub ending_balance: Money,
    pub series: Vec<SwpPoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Systematic withdrawal plan. Each month interest accrues on the balance
/// first, then the withdrawal (capped at the balance) is taken. The run stops
/// early once the corpus is exhausted.
pub fn calculate_swp(
    corpus: Money,
    monthly_withdrawal: Money,
    annual_rate_pct: Percent,
    years: Years,
) -> SwpResult {
    let n = whole_periods(years, MONTHS_PER_YEAR);
    if corpus <= Decimal::ZERO || n == 0 {
        return SwpResult::default();
    }

    let i = monthly_rate(annual_rate_pct);
    let requested = monthly_withdrawal.max(Decimal::ZERO);

    let mut series = Vec::with_capacity(n as usize);
    let mut balance = corpus;
    let mut total_withdrawn = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=n {
        if balance <= Decimal::ZERO {
            break;
        }
        let Some(interest) = balance.checked_mul(i) else {
            return SwpResult::default();
        };
        let Some(grown) = balance.checked_add(interest) else {
            return SwpResult::default();
        };
        let withdrawal = requested.min(grown);
        balance = grown - withdrawal;

        total_withdrawn += withdrawal;
        total_interest += interest;
        series.push(SwpPoint {
            month,
            withdrawal,
            interest,
            balance,
        });
    }

    SwpResult {
        months_survived: series.len() as u32,
        total_withdrawn,
        total_interest,
        ending_balance: balance,
        series,
    }
}

pub fn evaluate_swp(input: &SwpInput) -> FinCalcResult<ComputationOutput<SwpResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "corpus", input.corpus);
    negative_rate_warning(&mut warnings, "monthly_withdrawal", input.monthly_withdrawal);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    let n = whole_periods(input.years, MONTHS_PER_YEAR);
    if n == 0 {
        warnings.push("years must cover at least one month; returning zero result".into());
    }

    let result = calculate_swp(
        input.corpus,
        input.monthly_withdrawal,
        input.annual_rate_pct,
        input.years,
    );

    if n > 0 && !result.series.is_empty() && result.months_survived < n {
        warnings.push(format!(
            "Corpus exhausted after {} of {} months",
            result.months_survived, n
        ));
    }

    Ok(with_metadata(
        "Systematic withdrawal plan (interest then withdrawal, stops on depletion)",
        &serde_json::json!({
            "corpus": input.corpus.to_string(),
            "monthly_withdrawal": input.monthly_withdrawal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_swp_sustainable() {
        // 1% monthly on 10L = 10k interest, withdrawing 8k leaves the corpus growing
        let result = calculate_swp(dec!(1_000_000), dec!(8_000), dec!(12), dec!(10));
        assert_eq!(result.months_survived, 120);
        assert!(result.ending_balance > dec!(1_000_000));
        assert_eq!(result.total_withdrawn, dec!(960_000));
    }

    #[test]
    fn test_swp_depletes_early() {
        let result = calculate_swp(dec!(100_000), dec!(10_000), Decimal::ZERO, dec!(2));
        assert_eq!(result.months_survived, 10);
        assert_eq!(result.ending_balance, Decimal::ZERO);
        assert_eq!(result.total_withdrawn, dec!(100_000));
        assert_eq!(result.series.len(), 10);
    }

    #[test]
    fn test_final_withdrawal_is_capped() {
        let result = calculate_swp(dec!(25_000), dec!(10_000), Decimal::ZERO, dec!(1));
        assert_eq!(result.months_survived, 3);
        assert_eq!(result.series[2].withdrawal, dec!(5_000));
        assert_eq!(result.ending_balance, Decimal::ZERO);
    }

    #[test]
    fn test_interest_accrues_before_withdrawal() {
        let result = calculate_swp(dec!(100_000), dec!(1_000), dec!(12), dec!(1));
        let first = &result.series[0];
        assert_eq!(first.interest, dec!(1_000));
        assert_eq!(first.balance, dec!(100_000));
    }

    #[test]
    fn test_swp_zero_inputs() {
        assert_eq!(calculate_swp(Decimal::ZERO, dec!(1000), dec!(8), dec!(5)), SwpResult::default());
        assert_eq!(calculate_swp(dec!(1000), dec!(100), dec!(8), Decimal::ZERO), SwpResult::default());
    }

    #[test]
    fn test_evaluate_swp_warns_on_depletion() {
        let out = evaluate_swp(&SwpInput {
            corpus: dec!(100_000),
            monthly_withdrawal: dec!(10_000),
            annual_rate_pct: Decimal::ZERO,
            years: dec!(2),
        })
        .unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("exhausted after 10 of 24")));
    }
}
