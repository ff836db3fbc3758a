use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{
    annuity_due_factor, compound_years, monthly_rate, pv, whole_periods, MONTHS_PER_YEAR,
};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
    Years,
};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    /// Cost of the goal in today's money.
    pub goal_today: Money,
    pub years: Years,
    pub inflation_pct: Percent,
    pub annual_return_pct: Percent,
}

/// Corpus that must already be invested at the end of `month` to reach the
/// goal on schedule without further contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPoint {
    pub month: u32,
    pub required_corpus: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub inflated_goal: Money,
    pub required_sip: Money,
    pub required_lumpsum: Money,
    pub total_sip_invested: Money,
    pub series: Vec<GoalPoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Solve for the monthly SIP (annuity due) or the lumpsum needed today to
/// fund an inflation-adjusted goal.
pub fn calculate_goal(
    goal_today: Money,
    years: Years,
    inflation_pct: Percent,
    annual_return_pct: Percent,
) -> GoalResult {
    let n = whole_periods(years, MONTHS_PER_YEAR);
    if goal_today <= Decimal::ZERO || n == 0 {
        return GoalResult::default();
    }

    let inflation = inflation_pct.max(Decimal::ZERO) / dec!(100);
    let i = monthly_rate(annual_return_pct);

    let Some(inflated_goal) = compound_years(inflation, years).and_then(|g| goal_today.checked_mul(g))
    else {
        return GoalResult::default();
    };
    let Some(factor) = annuity_due_factor(i, n) else {
        return GoalResult::default();
    };
    let Some(required_lumpsum) = pv(i, n, inflated_goal) else {
        return GoalResult::default();
    };
    let required_sip = inflated_goal / factor;

    // Walk back from the goal month, discounting one period at a time.
    let mut series = Vec::with_capacity(n as usize);
    let mut required_corpus = inflated_goal;
    for month in (1..=n).rev() {
        series.push(GoalPoint {
            month,
            required_corpus,
        });
        required_corpus /= Decimal::ONE + i;
    }
    series.reverse();

    GoalResult {
        inflated_goal,
        required_sip,
        required_lumpsum,
        total_sip_invested: required_sip * Decimal::from(n),
        series,
    }
}

pub fn evaluate_goal(input: &GoalInput) -> FinCalcResult<ComputationOutput<GoalResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "goal_today", input.goal_today);
    negative_rate_warning(&mut warnings, "inflation_pct", input.inflation_pct);
    negative_rate_warning(&mut warnings, "annual_return_pct", input.annual_return_pct);
    if whole_periods(input.years, MONTHS_PER_YEAR) == 0 {
        warnings.push("years must cover at least one month; returning zero result".into());
    }

    let result = calculate_goal(
        input.goal_today,
        input.years,
        input.inflation_pct,
        input.annual_return_pct,
    );

    Ok(with_metadata(
        "Goal planner (inflated target, inverted SIP annuity due, present value)",
        &serde_json::json!({
            "goal_today": input.goal_today.to_string(),
            "years": input.years.to_string(),
            "inflation_pct": input.inflation_pct.to_string(),
            "annual_return_pct": input.annual_return_pct.to_string(),
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
    use crate::time_value::{compound, fv_annuity_due};

    #[test]
    fn test_inflation_applied_annually() {
        let result = calculate_goal(dec!(1_000_000), dec!(2), dec!(10), dec!(12));
        assert_eq!(result.inflated_goal, dec!(1_210_000));
    }

    #[test]
    fn test_required_sip_reaches_goal() {
        let result = calculate_goal(dec!(2_000_000), dec!(10), dec!(6), dec!(12));
        let reached = fv_annuity_due(result.required_sip, dec!(0.01), 120).unwrap();
        assert!((reached - result.inflated_goal).abs() < dec!(0.001));
    }

    #[test]
    fn test_required_lumpsum_reaches_goal() {
        let result = calculate_goal(dec!(2_000_000), dec!(10), dec!(6), dec!(12));
        let reached = result.required_lumpsum * compound(dec!(0.01), 120).unwrap();
        assert!((reached - result.inflated_goal).abs() < dec!(0.001));
    }

    #[test]
    fn test_series_ends_at_goal() {
        let result = calculate_goal(dec!(500_000), dec!(3), dec!(5), dec!(9));
        assert_eq!(result.series.len(), 36);
        assert_eq!(result.series[0].month, 1);
        let last = result.series.last().unwrap();
        assert_eq!(last.month, 36);
        assert_eq!(last.required_corpus, result.inflated_goal);
        assert!(result.series.windows(2).all(|w| w[0].required_corpus <= w[1].required_corpus));
    }

    #[test]
    fn test_zero_return_spreads_evenly() {
        let result = calculate_goal(dec!(120_000), dec!(1), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(result.required_sip, dec!(10_000));
        assert_eq!(result.required_lumpsum, dec!(120_000));
    }

    #[test]
    fn test_goal_zero_inputs() {
        assert_eq!(calculate_goal(Decimal::ZERO, dec!(5), dec!(6), dec!(12)), GoalResult::default());
        assert_eq!(calculate_goal(dec!(1000), Decimal::ZERO, dec!(6), dec!(12)), GoalResult::default());
    }
}
