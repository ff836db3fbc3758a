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
pub struct NpsInput {
    pub monthly_contribution: Money,
    pub annual_rate_pct: Percent,
    /// Years until retirement.
    pub years: Years,
    /// Annual yield assumed for the post-retirement annuity, in percent.
    pub annuity_rate_pct: Percent,
}

pub type NpsPoint = SipPoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpsResult {
    pub corpus: Money,
    pub total_invested: Money,
    pub gains: Money,
    /// Monthly pension if the whole corpus earns `annuity_rate_pct`.
    pub estimated_pension: Money,
    pub series: Vec<NpsPoint>,
}

/// National Pension System accumulation. The pension figure is a simple
/// monthly-yield approximation (`corpus * annuity_rate / 12`), not an
/// annuity price.
pub fn calculate_nps(
    monthly_contribution: Money,
    annual_rate_pct: Percent,
    years: Years,
    annuity_rate_pct: Percent,
) -> NpsResult {
    let n = whole_periods(years, MONTHS_PER_YEAR);
    if monthly_contribution <= Decimal::ZERO || n == 0 {
        return NpsResult::default();
    }

    let i = monthly_rate(annual_rate_pct);
    let Some(corpus) = fv_annuity_due(monthly_contribution, i, n) else {
        return NpsResult::default();
    };
    let Some(total_invested) = monthly_contribution.checked_mul(Decimal::from(n)) else {
        return NpsResult::default();
    };
    let Some(series) = level_contribution_series(monthly_contribution, i, n) else {
        return NpsResult::default();
    };
    let Some(estimated_pension) = corpus.checked_mul(monthly_rate(annuity_rate_pct)) else {
        return NpsResult::default();
    };

    NpsResult {
        corpus,
        total_invested,
        gains: corpus - total_invested,
        estimated_pension,
        series,
    }
}

pub fn evaluate_nps(input: &NpsInput) -> FinCalcResult<ComputationOutput<NpsResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "monthly_contribution", input.monthly_contribution);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    negative_rate_warning(&mut warnings, "annuity_rate_pct", input.annuity_rate_pct);
    if whole_periods(input.years, MONTHS_PER_YEAR) == 0 {
        warnings.push("years must cover at least one month; returning zero result".into());
    }

    let result = calculate_nps(
        input.monthly_contribution,
        input.annual_rate_pct,
        input.years,
        input.annuity_rate_pct,
    );

    Ok(with_metadata(
        "NPS accumulation (annuity due) with monthly-yield pension estimate",
        &serde_json::json!({
            "monthly_contribution": input.monthly_contribution.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
            "annuity_rate_pct": input.annuity_rate_pct.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::sip::calculate_sip;
    use rust_decimal_macros::dec;

    #[test]
    fn test_nps_corpus_matches_sip() {
        let nps = calculate_nps(dec!(5000), dec!(10), dec!(30), dec!(6));
        let sip = calculate_sip(dec!(5000), dec!(10), dec!(30));
        assert_eq!(nps.corpus, sip.maturity);
        assert_eq!(nps.series.len(), 360);
    }

    #[test]
    fn test_nps_pension_estimate() {
        let nps = calculate_nps(dec!(5000), dec!(10), dec!(30), dec!(6));
        // 6% p.a. => 0.5% of the corpus per month
        assert_eq!(nps.estimated_pension, nps.corpus * dec!(0.005));
    }

    #[test]
    fn test_nps_zero_inputs() {
        assert_eq!(calculate_nps(Decimal::ZERO, dec!(10), dec!(30), dec!(6)), NpsResult::default());
        assert_eq!(calculate_nps(dec!(5000), dec!(10), Decimal::ZERO, dec!(6)), NpsResult::default());
    }

    #[test]
    fn test_overflowing_pension_gives_zero_result() {
        let nps = calculate_nps(dec!(1e25), Decimal::ZERO, dec!(1), dec!(1_000_000));
        assert_eq!(nps, NpsResult::default());
    }
}
