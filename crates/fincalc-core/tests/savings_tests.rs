use fincalc_core::savings::fd::{self, CompoundingFrequency, FdResult};
use fincalc_core::savings::lumpsum::{self, LumpsumResult};
use fincalc_core::savings::nps::{self, NpsResult};
use fincalc_core::savings::ppf::{self, PpfResult};
use fincalc_core::savings::rd::{self, RdResult};
use fincalc_core::savings::sip::{self, SipInput, SipResult};
use fincalc_core::savings::step_up_sip::{self, StepUpSipResult};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// SIP monotonicity
// ===========================================================================

#[test]
fn test_sip_maturity_at_least_invested() {
    for rate in [dec!(0), dec!(6), dec!(12), dec!(18)] {
        for years in [dec!(1), dec!(5), dec!(20)] {
            let r = sip::calculate_sip(dec!(2500), rate, years);
            assert!(r.maturity >= r.total_invested);
            assert_eq!(Decimal::from(r.series.len() as u32), years * dec!(12));
            assert!(r.series.windows(2).all(|w| w[0].value <= w[1].value));
        }
    }
}

#[test]
fn test_sip_series_agrees_with_closed_form() {
    let r = sip::calculate_sip(dec!(15_000), dec!(11), dec!(25));
    let last = r.series.last().unwrap();
    assert!((last.value - r.maturity).abs() < dec!(0.001));
    assert_eq!(last.invested, r.total_invested);
}

#[test]
fn test_sip_envelope_assumptions() {
    let out = sip::evaluate_sip(&SipInput {
        monthly_investment: dec!(1000),
        annual_rate_pct: dec!(12),
        years: dec!(1),
    })
    .unwrap();
    assert_eq!(out.assumptions["years"], "1");
    assert!(out.warnings.is_empty());
}

// ===========================================================================
// Final series value equals the summary maturity
// ===========================================================================

#[test]
fn test_compounding_engines_final_point_matches_summary() {
    let tol = dec!(0.001);

    let l = lumpsum::calculate_lumpsum(dec!(75_000), dec!(9.5), dec!(12));
    assert!((l.series.last().unwrap().value - l.maturity).abs() < tol);

    let f = fd::calculate_fd(dec!(75_000), dec!(7.25), dec!(3.5), CompoundingFrequency::Monthly);
    assert!((f.series.last().unwrap().value - f.maturity).abs() < tol);

    let rd = rd::calculate_rd(dec!(3_000), dec!(6.8), dec!(4));
    assert!((rd.series.last().unwrap().value - rd.maturity).abs() < tol);

    let p = ppf::calculate_ppf(dec!(100_000), dec!(7.1), dec!(15));
    assert!((p.series.last().unwrap().value - p.maturity).abs() < tol);

    let n = nps::calculate_nps(dec!(8_000), dec!(10), dec!(25), dec!(6));
    assert!((n.series.last().unwrap().value - n.corpus).abs() < tol);

    let s = step_up_sip::calculate_step_up_sip(dec!(5_000), dec!(10), dec!(12), dec!(10));
    assert_eq!(s.series.last().unwrap().value, s.maturity);
}

// ===========================================================================
// Zero-input invariant
// ===========================================================================

#[test]
fn test_zero_input_invariant_for_savings() {
    let zero = Decimal::ZERO;
    assert_eq!(lumpsum::calculate_lumpsum(zero, dec!(10), dec!(5)), LumpsumResult::default());
    assert_eq!(lumpsum::calculate_lumpsum(dec!(10), dec!(10), zero), LumpsumResult::default());
    assert_eq!(
        fd::calculate_fd(zero, dec!(7), dec!(5), CompoundingFrequency::Quarterly),
        FdResult::default()
    );
    assert_eq!(
        fd::calculate_fd(dec!(10), dec!(7), zero, CompoundingFrequency::Quarterly),
        FdResult::default()
    );
    assert_eq!(sip::calculate_sip(dec!(-100), dec!(12), dec!(5)), SipResult::default());
    assert_eq!(sip::calculate_sip(dec!(100), dec!(12), zero), SipResult::default());
    assert_eq!(rd::calculate_rd(zero, dec!(7), dec!(5)), RdResult::default());
    assert_eq!(ppf::calculate_ppf(zero, dec!(7.1), dec!(15)), PpfResult::default());
    assert_eq!(nps::calculate_nps(zero, dec!(10), dec!(30), dec!(6)), NpsResult::default());
    assert_eq!(
        step_up_sip::calculate_step_up_sip(zero, dec!(10), dec!(12), dec!(10)),
        StepUpSipResult::default()
    );

    let zero_result = sip::calculate_sip(zero, dec!(12), dec!(5));
    assert_eq!(zero_result.maturity, zero);
    assert_eq!(zero_result.total_invested, zero);
    assert_eq!(zero_result.gains, zero);
    assert!(zero_result.series.is_empty());
}

#[test]
fn test_overflowing_growth_gives_zero_result() {
    // 100000% p.a. monthly for 50 years does not fit in a Decimal
    let r = sip::calculate_sip(dec!(1000), dec!(100_000), dec!(50));
    assert_eq!(r, SipResult::default());
}

#[test]
fn test_fd_default_frequency_from_json() {
    let input: fd::FdInput =
        serde_json::from_str(r#"{"principal": 100000, "annual_rate_pct": 8, "years": 1}"#).unwrap();
    assert_eq!(input.frequency, CompoundingFrequency::Quarterly);
    let out = fd::evaluate_fd(&input).unwrap();
    assert_eq!(out.result.maturity, dec!(108_243.216));
}
