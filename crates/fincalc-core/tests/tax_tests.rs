use fincalc_core::tax::gst::{self, GstInput, GstMode, GstResult};
use fincalc_core::tax::income_tax::{self, IncomeTaxInput, IncomeTaxResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// GST
// ===========================================================================

#[test]
fn test_gst_round_trip() {
    let ex = gst::calculate_gst(dec!(1000), dec!(18), GstMode::Exclusive);
    assert_eq!(ex.tax, dec!(180));
    assert_eq!(ex.gross, dec!(1180));

    let inc = gst::calculate_gst(ex.gross, dec!(18), GstMode::Inclusive);
    assert_eq!(inc.base, dec!(1000));
    assert_eq!(inc.tax, dec!(180));
}

#[test]
fn test_gst_round_trip_odd_rate() {
    let ex = gst::calculate_gst(dec!(777.77), dec!(12), GstMode::Exclusive);
    let inc = gst::calculate_gst(ex.gross, dec!(12), GstMode::Inclusive);
    assert!((inc.base - dec!(777.77)).abs() < dec!(0.0000001));
    assert_eq!(inc.cgst + inc.sgst, inc.tax);
}

#[test]
fn test_gst_mode_from_json() {
    let input: GstInput =
        serde_json::from_str(r#"{"amount": 1180, "rate_pct": 18, "mode": "inclusive"}"#).unwrap();
    let out = gst::evaluate_gst(&input).unwrap();
    assert_eq!(out.result.base, dec!(1000));
}

#[test]
fn test_gst_zero_input_invariant() {
    assert_eq!(gst::calculate_gst(Decimal::ZERO, dec!(5), GstMode::Exclusive), GstResult::default());
}

// ===========================================================================
// Income tax
// ===========================================================================

#[test]
fn test_income_tax_monotonic_in_gross() {
    let mut previous = Decimal::ZERO;
    let mut gross = Decimal::ZERO;
    while gross <= dec!(3_000_000) {
        let r = income_tax::calculate_income_tax(gross, dec!(50_000));
        assert!(r.total_tax >= previous, "tax fell at gross={gross}");
        previous = r.total_tax;
        gross += dec!(25_000);
    }
}

#[test]
fn test_breakup_sums_to_tax_payable() {
    for gross in [dec!(450_000), dec!(999_999), dec!(1_350_000), dec!(5_000_000)] {
        let r = income_tax::calculate_income_tax(gross, Decimal::ZERO);
        let sum: Decimal = r.breakup.iter().map(|row| row.tax).sum();
        assert_eq!(sum, r.tax_payable);
        assert_eq!(r.total_tax, r.tax_payable + r.cess);
        assert_eq!(r.cess, r.tax_payable * dec!(0.04));
    }
}

#[test]
fn test_effective_rate() {
    let r = income_tax::calculate_income_tax(dec!(1_000_000), Decimal::ZERO);
    // 50k slab tax + 2k cess on 10L
    assert_eq!(r.total_tax, dec!(52_000));
    assert_eq!(r.effective_rate_pct, dec!(5.2));
}

#[test]
fn test_income_tax_zero_input_invariant() {
    assert_eq!(
        income_tax::calculate_income_tax(Decimal::ZERO, Decimal::ZERO),
        IncomeTaxResult::default()
    );
    let out = income_tax::evaluate_income_tax(&IncomeTaxInput {
        gross_income: dec!(-10),
        deductions: Decimal::ZERO,
    })
    .unwrap();
    assert_eq!(out.result, IncomeTaxResult::default());
    assert_eq!(out.warnings.len(), 1);
}
