use fincalc_core::lending::emi::{self, EmiInput, EmiResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// EMI identities
// ===========================================================================

#[test]
fn test_emi_payment_identity_across_inputs() {
    let cases = [
        (dec!(50_000), dec!(0), 6),
        (dec!(1_000_000), dec!(9), 120),
        (dec!(3_500_000), dec!(8.35), 240),
        (dec!(250_000), dec!(14.5), 36),
    ];
    for (principal, rate, months) in cases {
        let r = emi::calculate_emi(principal, rate, months);
        assert_eq!(r.total_payment, principal + r.total_interest);
        assert!(r.total_interest >= Decimal::ZERO);
        assert_eq!(r.schedule.len(), months as usize);
        let last = r.schedule.last().unwrap();
        assert!(last.balance.abs() < dec!(0.0001), "balance={}", last.balance);
    }
}

#[test]
fn test_emi_reference_value() {
    let r = emi::calculate_emi(dec!(1_000_000), dec!(9), 120);
    let rounded = r.emi.round();
    assert!(rounded >= dec!(12667) && rounded <= dec!(12668));
}

#[test]
fn test_schedule_is_chronological_and_balance_decreasing() {
    let r = emi::calculate_emi(dec!(600_000), dec!(10.5), 60);
    for (idx, w) in r.schedule.windows(2).enumerate() {
        assert_eq!(w[0].month as usize, idx + 1);
        assert!(w[1].balance <= w[0].balance);
        // Interest share falls as the balance amortises
        assert!(w[1].interest <= w[0].interest);
    }
}

#[test]
fn test_emi_envelope() {
    let out = emi::evaluate_emi(&EmiInput {
        principal: dec!(-1),
        annual_rate_pct: dec!(-2),
        months: 12,
    })
    .unwrap();
    assert_eq!(out.result, EmiResult::default());
    assert_eq!(out.warnings.len(), 2);
    assert!(out.methodology.contains("instalment"));
}

#[test]
fn test_emi_input_from_json() {
    let input: EmiInput =
        serde_json::from_str(r#"{"principal": "500000", "annual_rate_pct": 7.5, "months": 60}"#)
            .unwrap();
    let out = emi::evaluate_emi(&input).unwrap();
    assert!(out.warnings.is_empty());
    assert_eq!(out.result.schedule.len(), 60);
}
