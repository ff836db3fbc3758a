use fincalc_core::withdrawal::swp::{self, SwpResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_swp_termination_properties() {
    let cases = [
        (dec!(1_000_000), dec!(10_000), dec!(8), dec!(10)),
        (dec!(500_000), dec!(25_000), dec!(6), dec!(5)),
        (dec!(2_000_000), dec!(50_000), dec!(12), dec!(20)),
        (dec!(300_000), dec!(0), dec!(7), dec!(3)),
    ];
    for (corpus, withdrawal, rate, years) in cases {
        let r = swp::calculate_swp(corpus, withdrawal, rate, years);
        let n = (years * dec!(12)).floor();
        assert!(Decimal::from(r.months_survived) <= n);
        assert!(r.ending_balance >= Decimal::ZERO);
        assert_eq!(r.series.len(), r.months_survived as usize);
        if Decimal::from(r.months_survived) < n {
            assert!(r.ending_balance < withdrawal, "ending={}", r.ending_balance);
        }
    }
}

#[test]
fn test_swp_accounting_identity() {
    // corpus + interest - withdrawals = ending balance
    let r = swp::calculate_swp(dec!(800_000), dec!(12_000), dec!(9), dec!(8));
    let lhs = dec!(800_000) + r.total_interest - r.total_withdrawn;
    assert!((lhs - r.ending_balance).abs() < dec!(0.000001));
}

#[test]
fn test_swp_negative_withdrawal_clamped() {
    let r = swp::calculate_swp(dec!(100_000), dec!(-500), Decimal::ZERO, dec!(1));
    assert_eq!(r.total_withdrawn, Decimal::ZERO);
    assert_eq!(r.ending_balance, dec!(100_000));
    assert_eq!(r.months_survived, 12);
}

#[test]
fn test_swp_zero_input_invariant() {
    assert_eq!(swp::calculate_swp(Decimal::ZERO, dec!(1), dec!(8), dec!(5)), SwpResult::default());
    assert_eq!(swp::calculate_swp(dec!(1000), dec!(1), dec!(8), dec!(0.01)), SwpResult::default());
}
