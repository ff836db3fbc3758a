use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent, Rate, Years};

pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert an annual percentage into a periodic decimal rate:
/// `max(0, pct) / periods_per_year / 100`.
pub fn periodic_rate(annual_rate_pct: Percent, periods_per_year: u32) -> Rate {
    if periods_per_year == 0 {
        return Decimal::ZERO;
    }
    annual_rate_pct.max(Decimal::ZERO) / Decimal::from(periods_per_year) / dec!(100)
}

/// Monthly decimal rate for an annual percentage.
pub fn monthly_rate(annual_rate_pct: Percent) -> Rate {
    periodic_rate(annual_rate_pct, MONTHS_PER_YEAR)
}

/// Whole periods in `years`: `max(0, floor(years * periods_per_year))`.
///
/// Horizons that do not fit in a `u32` collapse to 0, which every calculator
/// treats as a zero result.
pub fn whole_periods(years: Years, periods_per_year: u32) -> u32 {
    if years <= Decimal::ZERO {
        return 0;
    }
    years
        .checked_mul(Decimal::from(periods_per_year))
        .and_then(|p| p.floor().to_u32())
        .unwrap_or(0)
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
/// Returns `None` when the factor overflows.
pub fn compound(rate: Rate, n: u32) -> Option<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result.checked_mul(factor)?;
    }
    Some(result)
}

/// (1 + r)^years for a possibly fractional year count.
pub fn compound_years(rate: Rate, years: Years) -> Option<Decimal> {
    if years <= Decimal::ZERO {
        return Some(Decimal::ONE);
    }
    if years.fract().is_zero() {
        return compound(rate, years.to_u32()?);
    }
    (Decimal::ONE + rate).checked_powd(years)
}

/// Future value of `n` level contributions made at the start of each period
/// (annuity due): `pmt * ((1+r)^n - 1) / r * (1+r)`, or `pmt * n` at r = 0.
pub fn fv_annuity_due(pmt: Money, rate: Rate, n: u32) -> Option<Money> {
    pmt.checked_mul(annuity_due_factor(rate, n)?)
}

/// The multiplier applied to a level contribution by [`fv_annuity_due`].
pub fn annuity_due_factor(rate: Rate, n: u32) -> Option<Decimal> {
    if rate.is_zero() {
        return Some(Decimal::from(n));
    }
    let growth = compound(rate, n)?;
    ((growth - Decimal::ONE) / rate).checked_mul(Decimal::ONE + rate)
}

/// Level payment that amortises `present_value` over `nper` periods:
/// `pv * r * (1+r)^n / ((1+r)^n - 1)`, or `pv / n` at r = 0.
pub fn pmt(rate: Rate, nper: u32, present_value: Money) -> Option<Money> {
    if nper == 0 {
        return None;
    }
    if rate.is_zero() {
        return Some(present_value / Decimal::from(nper));
    }
    let factor = compound(rate, nper)?;
    let denom = factor - Decimal::ONE;
    if denom.is_zero() {
        return None;
    }
    present_value.checked_mul(rate)?.checked_mul(factor)?.checked_div(denom)
}

/// Present value of a single amount received after `nper` periods.
pub fn pv(rate: Rate, nper: u32, future_value: Money) -> Option<Money> {
    let factor = compound(rate, nper)?;
    future_value.checked_div(factor)
}
