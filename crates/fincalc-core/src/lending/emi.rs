use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{monthly_rate, pmt};
use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a loan EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    pub annual_rate_pct: Percent,
    pub months: u32,
}

/// One month of the amortisation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiPoint {
    pub month: u32,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// Output of `calculate_emi`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    pub emi: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub schedule: Vec<EmiPoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Level monthly instalment for a loan of `principal` over `months`, with the
/// full amortisation schedule.
///
/// `principal <= 0` or `months == 0` gives the zero result.
pub fn calculate_emi(principal: Money, annual_rate_pct: Percent, months: u32) -> EmiResult {
    if principal <= Decimal::ZERO || months == 0 {
        return EmiResult::default();
    }

    let r = monthly_rate(annual_rate_pct);
    let Some(emi) = pmt(r, months, principal) else {
        return EmiResult::default();
    };

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;
    for month in 1..=months {
        let Some(interest) = balance.checked_mul(r) else {
            return EmiResult::default();
        };
        let Some(due) = emi.checked_sub(interest) else {
            return EmiResult::default();
        };
        let principal_part = due.min(balance);
        balance = (balance - principal_part).max(Decimal::ZERO);
        schedule.push(EmiPoint {
            month,
            principal: principal_part,
            interest,
            balance,
        });
    }

    let Some(total_payment) = emi.checked_mul(Decimal::from(months)) else {
        return EmiResult::default();
    };
    EmiResult {
        emi,
        total_interest: total_payment - principal,
        total_payment,
        schedule,
    }
}

/// `calculate_emi` wrapped in the standard computation envelope.
pub fn evaluate_emi(input: &EmiInput) -> FinCalcResult<ComputationOutput<EmiResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    non_positive_warning(&mut warnings, "principal", input.principal);
    negative_rate_warning(&mut warnings, "annual_rate_pct", input.annual_rate_pct);
    if input.months == 0 {
        warnings.push("months must be > 0; returning zero result".into());
    }

    let result = calculate_emi(input.principal, input.annual_rate_pct, input.months);

    Ok(with_metadata(
        "Equated monthly instalment (reducing-balance annuity)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "months": input.months,
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
