use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::types::{with_metadata, CashFlow, ComputationOutput, Rate};
use crate::FinCalcResult;

const CONVERGENCE_THRESHOLD: Decimal = dec!(0.0000001);
const MAX_XIRR_ITERATIONS: u32 = 100;
const DEFAULT_GUESS: Rate = dec!(0.10);
const DAYS_PER_YEAR: Decimal = dec!(365);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XirrInput {
    pub flows: Vec<CashFlow>,
    /// Initial rate as a decimal (0.10 = 10%).
    #[serde(default)]
    pub guess: Option<Rate>,
    /// Fail instead of returning the last iterate when Newton-Raphson does
    /// not converge.
    #[serde(default)]
    pub require_convergence: bool,
}

/// Outcome of the Newton-Raphson solve, including whether it converged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XirrSolution {
    /// Annualised rate in percent.
    pub rate_pct: Decimal,
    pub iterations: u32,
    pub converged: bool,
    /// Size of the final Newton step (as a decimal rate).
    pub last_step: Decimal,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// NPV and its derivative with respect to the rate, or `None` when a term
/// cannot be represented (rate at or below -100%, overflow).
fn npv_and_derivative(terms: &[(Decimal, Decimal)], rate: Rate) -> Option<(Decimal, Decimal)> {
    let one_plus_r = Decimal::ONE.checked_add(rate)?;
    if one_plus_r <= Decimal::ZERO {
        return None;
    }

    let mut npv = Decimal::ZERO;
    let mut dnpv = Decimal::ZERO;
    for &(years, amount) in terms {
        let discount = one_plus_r.checked_powd(years)?;
        if discount.is_zero() {
            return None;
        }
        npv = npv.checked_add(amount.checked_div(discount)?)?;
        let slope = years
            .checked_mul(amount)?
            .checked_div(one_plus_r.checked_mul(discount)?)?;
        dnpv = dnpv.checked_sub(slope)?;
    }
    Some((npv, dnpv))
}

/// Newton-Raphson XIRR with its convergence signal.
///
/// Flows are sorted by date and year fractions are `days / 365` from the
/// earliest flow. Iteration stops when the step is below 1e-7 or after 100
/// iterations; a step that cannot be computed halts the solve at the last
/// finite rate.
pub fn solve_xirr(flows: &[CashFlow], guess: Option<Rate>) -> XirrSolution {
    if flows.len() < 2 {
        return XirrSolution::default();
    }

    let mut sorted: Vec<&CashFlow> = flows.iter().collect();
    sorted.sort_by_key(|cf| cf.date);
    let anchor = sorted[0].date;
    let terms: Vec<(Decimal, Decimal)> = sorted
        .iter()
        .map(|cf| {
            let days = (cf.date - anchor).num_days();
            (Decimal::from(days) / DAYS_PER_YEAR, cf.amount)
        })
        .collect();

    let mut rate = guess
        .filter(|g| g.checked_mul(dec!(100)).is_some())
        .unwrap_or(DEFAULT_GUESS);
    let mut iterations = 0;
    let mut converged = false;
    let mut last_step = Decimal::ZERO;

    while iterations < MAX_XIRR_ITERATIONS {
        iterations += 1;
        let Some((npv, dnpv)) = npv_and_derivative(&terms, rate) else {
            break;
        };
        if dnpv.is_zero() {
            break;
        }
        let Some(step) = npv.checked_div(dnpv) else {
            break;
        };
        // The returned percentage must stay representable too
        let Some(next) = rate
            .checked_sub(step)
            .filter(|r| r.checked_mul(dec!(100)).is_some())
        else {
            break;
        };
        rate = next;
        last_step = step;
        if step.abs() < CONVERGENCE_THRESHOLD {
            converged = true;
            break;
        }
    }

    XirrSolution {
        rate_pct: rate * dec!(100),
        iterations,
        converged,
        last_step,
    }
}

/// Annualised internal rate of return for irregularly dated flows, in
/// percent. Fewer than two flows gives 0; non-convergence returns the last
/// iterate.
pub fn xirr(flows: &[CashFlow], guess: Option<Rate>) -> Decimal {
    solve_xirr(flows, guess).rate_pct
}

pub fn evaluate_xirr(input: &XirrInput) -> FinCalcResult<ComputationOutput<XirrSolution>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if input.flows.len() < 2 {
        return Err(FinCalcError::InsufficientData(
            "XIRR requires at least 2 cash flows".into(),
        ));
    }
    let has_outflow = input.flows.iter().any(|cf| cf.amount < Decimal::ZERO);
    let has_inflow = input.flows.iter().any(|cf| cf.amount > Decimal::ZERO);
    if !has_outflow || !has_inflow {
        warnings.push("cash flows do not change sign; no meaningful XIRR exists".into());
    }

    let solution = solve_xirr(&input.flows, input.guess);

    if !solution.converged {
        if input.require_convergence {
            return Err(FinCalcError::ConvergenceFailure {
                function: "XIRR".into(),
                iterations: solution.iterations,
                last_delta: solution.last_step,
            });
        }
        warnings.push(format!(
            "XIRR did not converge after {} iterations; returning last estimate",
            solution.iterations
        ));
    }
    if solution.rate_pct <= dec!(-100) {
        warnings.push("XIRR at or below -100% indicates ill-conditioned cash flows".into());
    }

    Ok(with_metadata(
        "XIRR (Newton-Raphson, actual/365 year fractions)",
        &serde_json::json!({
            "flows": input.flows.len(),
            "guess": input.guess.unwrap_or(DEFAULT_GUESS).to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        solution,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
