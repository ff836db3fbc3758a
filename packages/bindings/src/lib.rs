use napi::Result as NapiResult;
use napi_derive::napi;
use serde::{de::DeserializeOwned, Serialize};

use fincalc_core::{FinCalcError, FinCalcResult};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse `input_json`, run the evaluator and serialise its envelope.
fn run_json<I, O>(input_json: &str, evaluate: fn(&I) -> FinCalcResult<O>) -> NapiResult<String>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input: I = serde_json::from_str(input_json)
        .map_err(FinCalcError::from)
        .map_err(to_napi_error)?;
    let output = evaluate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Lending
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::lending::emi::evaluate_emi)
}

// ---------------------------------------------------------------------------
// Savings
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_lumpsum(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::savings::lumpsum::evaluate_lumpsum)
}

#[napi]
pub fn calculate_fd(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::savings::fd::evaluate_fd)
}

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::savings::sip::evaluate_sip)
}

#[napi]
pub fn calculate_step_up_sip(input_json: String) -> NapiResult<String> {
    run_json(
        &input_json,
        fincalc_core::savings::step_up_sip::evaluate_step_up_sip,
    )
}

#[napi]
pub fn calculate_rd(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::savings::rd::evaluate_rd)
}

#[napi]
pub fn calculate_ppf(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::savings::ppf::evaluate_ppf)
}

#[napi]
pub fn calculate_nps(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::savings::nps::evaluate_nps)
}

// ---------------------------------------------------------------------------
// Withdrawal
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_swp(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::withdrawal::swp::evaluate_swp)
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

#[napi]
pub fn plan_goal(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::planning::goal::evaluate_goal)
}

// ---------------------------------------------------------------------------
// Tax
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_gst(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::tax::gst::evaluate_gst)
}

#[napi]
pub fn calculate_income_tax(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::tax::income_tax::evaluate_income_tax)
}

// ---------------------------------------------------------------------------
// Returns
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_xirr(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::returns::xirr::evaluate_xirr)
}
