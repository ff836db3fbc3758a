use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{
    negative_rate_warning, non_positive_warning, with_metadata, ComputationOutput, Money, Percent,
};
use crate::FinCalcResult;

/// Whether the entered amount already includes GST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstMode {
    #[default]
    Exclusive,
    Inclusive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstInput {
    pub amount: Money,
    pub rate_pct: Percent,
    #[serde(default)]
    pub mode: GstMode,
}

/// Intra-state GST breakdown; the tax is split evenly into CGST and SGST.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GstResult {
    pub base: Money,
    pub tax: Money,
    pub gross: Money,
    pub cgst: Money,
    pub sgst: Money,
    pub rate_pct: Percent,
    pub cgst_rate_pct: Percent,
    pub sgst_rate_pct: Percent,
}

pub fn calculate_gst(amount: Money, rate_pct: Percent, mode: GstMode) -> GstResult {
    if amount <= Decimal::ZERO {
        return GstResult::default();
    }

    let rate_pct = rate_pct.max(Decimal::ZERO);
    let r = rate_pct / dec!(100);
    let (base, tax, gross) = match mode {
        GstMode::Exclusive => {
            let Some(tax) = amount.checked_mul(r) else {
                return GstResult::default();
            };
            let Some(gross) = amount.checked_add(tax) else {
                return GstResult::default();
            };
            (amount, tax, gross)
        }
        GstMode::Inclusive => {
            let base = amount / (Decimal::ONE + r);
            (base, amount - base, amount)
        }
    };

    let half = tax / dec!(2);
    GstResult {
        base,
        tax,
        gross,
        cgst: half,
        sgst: half,
        rate_pct,
        cgst_rate_pct: rate_pct / dec!(2),
        sgst_rate_pct: rate_pct / dec!(2),
    }
}

pub fn evaluate_gst(input: &GstInput) -> FinCalcResult<ComputationOutput<GstResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    non_positive_warning(&mut warnings, "amount", input.amount);
    negative_rate_warning(&mut warnings, "rate_pct", input.rate_pct);

    let result = calculate_gst(input.amount, input.rate_pct, input.mode);

    Ok(with_metadata(
        "GST (intra-state CGST/SGST split)",
        &serde_json::json!({
            "amount": input.amount.to_string(),
            "rate_pct": input.rate_pct.to_string(),
            "mode": input.mode,
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}
