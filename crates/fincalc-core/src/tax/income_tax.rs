use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{negative_rate_warning, with_metadata, ComputationOutput, Money, Percent};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One bracket of a progressive slab table. `upper == None` is the open-ended
/// top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub upper: Option<Money>,
    pub rate_pct: Percent,
}

/// New-regime slabs.
pub const NEW_REGIME_SLABS: [TaxSlab; 6] = [
    TaxSlab { upper: Some(dec!(300_000)), rate_pct: dec!(0) },
    TaxSlab { upper: Some(dec!(700_000)), rate_pct: dec!(5) },
    TaxSlab { upper: Some(dec!(1_000_000)), rate_pct: dec!(10) },
    TaxSlab { upper: Some(dec!(1_200_000)), rate_pct: dec!(15) },
    TaxSlab { upper: Some(dec!(1_500_000)), rate_pct: dec!(20) },
    TaxSlab { upper: None, rate_pct: dec!(30) },
];

/// Health and education cess on slab tax.
pub const CESS_RATE: Decimal = dec!(0.04);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    pub gross_income: Money,
    #[serde(default)]
    pub deductions: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSlabRow {
    pub slab: String,
    pub tax: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    pub taxable_income: Money,
    /// Slab tax before cess.
    pub tax_payable: Money,
    pub cess: Money,
    pub total_tax: Money,
    pub effective_rate_pct: Percent,
    pub marginal_rate_pct: Percent,
    pub breakup: Vec<TaxSlabRow>,
}

/// Slab evaluation output: total tax, per-bracket rows, top rate reached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlabTax {
    pub tax: Money,
    pub rows: Vec<TaxSlabRow>,
    pub marginal_rate_pct: Percent,
}

// ---------------------------------------------------------------------------
// Slab evaluation
// ---------------------------------------------------------------------------

fn slab_label(lower: Money, slab: &TaxSlab) -> String {
    match slab.upper {
        Some(upper) => format!("{}-{} @ {}%", lower + Decimal::ONE, upper, slab.rate_pct),
        None => format!("{}-above @ {}%", lower + Decimal::ONE, slab.rate_pct),
    }
}

/// Apply a progressive slab table (ordered lowest bracket first) to `income`.
/// Rows are emitted only for brackets the income actually reaches. `None` if
/// the tax overflows.
pub fn apply_slabs(income: Money, slabs: &[TaxSlab]) -> Option<SlabTax> {
    let mut out = SlabTax::default();
    let mut lower = Decimal::ZERO;

    for slab in slabs {
        let top = slab.upper.map_or(income, |u| income.min(u));
        let span = top.checked_sub(lower)?.max(Decimal::ZERO);
        if span > Decimal::ZERO {
            let tax = span.checked_mul(slab.rate_pct)?.checked_div(dec!(100))?;
            out.tax = out.tax.checked_add(tax)?;
            out.marginal_rate_pct = slab.rate_pct;
            out.rows.push(TaxSlabRow {
                slab: slab_label(lower, slab),
                tax,
            });
        }
        match slab.upper {
            Some(upper) => lower = upper,
            None => break,
        }
    }

    Some(out)
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Income tax under the new-regime slabs with 4% cess.
pub fn calculate_income_tax(gross_income: Money, deductions: Money) -> IncomeTaxResult {
    let Some(taxable_income) = gross_income.checked_sub(deductions.max(Decimal::ZERO)) else {
        return IncomeTaxResult::default();
    };
    if taxable_income <= Decimal::ZERO {
        return IncomeTaxResult::default();
    }

    let Some(slabs) = apply_slabs(taxable_income, &NEW_REGIME_SLABS) else {
        return IncomeTaxResult::default();
    };
    let Some(cess) = slabs.tax.checked_mul(CESS_RATE) else {
        return IncomeTaxResult::default();
    };
    let Some(total_tax) = slabs.tax.checked_add(cess) else {
        return IncomeTaxResult::default();
    };
    // taxable_income > 0 implies gross_income > 0
    let effective_rate_pct = total_tax / gross_income * dec!(100);

    IncomeTaxResult {
        taxable_income,
        tax_payable: slabs.tax,
        cess,
        total_tax,
        effective_rate_pct,
        marginal_rate_pct: slabs.marginal_rate_pct,
        breakup: slabs.rows,
    }
}

pub fn evaluate_income_tax(
    input: &IncomeTaxInput,
) -> FinCalcResult<ComputationOutput<IncomeTaxResult>> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    negative_rate_warning(&mut warnings, "deductions", input.deductions);
    if input.gross_income <= input.deductions.max(Decimal::ZERO) {
        warnings.push("no taxable income after deductions".into());
    }

    let result = calculate_income_tax(input.gross_income, input.deductions);

    Ok(with_metadata(
        "Income tax (new-regime slabs, 4% health & education cess)",
        &serde_json::json!({
            "gross_income": input.gross_income.to_string(),
            "deductions": input.deductions.to_string(),
            "slabs": NEW_REGIME_SLABS,
            "cess_rate": CESS_RATE.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
