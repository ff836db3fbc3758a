use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values (rupees). Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Periodic rates expressed as decimals (0.01 = 1% per period).
pub type Rate = Decimal;

/// Annual rates as entered by a user, in percent (12 = 12% p.a.).
pub type Percent = Decimal;

/// Durations in (possibly fractional) years
pub type Years = Decimal;

/// A single dated cash flow. Negative = outflow (investment), positive = inflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub date: NaiveDate,
    pub amount: Money,
}

impl CashFlow {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self { date, amount }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Collects the standard "why is this a zero result" warnings shared by the
/// `evaluate_*` wrappers.
pub(crate) fn non_positive_warning(warnings: &mut Vec<String>, field: &str, value: Decimal) {
    if value <= Decimal::ZERO {
        warnings.push(format!("{field} must be > 0 (got {value}); returning zero result"));
    }
}

pub(crate) fn negative_rate_warning(warnings: &mut Vec<String>, field: &str, value: Decimal) {
    if value < Decimal::ZERO {
        warnings.push(format!("{field} is negative ({value}); clamped to 0"));
    }
}
