pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "lending")]
pub mod lending;

#[cfg(feature = "savings")]
pub mod savings;

#[cfg(feature = "withdrawal")]
pub mod withdrawal;

#[cfg(feature = "planning")]
pub mod planning;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "returns")]
pub mod returns;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
