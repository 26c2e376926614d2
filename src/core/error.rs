use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building a [`Currency`](super::Currency).
///
/// Only configuration problems are fatal. Malformed amounts in a collection
/// never produce an error; they degrade to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CurrencyError {
    /// The currency code is empty or blank.
    #[error("currency code must not be empty")]
    EmptyCode,

    /// No coin denominations were configured.
    #[error("{code}: at least one coin denomination is required")]
    NoCoins { code: String },

    /// No note denominations were configured.
    #[error("{code}: at least one note denomination is required")]
    NoNotes { code: String },

    /// A face value is zero or negative.
    #[error("{code}: denomination {value} must be positive")]
    NonPositive { code: String, value: Decimal },

    /// A face value is finer than one minor unit (e.g. 0.005).
    #[error("{code}: denomination {value} is not a whole number of cents")]
    SubCent { code: String, value: Decimal },

    /// A face value is too large to be represented in minor units.
    #[error("{code}: denomination {value} is out of range")]
    OutOfRange { code: String, value: Decimal },

    /// The same face value is listed twice, or as both coin and note.
    #[error("{code}: denomination {value} is listed more than once")]
    Duplicate { code: String, value: Decimal },

    /// No built-in table entry for this currency code.
    #[error("unknown currency code: {0}")]
    UnknownCode(String),

    /// Configuration could not be parsed.
    #[error("invalid currency configuration: {0}")]
    Parse(String),
}
