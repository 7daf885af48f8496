//! # Monetary Errors
//!
//! Typed errors for monetary construction, arithmetic, and comparison.
//!
//! All failures are synchronous and raised at the point of violation; there
//! is no partial construction and no recovery built into the value type.

use crate::currency::Currency;
use thiserror::Error;

/// Error type for monetary operations.
///
/// # Examples
///
/// ```
/// use moneta::{Money, MoneyError};
///
/// let result = Money::usd("WRONG");
/// assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Input could not be parsed as a decimal numeral.
    #[error("invalid amount: '{0}' is not a decimal numeral")]
    InvalidAmount(String),

    /// Two values of different currencies were combined or ordered.
    #[error("currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// The currency of the left-hand operand.
        expected: Currency,
        /// The currency of the offending operand.
        actual: Currency,
    },

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The result exceeds the decimal engine's representable range.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type for monetary operations.
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_display() {
        let error = MoneyError::InvalidAmount("nope".to_string());
        assert_eq!(
            error.to_string(),
            "invalid amount: 'nope' is not a decimal numeral"
        );
    }

    #[test]
    fn currency_mismatch_display() {
        let error = MoneyError::CurrencyMismatch {
            expected: Currency::from("USD"),
            actual: Currency::from("EUR"),
        };
        assert_eq!(error.to_string(), "currency mismatch: expected USD, got EUR");
    }

    #[test]
    fn division_by_zero_display() {
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn overflow_display() {
        assert_eq!(MoneyError::Overflow.to_string(), "arithmetic overflow");
    }
}
