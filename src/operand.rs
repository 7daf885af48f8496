//! # Operand Types
//!
//! Sum types for the values monetary operations accept.
//!
//! Every constructor takes a [`RawAmount`] (text, integer, float, or
//! [`Decimal`]), and every binary operation takes an [`Operand`] (another
//! [`Money`] or a bare scalar). Dispatch is explicit over the enum variants;
//! there is no runtime type inspection.

use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A raw amount accepted by monetary constructors.
///
/// Textual amounts parse as decimal numerals (plain or scientific notation);
/// floats convert through the decimal engine's nearest-value conversion and
/// reject non-finite input.
#[derive(Debug, Clone)]
pub enum RawAmount {
    /// An exact decimal value, used as-is.
    Decimal(Decimal),
    /// An integer quantity.
    Integer(i64),
    /// A binary float, converted to the nearest decimal.
    Float(f64),
    /// A decimal numeral as text.
    Text(String),
}

impl RawAmount {
    /// Parses this raw amount into an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAmount`] when text is not a decimal
    /// numeral or a float is not finite.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        match self {
            Self::Decimal(value) => Ok(*value),
            Self::Integer(value) => Ok(Decimal::from(*value)),
            Self::Float(value) => Decimal::try_from(*value)
                .map_err(|_| MoneyError::InvalidAmount(value.to_string())),
            Self::Text(text) => Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .map_err(|_| MoneyError::InvalidAmount(text.clone())),
        }
    }
}

impl From<Decimal> for RawAmount {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<i32> for RawAmount {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for RawAmount {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for RawAmount {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RawAmount {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RawAmount {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The right-hand side of a monetary operation.
///
/// A [`Money`] operand is subject to the currency-matching invariant; a
/// scalar operand is treated as a bare amount in the left-hand side's
/// currency.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Another monetary value.
    Money(Money),
    /// A bare scalar amount.
    Scalar(RawAmount),
}

impl From<Money> for Operand {
    #[inline]
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<&Money> for Operand {
    #[inline]
    fn from(value: &Money) -> Self {
        Self::Money(value.clone())
    }
}

impl From<RawAmount> for Operand {
    #[inline]
    fn from(value: RawAmount) -> Self {
        Self::Scalar(value)
    }
}

impl From<Decimal> for Operand {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::Scalar(RawAmount::Decimal(value))
    }
}

impl From<i32> for Operand {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for Operand {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u32> for Operand {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}
