//! # Money Value Object
//!
//! Immutable monetary value with exact decimal arithmetic.
//!
//! This module provides the [`Money`] type, pairing an arbitrary-precision
//! decimal amount with a [`Currency`] code. Every operation returns a new
//! value; nothing is mutated in place, and amounts are never represented as
//! binary floating point.
//!
//! # Examples
//!
//! ```
//! use moneta::{Money, RoundingMode};
//!
//! let subtotal = Money::usd("19.99").unwrap();
//! let tax = subtotal.times("0.0825").unwrap().round_to_minor_unit(RoundingMode::HalfUp);
//! let total = subtotal.plus(&tax).unwrap();
//!
//! assert_eq!(total.to_string(), "21.64 USD");
//! ```

use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::operand::{Operand, RawAmount};
use crate::record::MoneyRecord;
use crate::rounding::RoundingMode;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// An immutable monetary value.
///
/// Holds an exact decimal amount in major currency units (dollars, not
/// cents) together with an opaque currency code. The minor-unit view is a
/// computed projection, never stored.
///
/// # Invariants
///
/// - Immutable after construction; every operation yields a new value.
/// - Additive combination and ordered comparison require equal currencies
///   and fail with [`MoneyError::CurrencyMismatch`] otherwise.
/// - Equality across currencies is `false`, never an error.
///
/// # Examples
///
/// ```
/// use moneta::Money;
///
/// let price = Money::new("1,299.50", "EUR").unwrap();
/// assert_eq!(price.to_fixed(2), "1299.50");
/// assert_eq!(price.minor_units().unwrap().to_string(), "129950.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a monetary value from a major-unit amount.
    ///
    /// Textual amounts may carry thousands-separator commas, which are
    /// stripped before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAmount`] if the amount is not a valid
    /// decimal numeral.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneta::Money;
    ///
    /// let money = Money::new("400,000", "USD").unwrap();
    /// assert_eq!(money.to_fixed(2), "400000.00");
    ///
    /// assert!(Money::new("WRONG", "USD").is_err());
    /// ```
    pub fn new(amount: impl Into<RawAmount>, currency: impl Into<Currency>) -> MoneyResult<Self> {
        let amount = parse_major_units(amount.into())?;
        Ok(Self {
            amount,
            currency: currency.into(),
        })
    }

    /// Creates a monetary value in the default currency, USD.
    ///
    /// # Errors
    ///
    /// Same parse contract as [`Money::new`].
    pub fn usd(amount: impl Into<RawAmount>) -> MoneyResult<Self> {
        Self::new(amount, Currency::default())
    }

    /// Creates a monetary value from a minor-unit (hundredths) amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAmount`] if the amount is not a valid
    /// decimal numeral.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneta::Money;
    ///
    /// let money = Money::from_minor_units("12345", "EUR").unwrap();
    /// assert_eq!(money.to_string(), "123.45 EUR");
    /// ```
    pub fn from_minor_units(
        cents: impl Into<RawAmount>,
        currency: impl Into<Currency>,
    ) -> MoneyResult<Self> {
        let cents = cents.into().to_decimal()?;
        let amount = cents
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: currency.into(),
        })
    }

    /// Creates a monetary value from an interchange record.
    ///
    /// The major-unit field wins when both are present; otherwise the
    /// minor-unit field is required.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAmount`] if the record carries no amount
    /// field, or the carried field does not parse.
    pub fn from_record(record: MoneyRecord) -> MoneyResult<Self> {
        let MoneyRecord {
            major_units,
            minor_units,
            currency,
        } = record;

        if let Some(major) = major_units {
            return Self::new(major, currency);
        }
        match minor_units {
            Some(minor) => Self::from_minor_units(minor, currency),
            None => Err(MoneyError::InvalidAmount(
                "record carries neither majorUnits nor minorUnits".to_string(),
            )),
        }
    }

    /// Creates a zero value in the given currency.
    #[must_use]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency: currency.into(),
        }
    }

    /// Returns the amount in major units.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the amount in minor units, computed as `amount × 100`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the projection exceeds the
    /// decimal engine's range.
    pub fn minor_units(&self) -> MoneyResult<Decimal> {
        self.amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(MoneyError::Overflow)
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive (non-zero).
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative (non-zero).
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Renders the amount as a fixed-point string with exactly `digits`
    /// fractional digits.
    ///
    /// Excess digits are rounded half-up for display; the stored amount is
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneta::Money;
    ///
    /// let money = Money::usd("123.4").unwrap();
    /// assert_eq!(money.to_fixed(2), "123.40");
    /// assert_eq!(money.to_fixed(0), "123");
    ///
    /// let sub_cent = Money::usd("0.005").unwrap();
    /// assert_eq!(sub_cent.to_fixed(2), "0.01");
    /// ```
    #[must_use]
    pub fn to_fixed(&self, digits: u32) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", digits as usize, rounded)
    }

    /// Converts to the interchange record, with both amount fields
    /// populated at minor-unit granularity.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the minor-unit projection
    /// overflows.
    pub fn to_record(&self) -> MoneyResult<MoneyRecord> {
        let minor = self
            .minor_units()?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Ok(MoneyRecord {
            major_units: Some(self.to_fixed(2)),
            minor_units: Some(format!("{:.0}", minor)),
            currency: self.currency.clone(),
        })
    }

    /// Rounds the amount to zero fractional digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneta::{Money, RoundingMode};
    ///
    /// let money = Money::usd("19.99").unwrap();
    /// assert_eq!(money.round_to_major_unit(RoundingMode::Down).to_fixed(0), "19");
    /// assert_eq!(money.round_to_major_unit(RoundingMode::HalfUp).to_fixed(0), "20");
    /// ```
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn round_to_major_unit(&self, mode: RoundingMode) -> Self {
        self.with_amount(self.amount.round_dp_with_strategy(0, mode.strategy()))
    }

    /// Rounds the minor-unit projection to an integer and converts back.
    ///
    /// The factor of 100 is exact in base 10, so this is the same as
    /// rounding the amount to two fractional digits.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn round_to_minor_unit(&self, mode: RoundingMode) -> Self {
        self.with_amount(self.amount.round_dp_with_strategy(2, mode.strategy()))
    }

    /// Adds another monetary value or a bare scalar amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for a money operand of a
    /// different currency, [`MoneyError::InvalidAmount`] for an unparseable
    /// scalar, and [`MoneyError::Overflow`] if the sum is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneta::Money;
    ///
    /// let a = Money::usd("12.34").unwrap();
    /// let b = Money::usd("0.06").unwrap();
    /// assert_eq!(a.plus(&b).unwrap().to_fixed(2), "12.40");
    ///
    /// let eur = Money::new(1, "EUR").unwrap();
    /// assert!(a.plus(&eur).is_err());
    /// ```
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn plus(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_amount(other.into())?;
        let amount = self.amount.checked_add(rhs).ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts another monetary value or a bare scalar amount.
    ///
    /// # Errors
    ///
    /// Same contract as [`Money::plus`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn minus(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_amount(other.into())?;
        let amount = self.amount.checked_sub(rhs).ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Multiplies by a scalar, or scales by another value's unit quantity.
    ///
    /// A money operand must match this value's currency; the product scales
    /// by the operand's amount rather than forming a dimensional unit².
    ///
    /// # Errors
    ///
    /// Same contract as [`Money::plus`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn times(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_amount(other.into())?;
        let amount = self.amount.checked_mul(rhs).ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Divides by a scalar, or by another value's unit quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero divisor; otherwise
    /// the same contract as [`Money::times`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn div(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_amount(other.into())?;
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self.amount.checked_div(rhs).ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Compares for equality with another monetary value or a bare scalar.
    ///
    /// A money operand of a different currency compares unequal, never errors.
    /// A scalar operand compares against the numeric amount only; an
    /// unparseable textual scalar compares unequal.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneta::Money;
    ///
    /// let usd = Money::usd(5).unwrap();
    /// assert!(usd.equals(5));
    /// assert!(usd.equals("5.00"));
    /// assert!(!usd.equals(&Money::new(5, "EUR").unwrap()));
    /// ```
    #[must_use]
    pub fn equals(&self, other: impl Into<Operand>) -> bool {
        match other.into() {
            Operand::Money(other) => *self == other,
            Operand::Scalar(raw) => raw
                .to_decimal()
                .map(|value| self.amount == value)
                .unwrap_or(false),
        }
    }

    /// Orders against another monetary value or a bare scalar.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for a money operand of a
    /// different currency and [`MoneyError::InvalidAmount`] for an
    /// unparseable scalar.
    pub fn try_cmp(&self, other: impl Into<Operand>) -> MoneyResult<Ordering> {
        let rhs = self.operand_amount(other.into())?;
        Ok(self.amount.cmp(&rhs))
    }

    /// Returns true if this value is strictly less than the operand.
    ///
    /// # Errors
    ///
    /// Same contract as [`Money::try_cmp`].
    pub fn lt(&self, other: impl Into<Operand>) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// Returns true if this value is strictly greater than the operand.
    ///
    /// # Errors
    ///
    /// Same contract as [`Money::try_cmp`].
    pub fn gt(&self, other: impl Into<Operand>) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
        }
    }

    /// Resolves an operand to an amount combinable with this value.
    fn operand_amount(&self, operand: Operand) -> MoneyResult<Decimal> {
        match operand {
            Operand::Money(other) => {
                if other.currency == self.currency {
                    Ok(other.amount)
                } else {
                    Err(MoneyError::CurrencyMismatch {
                        expected: self.currency.clone(),
                        actual: other.currency,
                    })
                }
            }
            Operand::Scalar(raw) => raw.to_decimal(),
        }
    }
}

fn parse_major_units(raw: RawAmount) -> MoneyResult<Decimal> {
    match raw {
        RawAmount::Text(text) if text.contains(',') => {
            RawAmount::Text(text.replace(',', "")).to_decimal()
        }
        other => other.to_decimal(),
    }
}

/// Zero USD.
impl Default for Money {
    fn default() -> Self {
        Self::zero(Currency::default())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_fixed(2), self.currency)
    }
}

impl PartialEq<Decimal> for Money {
    fn eq(&self, other: &Decimal) -> bool {
        self.amount == *other
    }
}

impl PartialEq<Money> for Decimal {
    fn eq(&self, other: &Money) -> bool {
        *self == other.amount
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let record = self.to_record().map_err(serde::ser::Error::custom)?;
        record.serialize(serializer)
    }
}
