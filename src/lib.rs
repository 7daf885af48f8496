//! # Moneta
//!
//! Immutable monetary values with exact decimal arithmetic.
//!
//! A [`Money`] pairs an exact decimal amount with an opaque [`Currency`]
//! code. Arithmetic, comparison, and rounding never silently lose precision,
//! and operations that structurally require equal currencies fail with a
//! typed error instead of producing a meaningless result.
//!
//! ## Design
//!
//! - **Value semantics**: every operation returns a new [`Money`]; nothing
//!   is mutated after construction, so values are freely shared across
//!   threads.
//! - **Units-primary**: the amount is held in major units (dollars, not
//!   cents); the minor-unit view is a computed projection.
//! - **Exact decimals**: amounts are base-10 decimals, never binary floats.
//! - **Interchange**: [`MoneyRecord`] is the sole wire/storage shape, and
//!   [`Money`] serializes through it.
//!
//! ## Example
//!
//! ```
//! use moneta::{Money, MoneyError, RoundingMode};
//!
//! let subtotal = Money::usd("19.99")?;
//! let tax = subtotal.times("0.0825")?.round_to_minor_unit(RoundingMode::HalfUp);
//! let total = subtotal.plus(&tax)?;
//!
//! assert_eq!(total.to_string(), "21.64 USD");
//! assert!(total.gt(&subtotal)?);
//!
//! // Cross-currency combination is an error, not a guess.
//! let eur = Money::new("19.99", "EUR")?;
//! assert!(matches!(total.plus(&eur), Err(MoneyError::CurrencyMismatch { .. })));
//! # Ok::<(), moneta::MoneyError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod currency;
pub mod error;
pub mod money;
pub mod operand;
pub mod record;
pub mod rounding;

pub use currency::Currency;
pub use error::{MoneyError, MoneyResult};
pub use money::Money;
pub use operand::{Operand, RawAmount};
pub use record::MoneyRecord;
pub use rounding::RoundingMode;

#[cfg(test)]
mod tests;
