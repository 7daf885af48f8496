//! # Currency Code
//!
//! Opaque currency code value object.
//!
//! This module provides the [`Currency`] type, a newtype wrapper around a
//! code string such as `"USD"` or `"EUR"`. Codes are compared byte-for-byte
//! and never validated against a registry: whether a code is a real ISO 4217
//! currency is the caller's concern.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque currency code.
///
/// Two monetary values are only directly combinable when their currencies
/// compare equal. The default currency is `"USD"`.
///
/// # Examples
///
/// ```
/// use moneta::Currency;
///
/// let eur = Currency::new("EUR");
/// assert_eq!(eur.as_str(), "EUR");
/// assert_eq!(Currency::default(), Currency::new("USD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from a code string.
    ///
    /// The code is stored verbatim; no normalization or validation happens.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self("USD".to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    #[inline]
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    #[inline]
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_usd() {
        assert_eq!(Currency::default().as_str(), "USD");
    }

    #[test]
    fn codes_are_stored_verbatim() {
        // No validation, no case normalization.
        let odd = Currency::new("doubloons");
        assert_eq!(odd.as_str(), "doubloons");
        assert_ne!(odd, Currency::new("DOUBLOONS"));
    }

    #[test]
    fn display_is_the_code() {
        assert_eq!(Currency::new("EUR").to_string(), "EUR");
    }

    #[test]
    fn compares_with_str() {
        assert_eq!(Currency::new("GBP"), "GBP");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&Currency::new("EUR")).unwrap();
        assert_eq!(json, "\"EUR\"");

        let back: Currency = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(back.as_str(), "JPY");
    }
}
