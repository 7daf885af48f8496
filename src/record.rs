//! # Interchange Record
//!
//! The serialized record shape consumed and produced by monetary values.
//!
//! This is the sole wire/storage contract: a major-unit string, a minor-unit
//! integer string, and a currency code. On input the major-unit field wins
//! when both are present; a record carrying neither amount field is invalid.
//!
//! # Examples
//!
//! ```
//! use moneta::{Money, MoneyRecord};
//!
//! let record: MoneyRecord =
//!     serde_json::from_str(r#"{"minorUnits":"2000","currency":"EUR"}"#).unwrap();
//! let money = Money::from_record(record).unwrap();
//! assert_eq!(money.to_string(), "20.00 EUR");
//! ```

use crate::currency::Currency;
use crate::error::MoneyError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Serialized form of a monetary value.
///
/// Produced by [`Money::to_record`] with both amount fields populated;
/// accepted by [`Money::from_record`] with either one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyRecord {
    /// Amount in major units, e.g. `"20.00"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_units: Option<String>,

    /// Amount in minor units as an integer string, e.g. `"2000"`.
    /// Required when `major_units` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_units: Option<String>,

    /// Currency code.
    pub currency: Currency,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Money::from_record(record)
    }
}
