//! # Rounding Modes
//!
//! Closed enumeration of the rounding policies a monetary value supports.
//!
//! The wire names (`"down"`, `"half-even"`, `"half-up"`, `"up"`) match the
//! historical interchange format.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Tie-breaking rule applied when reducing fractional digits.
///
/// The default is [`HalfUp`](RoundingMode::HalfUp), the conventional
/// commercial rounding rule.
///
/// # Examples
///
/// ```
/// use moneta::{Money, RoundingMode};
///
/// let price = Money::usd("18.50").unwrap();
/// let up = price.round_to_major_unit(RoundingMode::HalfUp);
/// let even = price.round_to_major_unit(RoundingMode::HalfEven);
///
/// assert_eq!(up.to_fixed(0), "19");
/// assert_eq!(even.to_fixed(0), "18");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Truncate toward zero.
    Down,

    /// Round to nearest; ties go to the even neighbor (banker's rounding).
    HalfEven,

    /// Round to nearest; ties go away from zero.
    #[default]
    HalfUp,

    /// Round away from zero.
    Up,
}

impl RoundingMode {
    /// The decimal engine strategy implementing this mode.
    pub(crate) const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Down => RoundingStrategy::ToZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::Up => RoundingStrategy::AwayFromZero,
        }
    }
}
