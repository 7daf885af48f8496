//! # Property-Based Tests
//!
//! Property tests over the monetary value contract: arithmetic inverses,
//! projection consistency, round-trips, and comparison coherence.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use proptest::prelude::*;

use crate::{Currency, Money, MoneyError, RoundingMode};
use rust_decimal::Decimal;

/// Strategy for amounts at minor-unit granularity, positive and negative.
fn cent_amounts() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a small set of currency codes.
fn currencies() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::new("USD")),
        Just(Currency::new("EUR")),
        Just(Currency::new("GBP")),
        Just(Currency::new("JPY")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Addition is commutative: a + b == b + a
    #[test]
    fn plus_is_commutative(a in cent_amounts(), b in cent_amounts()) {
        let a = Money::usd(a).unwrap();
        let b = Money::usd(b).unwrap();
        prop_assert_eq!(a.plus(&b).unwrap(), b.plus(&a).unwrap());
    }

    /// Subtraction inverts addition exactly: (a + b) - b == a
    #[test]
    fn plus_minus_inverse(a in cent_amounts(), b in cent_amounts()) {
        let a = Money::usd(a).unwrap();
        let b = Money::usd(b).unwrap();
        let result = a.plus(&b).unwrap().minus(&b).unwrap();
        prop_assert!(result.equals(&a));
    }

    /// Zero is the additive identity: a + 0 == a
    #[test]
    fn zero_is_additive_identity(a in cent_amounts()) {
        let a = Money::usd(a).unwrap();
        prop_assert_eq!(a.plus(&Money::zero("USD")).unwrap(), a);
    }

    /// Scaling by one is the multiplicative identity: a * 1 == a
    #[test]
    fn times_one_is_identity(a in cent_amounts()) {
        let a = Money::usd(a).unwrap();
        prop_assert_eq!(a.times(1).unwrap(), a);
    }

    /// Reconstructing from the minor-unit projection yields an equal value.
    #[test]
    fn minor_major_consistency(a in cent_amounts(), currency in currencies()) {
        let money = Money::new(a, currency.clone()).unwrap();
        let back = Money::from_minor_units(money.minor_units().unwrap(), currency).unwrap();
        prop_assert!(back.equals(&money));
    }

    /// The interchange record round-trips to an equal value.
    #[test]
    fn record_round_trip(a in cent_amounts(), currency in currencies()) {
        let money = Money::new(a, currency).unwrap();
        let back = Money::from_record(money.to_record().unwrap()).unwrap();
        prop_assert_eq!(back, money);
    }

    /// Serde round-trips through the record shape.
    #[test]
    fn serde_round_trip(a in cent_amounts(), currency in currencies()) {
        let money = Money::new(a, currency).unwrap();
        let json = serde_json::to_string(&money).expect("serialize");
        let back: Money = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back, money);
    }

    /// Ordering agrees with the underlying decimal ordering.
    #[test]
    fn ordering_consistent_with_decimal(a in cent_amounts(), b in cent_amounts()) {
        let money_a = Money::usd(a).unwrap();
        let money_b = Money::usd(b).unwrap();
        prop_assert_eq!(money_a.lt(&money_b).unwrap(), a < b);
        prop_assert_eq!(money_a.gt(&money_b).unwrap(), a > b);
        prop_assert_eq!(money_a.try_cmp(&money_b).unwrap(), a.cmp(&b));
    }

    /// Same amount in different currencies: equality is false, ordering errs.
    #[test]
    fn cross_currency_contract(a in cent_amounts()) {
        let usd = Money::usd(a).unwrap();
        let eur = Money::new(a, "EUR").unwrap();

        prop_assert!(!usd.equals(&eur));
        let lt_mismatch = matches!(usd.lt(&eur), Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(lt_mismatch);
        let plus_mismatch = matches!(usd.plus(&eur), Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(plus_mismatch);
    }

    /// Rounding to minor units is idempotent for every mode.
    #[test]
    fn minor_rounding_is_idempotent(
        a in cent_amounts(),
        mode in prop_oneof![
            Just(RoundingMode::Down),
            Just(RoundingMode::HalfEven),
            Just(RoundingMode::HalfUp),
            Just(RoundingMode::Up),
        ],
    ) {
        let money = Money::usd(a).unwrap();
        let once = money.round_to_minor_unit(mode);
        let twice = once.round_to_minor_unit(mode);
        prop_assert_eq!(once, twice);
    }
}
