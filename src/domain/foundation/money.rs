//! Money value object (integer cents, strictly positive).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A strictly positive monetary amount in cents.
///
/// Agreement prices are stored as i64 cents, never floats. Currency and
/// display formatting belong to the host application's settings service;
/// this crate deals only in raw amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value, returning an error unless the amount is
    /// strictly positive.
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        if cents <= 0 {
            return Err(ValidationError::not_positive("price", cents));
        }
        Ok(Self(cents))
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cents_accepts_positive_amounts() {
        assert_eq!(Money::from_cents(1).unwrap().cents(), 1);
        assert_eq!(Money::from_cents(50_000).unwrap().cents(), 50_000);
    }

    #[test]
    fn from_cents_rejects_zero() {
        let result = Money::from_cents(0);
        assert_eq!(result, Err(ValidationError::not_positive("price", 0)));
    }

    #[test]
    fn from_cents_rejects_negative() {
        let result = Money::from_cents(-250);
        assert_eq!(result, Err(ValidationError::not_positive("price", -250)));
    }

    #[test]
    fn money_displays_as_decimal() {
        assert_eq!(format!("{}", Money::from_cents(50_000).unwrap()), "500.00");
        assert_eq!(format!("{}", Money::from_cents(1_995).unwrap()), "19.95");
        assert_eq!(format!("{}", Money::from_cents(7).unwrap()), "0.07");
    }

    #[test]
    fn money_serializes_as_cents() {
        let price = Money::from_cents(12_500).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "12500");
    }

    #[test]
    fn money_deserialization_bypasses_validation_is_known() {
        // serde(transparent) deserializes raw cents; adapters re-validate
        // through from_cents when mapping rows.
        let price: Money = serde_json::from_str("100").unwrap();
        assert_eq!(price.cents(), 100);
    }

    #[test]
    fn money_ordering_works() {
        let small = Money::from_cents(100).unwrap();
        let large = Money::from_cents(200).unwrap();
        assert!(small < large);
    }
}
