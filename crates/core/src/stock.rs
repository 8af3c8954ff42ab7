//! Stock levels and unit price: the value objects shared by parts and products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::value_object::ValueObject;

/// On-hand quantity with its allowed range.
///
/// Records accept any combination once constructed. The accepted-input rules
/// (`0 < min < max`, `min <= stock <= max`) are checked by [`StockLevels::validate`]
/// before a form is saved, never on direct mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockLevels {
    pub stock: i32,
    pub min: i32,
    pub max: i32,
}

impl ValueObject for StockLevels {}

impl StockLevels {
    pub fn new(stock: i32, min: i32, max: i32) -> Self {
        Self { stock, min, max }
    }

    /// Check the accepted-input rules.
    ///
    /// The range is checked before the stock, so a form with both problems
    /// reports `InvalidMin`.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.min <= 0 || self.min >= self.max {
            return Err(InputError::InvalidMin);
        }
        if self.stock < self.min || self.stock > self.max {
            return Err(InputError::InvalidStock);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Non-negative unit price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, InputError> {
        if amount < Decimal::ZERO {
            return Err(InputError::NegativePrice);
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn accepts_stock_on_either_bound() {
        assert!(StockLevels::new(1, 1, 25).is_valid());
        assert!(StockLevels::new(25, 1, 25).is_valid());
    }

    #[test]
    fn rejects_non_positive_min() {
        assert_eq!(StockLevels::new(0, 0, 10).validate(), Err(InputError::InvalidMin));
        assert_eq!(StockLevels::new(0, -3, 10).validate(), Err(InputError::InvalidMin));
    }

    #[test]
    fn rejects_min_equal_to_max() {
        assert_eq!(StockLevels::new(5, 5, 5).validate(), Err(InputError::InvalidMin));
    }

    #[test]
    fn range_error_wins_over_stock_error() {
        // Both the range and the stock are wrong here.
        assert_eq!(StockLevels::new(100, 10, 2).validate(), Err(InputError::InvalidMin));
    }

    #[test]
    fn rejects_stock_outside_range() {
        assert_eq!(StockLevels::new(0, 1, 10).validate(), Err(InputError::InvalidStock));
        assert_eq!(StockLevels::new(11, 1, 10).validate(), Err(InputError::InvalidStock));
    }

    #[test]
    fn price_rejects_negative_amounts() {
        let amount = Decimal::from_str("-0.01").unwrap();
        assert_eq!(Price::new(amount), Err(InputError::NegativePrice));
    }

    #[test]
    fn price_accepts_zero_and_keeps_scale() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
        let price = Price::new(Decimal::from_str("5.99").unwrap()).unwrap();
        assert_eq!(price.to_string(), "5.99");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: validate() agrees with the written rules for every input.
            #[test]
            fn validate_matches_rules(stock in -50i32..200, min in -50i32..200, max in -50i32..200) {
                let levels = StockLevels::new(stock, min, max);
                let expected = 0 < min && min < max && min <= stock && stock <= max;
                prop_assert_eq!(levels.is_valid(), expected);
            }
        }
    }
}
