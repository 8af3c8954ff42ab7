//! Raw form input and its validation.
//!
//! Parts and products share five text fields. [`RecordForm::parse`] turns them
//! into typed values or the first [`InputError`] a user should see. Checks run
//! in a fixed order: numeric parsing, name, range, stock, price.

use core::str::FromStr;

use rust_decimal::Decimal;

use crate::error::InputError;
use crate::stock::{Price, StockLevels};

/// Text of the fields common to parts and products, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
}

/// Validated common fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInput {
    pub name: String,
    pub price: Price,
    pub levels: StockLevels,
}

impl RecordForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn parse(&self) -> Result<RecordInput, InputError> {
        let price = parse_field::<Decimal>(&self.price, "price")?;
        let stock = parse_field::<i32>(&self.stock, "stock")?;
        let min = parse_field::<i32>(&self.min, "min")?;
        let max = parse_field::<i32>(&self.max, "max")?;

        if self.name.trim().is_empty() {
            return Err(InputError::EmptyName);
        }

        let levels = StockLevels::new(stock, min, max);
        levels.validate()?;
        let price = Price::new(price)?;

        Ok(RecordInput {
            name: self.name.clone(),
            price,
            levels,
        })
    }
}

/// Parse a trimmed numeric field; blank and malformed text are both "missing".
pub fn parse_field<T: FromStr>(raw: &str, field: &'static str) -> Result<T, InputError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| InputError::MissingValue { field })
}
