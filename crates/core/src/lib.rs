//! `stockroom-core` — domain foundation building blocks.
//!
//! Identifiers, errors, value objects and form-input validation shared by the
//! parts, products and inventory crates. No IO lives here.

pub mod entity;
pub mod error;
pub mod form;
pub mod id;
pub mod stock;
pub mod value_object;

pub use entity::{Catalogued, Entity};
pub use error::{DomainError, DomainResult, InputError};
pub use form::{RecordForm, RecordInput};
pub use id::{PartId, ProductId};
pub use stock::{Price, StockLevels};
pub use value_object::ValueObject;
