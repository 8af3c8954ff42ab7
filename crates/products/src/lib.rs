//! Products domain module.
//!
//! A product is sold as a unit and lists the parts it is assembled from. It
//! refers to those parts by id; the parts themselves belong to the inventory.

pub mod form;
pub mod product;

pub use form::{NewProduct, ProductForm};
pub use product::Product;
