//! Inventory module.
//!
//! [`InventoryStore`] owns every part and product in memory and never fails;
//! [`InventoryService`] layers the add/modify/delete workflows on top of it,
//! validating form input before anything reaches the store.

pub mod search;
pub mod service;
pub mod store;

pub use search::{filter_by_fragment, matches_fragment};
pub use service::InventoryService;
pub use store::{AssociatedPart, InventoryStore};
