//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Two value objects with the same attributes are the same value; a record's
/// `StockLevels` or `Price` can be swapped wholesale without any notion of
/// identity. Compare with [`crate::Entity`], where the id decides sameness.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
