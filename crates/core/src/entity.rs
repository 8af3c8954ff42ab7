//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    ///
    /// `Display` must render the form users search by.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// An entity listed by name in the inventory (parts and products).
pub trait Catalogued: Entity {
    fn name(&self) -> &str;
}
