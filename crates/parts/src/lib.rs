//! Parts domain module.
//!
//! A part is either made in-house (identified by the machine that produces it)
//! or bought from an outside company. Both kinds share the same record fields
//! and live in the same inventory collection.

pub mod form;
pub mod part;

pub use form::{NewPart, PartForm};
pub use part::{Part, PartSource, SourceKind};
