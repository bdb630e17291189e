//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their attributes.
///
/// Measurements and catalog entries are value objects: two requests carrying
/// the same seven numbers are the same input, and must classify the same way.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
