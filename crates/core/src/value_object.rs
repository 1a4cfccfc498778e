//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their contents.
///
/// A password digest or a price is a value object: two of them holding the
/// same bytes are interchangeable, and neither has a lifecycle of its own.
/// "Changing" one means building a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
