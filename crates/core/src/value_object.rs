//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are equal. `Quantity` is the
/// canonical example here: a count of 5 white shells is interchangeable
/// with any other count of 5.
///
/// The trait requires:
/// - **Clone**: values are copied, not referenced
/// - **PartialEq**: compared by attribute values
/// - **Debug**: helpful for logging and test output
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
