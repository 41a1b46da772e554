//! Value object trait: equality by value, not identity.
//!
//! Derived catalog data (a variant selection, its canonical hash, an aggregated
//! combination) has no identity of its own: two instances built from the same
//! catalog snapshot are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one from the catalog.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct BindHash(String);
///
/// impl ValueObject for BindHash {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
