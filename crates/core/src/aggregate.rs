//! Aggregate root trait for catalog models.

/// Aggregate root marker + minimal interface.
///
/// The catalog does not event-source anything, so there is no stream revision.
/// `content_version()` is derived from the aggregate's children and is the key
/// derived computations (e.g. variant combinations) are memoized against.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Fingerprint of the aggregate's memoization-relevant content.
    ///
    /// Equal content yields equal versions, however the aggregate was built or
    /// loaded.
    fn content_version(&self) -> u64;
}
