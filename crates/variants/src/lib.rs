//! Variant combination & stock allocation engine.
//!
//! Pure, synchronous computations over an immutable [`Product`] snapshot:
//! - [`generator`]: cartesian product of feature values into [`Bind`]s
//! - [`aggregator`]: price delta, stock ceiling and selling policy per bind
//! - [`reconciler`]: per-combination stock vs the product's declared total
//! - [`filter`]: narrow combinations by a partial per-feature selection
//!
//! No IO, no shared state. [`CombinationCache`] is the only stateful piece and
//! it is owned by the caller.
//!
//! [`Product`]: shopdesk_catalog::Product

pub mod aggregator;
pub mod bind;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod generator;
pub mod overrides;
pub mod reconciler;

pub use aggregator::{Combination, aggregate};
pub use bind::{Bind, BindHash, BindValue};
pub use cache::CombinationCache;
pub use config::EngineConfig;
pub use engine::VariantEngine;
pub use error::VariantError;
pub use filter::{Selection, filter};
pub use generator::{cardinality, generate, generate_bounded};
pub use overrides::{CombinationOverride, apply_overrides};
pub use reconciler::{Reconciliation, ReconciliationStatus, reconcile};

#[cfg(test)]
pub(crate) mod fixtures;
