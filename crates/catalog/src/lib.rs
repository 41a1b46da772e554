//! Catalog model.
//!
//! Plain data describing a product, its purchasable features and their values.
//! Everything that derives from it (variant combinations, stock reconciliation)
//! lives in `shopdesk-variants`.

pub mod feature;
pub mod product;

pub use feature::{Feature, FeatureKind, Value};
pub use product::Product;
