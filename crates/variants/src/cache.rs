//! Per-caller memoization of aggregated combinations.
//!
//! Keyed by product id and the product's content version (a fingerprint of
//! its features and values): a list is reused until that content changes,
//! however the product was built or reloaded. Base price and declared stock
//! are not part of a combination, so they do not invalidate it.

use std::collections::HashMap;
use std::sync::Arc;

use shopdesk_catalog::Product;
use shopdesk_core::{AggregateRoot, ProductId};

use crate::aggregator::Combination;
use crate::engine::VariantEngine;
use crate::error::VariantError;

#[derive(Debug, Clone)]
struct CachedCombinations {
    content_version: u64,
    combinations: Arc<[Combination]>,
}

#[derive(Debug, Default)]
pub struct CombinationCache {
    engine: VariantEngine,
    entries: HashMap<ProductId, CachedCombinations>,
}

impl CombinationCache {
    pub fn new(engine: VariantEngine) -> Self {
        Self {
            engine,
            entries: HashMap::new(),
        }
    }

    pub fn engine(&self) -> &VariantEngine {
        &self.engine
    }

    /// Cached combinations for `product`, regenerating when its content changes.
    ///
    /// A rejected generation (ceiling) leaves any previous entry untouched.
    pub fn get_or_generate(&mut self, product: &Product) -> Result<Arc<[Combination]>, VariantError> {
        let product_id = product.id_typed();
        let content_version = product.content_version();

        if let Some(entry) = self.entries.get(&product_id) {
            if entry.content_version == content_version {
                tracing::debug!(product_id = %product_id, content_version, "combination cache hit");
                return Ok(Arc::clone(&entry.combinations));
            }
        }

        let combinations: Arc<[Combination]> = self.engine.combinations(product)?.into();
        self.entries.insert(
            product_id,
            CachedCombinations {
                content_version,
                combinations: Arc::clone(&combinations),
            },
        );
        Ok(combinations)
    }

    pub fn invalidate(&mut self, product_id: &ProductId) -> bool {
        self.entries.remove(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
