//! Configured entry point bundling the four engine operations.

use shopdesk_catalog::Product;

use crate::aggregator::{Combination, aggregate};
use crate::bind::Bind;
use crate::config::EngineConfig;
use crate::error::VariantError;
use crate::filter::{Selection, filter};
use crate::generator::generate_with;
use crate::reconciler::{Reconciliation, reconcile};

#[derive(Debug, Clone, Default)]
pub struct VariantEngine {
    config: EngineConfig,
}

impl VariantEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate binds, honouring the configured ceiling and display-feature policy.
    pub fn generate(&self, product: &Product) -> Result<Vec<Bind>, VariantError> {
        generate_with(
            product,
            self.config.max_combinations,
            self.config.include_display_feature,
        )
    }

    pub fn aggregate(&self, bind: &Bind, product: &Product) -> Combination {
        aggregate(bind, product)
    }

    /// Generate and aggregate in one pass.
    pub fn combinations(&self, product: &Product) -> Result<Vec<Combination>, VariantError> {
        Ok(self
            .generate(product)?
            .iter()
            .map(|bind| aggregate(bind, product))
            .collect())
    }

    pub fn reconcile(&self, product: &Product, combinations: &[Combination]) -> Reconciliation {
        reconcile(product, combinations)
    }

    pub fn filter<'a>(&self, combinations: &'a [Combination], selection: &Selection) -> Vec<&'a Combination> {
        filter(combinations, selection)
    }
}
