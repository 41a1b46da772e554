use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use shopdesk_core::{AggregateRoot, FeatureId, ProductId, find_by_id};

use crate::feature::Feature;

/// Aggregate root: Product.
///
/// Only the fields the variant engine reads are modelled here; names, media,
/// categories and the like belong to the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    /// Base price in smallest currency unit (e.g. cents).
    base_price: i64,
    /// Total declared stock; `None` means unlimited.
    #[serde(default)]
    total_stock: Option<u64>,
    #[serde(default)]
    features: Vec<Feature>,
}

impl Product {
    pub fn new(id: ProductId, base_price: i64) -> Self {
        Self {
            id,
            base_price,
            total_stock: None,
            features: Vec::new(),
        }
    }

    pub fn with_total_stock(mut self, total_stock: u64) -> Self {
        self.total_stock = Some(total_stock);
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn base_price(&self) -> i64 {
        self.base_price
    }

    pub fn total_stock(&self) -> Option<u64> {
        self.total_stock
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Look up a feature by id.
    pub fn feature(&self, id: &FeatureId) -> Option<&Feature> {
        find_by_id(&self.features, id)
    }

    /// Change the declared total stock. Not part of the content version:
    /// combinations do not depend on it.
    pub fn set_total_stock(&mut self, total_stock: Option<u64>) {
        self.total_stock = total_stock;
    }

    /// Edit one feature in place. Returns `false` if there is no such feature.
    pub fn edit_feature(&mut self, id: &FeatureId, edit: impl FnOnce(&mut Feature)) -> bool {
        match self.features.iter_mut().find(|f| f.id == *id) {
            Some(feature) => {
                edit(feature);
                true
            }
            None => false,
        }
    }

    pub fn replace_features(&mut self, features: Vec<Feature>) {
        self.features = features;
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    /// Hash of the feature list (features, values and their order).
    ///
    /// Base price and declared stock are excluded; nothing memoized against
    /// this version reads them.
    fn content_version(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.features.hash(&mut hasher);
        hasher.finish()
    }
}
