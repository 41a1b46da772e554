//! Per-bind aggregation: price delta, stock ceiling and selling policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shopdesk_catalog::Product;
use shopdesk_core::{FeatureId, ValueObject};

use crate::bind::{Bind, BindHash, BindValue};

/// A bind plus everything derived from its selected values.
///
/// Ephemeral: recomputed from the catalog whenever it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub bind: Bind,
    pub bind_hash: BindHash,
    /// Feature -> selected value key (or raw input). Stale selections are absent.
    ///
    /// Keyed by id: feature names are display text and need not be unique.
    pub labels: BTreeMap<FeatureId, String>,
    /// Sum of the selected values' price deltas (minor currency units).
    pub additional_price: i64,
    /// Tightest finite stock among the selected values; `None` means unlimited.
    pub stock: Option<u64>,
    pub decreases_stock: bool,
    pub continue_selling: bool,
}

impl Combination {
    /// Display price on top of `base_price`.
    pub fn price(&self, base_price: i64) -> i64 {
        base_price.saturating_add(self.additional_price)
    }

    /// Stock counted as allocated inventory; unlimited counts as zero.
    pub fn allocated_stock(&self) -> u64 {
        self.stock.unwrap_or(0)
    }
}

impl ValueObject for Combination {}

/// Derive a [`Combination`] for `bind` from the product's current catalog.
///
/// Selections that no longer resolve (unknown feature, value id not in the
/// feature any more) are skipped: they add nothing to price or stock and get no
/// label.
pub fn aggregate(bind: &Bind, product: &Product) -> Combination {
    let mut labels = BTreeMap::new();
    let mut additional_price: i64 = 0;
    let mut stock: Option<u64> = None;
    let mut decreases_stock = false;
    let mut continue_selling = false;

    for (feature_id, selected) in bind.iter() {
        let Some(feature) = product.feature(feature_id) else {
            tracing::debug!(feature_id = %feature_id, "skipping stale feature");
            continue;
        };

        if !feature.kind.is_selectable() {
            let raw = match selected {
                BindValue::Input(raw) => raw.clone(),
                BindValue::Value(id) => feature
                    .value(id)
                    .map_or_else(|| id.to_string(), |value| value.key.clone()),
            };
            labels.insert(*feature_id, raw);
            continue;
        }

        let Some(value) = selected.value_id().and_then(|id| feature.value(&id)) else {
            tracing::debug!(feature_id = %feature_id, "skipping stale value");
            continue;
        };

        labels.insert(*feature_id, value.key.clone());
        additional_price = additional_price.saturating_add(value.additional_price.unwrap_or(0));
        if let Some(limit) = value.stock {
            stock = Some(stock.map_or(limit, |current| current.min(limit)));
        }
        decreases_stock |= value.decreases_stock;
        continue_selling |= value.continue_selling;
    }

    Combination {
        bind_hash: bind.bind_hash(),
        bind: bind.clone(),
        labels,
        additional_price,
        stock,
        decreases_stock,
        continue_selling,
    }
}
