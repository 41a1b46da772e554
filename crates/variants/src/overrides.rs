//! Merchant overrides keyed by bind hash.
//!
//! Overrides are persisted outside the engine; this only patches a freshly
//! aggregated list so the bulk-edit view shows the merchant's values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::aggregator::Combination;
use crate::bind::BindHash;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationOverride {
    #[serde(default)]
    pub additional_price: Option<i64>,
    #[serde(default)]
    pub stock: Option<u64>,
}

/// Patch combinations whose `bind_hash` has an override. Returns how many matched.
///
/// Overrides for hashes that no longer exist are ignored.
pub fn apply_overrides(
    combinations: &mut [Combination],
    overrides: &HashMap<BindHash, CombinationOverride>,
) -> usize {
    let mut applied = 0;
    for combination in combinations.iter_mut() {
        let Some(patch) = overrides.get(&combination.bind_hash) else {
            continue;
        };
        if let Some(price) = patch.additional_price {
            combination.additional_price = price;
        }
        if let Some(stock) = patch.stock {
            combination.stock = Some(stock);
        }
        applied += 1;
    }

    if applied < overrides.len() {
        tracing::debug!(
            applied,
            stale = overrides.len() - applied,
            "ignored overrides with no matching combination"
        );
    }
    applied
}
