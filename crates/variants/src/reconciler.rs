//! Stock reconciliation: per-combination stock vs the product's declared total.
//!
//! Diagnostic only. Nothing here mutates stock or rejects data; imbalance is
//! reported for the merchant to resolve.

use serde::{Deserialize, Serialize};

use shopdesk_catalog::Product;

use crate::aggregator::Combination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Sum of finite per-combination stock (unlimited contributes 0).
    pub allocated: u64,
    /// Product's declared total stock; `None` means unlimited.
    pub declared: Option<u64>,
    pub mismatched: bool,
    pub over_allocated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationStatus {
    Balanced,
    Unbalanced,
    OverAllocated,
}

impl ReconciliationStatus {
    /// Warning banner shown to the merchant, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            ReconciliationStatus::Balanced => None,
            ReconciliationStatus::Unbalanced => Some("DESEQUILIBRE"),
            ReconciliationStatus::OverAllocated => Some("SUR-ALLOCATION"),
        }
    }
}

impl Reconciliation {
    pub fn status(&self) -> ReconciliationStatus {
        if self.over_allocated {
            ReconciliationStatus::OverAllocated
        } else if self.mismatched {
            ReconciliationStatus::Unbalanced
        } else {
            ReconciliationStatus::Balanced
        }
    }
}

pub fn reconcile(product: &Product, combinations: &[Combination]) -> Reconciliation {
    let allocated = combinations
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.allocated_stock()));
    let declared = product.total_stock();

    let (mismatched, over_allocated) = match declared {
        None => (false, false),
        Some(declared) => {
            let mismatched = allocated != declared;
            (mismatched, mismatched && allocated > declared)
        }
    };

    tracing::debug!(
        product_id = %product.id_typed(),
        allocated,
        declared = ?declared,
        mismatched,
        over_allocated,
        "reconciled stock"
    );

    Reconciliation {
        allocated,
        declared,
        mismatched,
        over_allocated,
    }
}
