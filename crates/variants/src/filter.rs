//! Narrow an aggregated combination list by a partial per-feature selection.

use std::collections::{HashMap, HashSet};

use shopdesk_core::{FeatureId, ValueId};

use crate::aggregator::Combination;

/// Feature -> accepted value ids. Missing features and empty sets accept anything.
pub type Selection = HashMap<FeatureId, HashSet<ValueId>>;

/// Whether `combination` satisfies every non-empty constraint in `selection`.
pub fn matches(combination: &Combination, selection: &Selection) -> bool {
    selection
        .iter()
        .filter(|(_, accepted)| !accepted.is_empty())
        .all(|(feature, accepted)| {
            combination
                .bind
                .value_id(feature)
                .is_some_and(|value| accepted.contains(&value))
        })
}

/// Subset of `combinations` matching `selection`, in input order.
pub fn filter<'a>(combinations: &'a [Combination], selection: &Selection) -> Vec<&'a Combination> {
    combinations
        .iter()
        .filter(|c| matches(c, selection))
        .collect()
}
