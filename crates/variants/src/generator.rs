//! Combination generation: the cartesian product of feature values.
//!
//! Dimensions are taken in the product's feature order; features with no
//! values are dropped so they cannot collapse the product to zero combinations.
//! Output order is the lexicographic order induced by that feature order
//! (first feature varies slowest).

use shopdesk_catalog::Product;
use shopdesk_core::{FeatureId, ValueId};

use crate::bind::{Bind, BindValue};
use crate::error::VariantError;

/// One generation axis: a feature and its value ids, in catalog order.
type Dimension = (FeatureId, Vec<ValueId>);

pub(crate) fn dimensions(product: &Product, include_display_feature: bool) -> Vec<Dimension> {
    product
        .features()
        .iter()
        .filter(|f| include_display_feature || !f.is_default)
        .filter(|f| !f.values.is_empty())
        .map(|f| (f.id, f.value_ids().collect()))
        .collect()
}

/// Number of combinations the dimensions expand to; `None` on overflow.
fn count(dimensions: &[Dimension]) -> Option<u64> {
    if dimensions.is_empty() {
        return Some(0);
    }
    dimensions
        .iter()
        .try_fold(1u64, |acc, (_, values)| acc.checked_mul(values.len() as u64))
}

/// Number of combinations [`generate`] would produce for `product`.
///
/// `None` if the count does not fit in a `u64`.
pub fn cardinality(product: &Product) -> Option<u64> {
    count(&dimensions(product, true))
}

fn expand(dimensions: &[Dimension]) -> Vec<Bind> {
    if dimensions.is_empty() {
        return Vec::new();
    }

    let mut partials = vec![Bind::new()];
    for (feature, values) in dimensions {
        let mut next = Vec::with_capacity(partials.len() * values.len());
        for partial in &partials {
            for value in values {
                next.push(partial.clone().with(*feature, BindValue::Value(*value)));
            }
        }
        partials = next;
    }
    partials
}

/// Every bind of one value per (non-empty) feature.
///
/// Unbounded: cost is the product of the value counts. Use
/// [`generate_bounded`] when the catalog is not trusted to be small.
pub fn generate(product: &Product) -> Vec<Bind> {
    let binds = expand(&dimensions(product, true));
    tracing::debug!(product_id = %product.id_typed(), combinations = binds.len(), "generated combinations");
    binds
}

/// Like [`generate`], but fails before allocating if the result would exceed
/// `limit` combinations.
pub fn generate_bounded(product: &Product, limit: usize) -> Result<Vec<Bind>, VariantError> {
    generate_with(product, Some(limit), true)
}

pub(crate) fn generate_with(
    product: &Product,
    limit: Option<usize>,
    include_display_feature: bool,
) -> Result<Vec<Bind>, VariantError> {
    let dims = dimensions(product, include_display_feature);

    if let Some(limit) = limit {
        match count(&dims) {
            None => {
                tracing::warn!(product_id = %product.id_typed(), limit, "combination count overflows");
                return Err(VariantError::CombinationCountOverflow { limit });
            }
            Some(requested) if requested > limit as u64 => {
                tracing::warn!(
                    product_id = %product.id_typed(),
                    limit,
                    requested,
                    "combination ceiling exceeded"
                );
                return Err(VariantError::TooManyCombinations { limit, requested });
            }
            Some(_) => {}
        }
    }

    let binds = expand(&dims);
    tracing::debug!(product_id = %product.id_typed(), combinations = binds.len(), "generated combinations");
    Ok(binds)
}
