use std::collections::{HashMap, HashSet};

use serde_json::json;
use shopdesk_catalog::Product;
use shopdesk_core::{FeatureId, ValueId};
use shopdesk_variants::{
    Bind, CombinationCache, CombinationOverride, EngineConfig, ReconciliationStatus, Selection,
    VariantEngine, VariantError, apply_overrides, generate,
};
use uuid::Uuid;

const COLOR: u128 = 1;
const SIZE: u128 = 2;
const RED: u128 = 10;
const BLUE: u128 = 11;
const SMALL: u128 = 20;
const MEDIUM: u128 = 21;

fn fid(n: u128) -> FeatureId {
    FeatureId::from_uuid(Uuid::from_u128(n))
}

fn vid(n: u128) -> ValueId {
    ValueId::from_uuid(Uuid::from_u128(n))
}

/// Product as the catalog service sends it.
fn product_payload(total_stock: u64) -> Product {
    let payload = json!({
        "id": Uuid::from_u128(0xC0FFEE).to_string(),
        "base_price": 1000,
        "total_stock": total_stock,
        "features": [
            {
                "id": Uuid::from_u128(COLOR).to_string(),
                "name": "Color",
                "kind": "color",
                "values": [
                    { "id": Uuid::from_u128(RED).to_string(), "key": "#ff0000" },
                    { "id": Uuid::from_u128(BLUE).to_string(), "key": "#0000ff", "additional_price": 200, "stock": 5 }
                ]
            },
            {
                "id": Uuid::from_u128(SIZE).to_string(),
                "name": "Size",
                "kind": "text",
                "values": [
                    { "id": Uuid::from_u128(SMALL).to_string(), "key": "S" },
                    { "id": Uuid::from_u128(MEDIUM).to_string(), "key": "M", "additional_price": 300, "stock": 10 }
                ]
            },
            { "id": Uuid::from_u128(3).to_string(), "name": "Material", "kind": "text", "values": [] }
        ]
    });
    serde_json::from_value(payload).unwrap()
}

#[test]
fn bulk_edit_round_trip() {
    shopdesk_observability::init();

    let engine = VariantEngine::new(EngineConfig::default());
    let product = product_payload(20);

    let mut combos = engine.combinations(&product).unwrap();
    let prices: Vec<_> = combos.iter().map(|c| c.price(product.base_price())).collect();
    assert_eq!(prices, vec![1000, 1300, 1200, 1500]);
    assert_eq!(
        engine.reconcile(&product, &combos).status(),
        ReconciliationStatus::Balanced
    );

    // Merchant narrows to Blue and edits stock for those rows.
    let selection: Selection = HashMap::from([(fid(COLOR), HashSet::from([vid(BLUE)]))]);
    let overrides: HashMap<_, _> = engine
        .filter(&combos, &selection)
        .into_iter()
        .map(|c| {
            (
                c.bind_hash.clone(),
                CombinationOverride {
                    stock: Some(3),
                    ..Default::default()
                },
            )
        })
        .collect();
    assert_eq!(overrides.len(), 2);

    assert_eq!(apply_overrides(&mut combos, &overrides), 2);
    let result = engine.reconcile(&product, &combos);
    assert_eq!(result.allocated, 16);
    assert_eq!(result.status().banner(), Some("DESEQUILIBRE"));
}

#[test]
fn over_allocation_is_reported_not_rejected() {
    let engine = VariantEngine::default();
    let product = product_payload(15);

    let combos = engine.combinations(&product).unwrap();
    let result = engine.reconcile(&product, &combos);

    assert_eq!(result.allocated, 20);
    assert_eq!(result.declared, Some(15));
    assert!(result.mismatched);
    assert!(result.over_allocated);
}

#[test]
fn hashes_survive_regeneration_and_catalog_edits() {
    let mut product = product_payload(20);
    let before: Vec<_> = generate(&product).iter().map(Bind::bind_hash).collect();

    // Renaming a value key does not change identity.
    product.edit_feature(&fid(SIZE), |f| f.values[0].key = "Small".to_string());
    let after: Vec<_> = generate(&product).iter().map(Bind::bind_hash).collect();

    assert_eq!(before, after);
}

#[test]
fn stale_bind_degrades_after_value_removal() {
    let engine = VariantEngine::default();
    let mut product = product_payload(20);
    let bind = Bind::new()
        .with_value(fid(COLOR), vid(BLUE))
        .with_value(fid(SIZE), vid(MEDIUM));

    product.edit_feature(&fid(COLOR), |f| f.values.retain(|v| v.id != vid(BLUE)));
    let combination = engine.aggregate(&bind, &product);

    assert_eq!(combination.stock, Some(10));
    assert_eq!(combination.price(product.base_price()), 1300);
    assert_eq!(combination.labels.keys().collect::<Vec<_>>(), vec![&fid(SIZE)]);
}

#[test]
fn cache_respects_engine_ceiling() {
    let engine = VariantEngine::new(EngineConfig::default().with_max_combinations(Some(3)));
    let mut cache = CombinationCache::new(engine);

    let err = cache.get_or_generate(&product_payload(20)).unwrap_err();
    assert!(matches!(err, VariantError::TooManyCombinations { limit: 3, requested: 4 }));
    assert!(cache.is_empty());
}
