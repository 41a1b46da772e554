//! Shared catalog used by the unit tests.
//!
//! Color{Red(unlimited), Blue(stock 5, +200)} x Size{S(unlimited), M(stock 10, +300)},
//! base price 1000, declared stock 20.

use shopdesk_catalog::{Feature, FeatureKind, Product, Value};
use shopdesk_core::{FeatureId, ProductId, ValueId};
use uuid::Uuid;

pub fn fid(n: u128) -> FeatureId {
    FeatureId::from_uuid(Uuid::from_u128(n))
}

pub fn vid(n: u128) -> ValueId {
    ValueId::from_uuid(Uuid::from_u128(n))
}

pub fn product_id() -> ProductId {
    ProductId::from_uuid(Uuid::from_u128(0xC0FFEE))
}

pub fn color() -> FeatureId {
    fid(1)
}

pub fn size() -> FeatureId {
    fid(2)
}

pub fn red() -> ValueId {
    vid(10)
}

pub fn blue() -> ValueId {
    vid(11)
}

pub fn small() -> ValueId {
    vid(20)
}

pub fn medium() -> ValueId {
    vid(21)
}

pub fn color_feature() -> Feature {
    Feature::new(color(), "Color", FeatureKind::Color)
        .with_value(Value::new(red(), "Red"))
        .with_value(
            Value::new(blue(), "Blue")
                .with_stock(5)
                .with_additional_price(200)
                .with_decreases_stock(true),
        )
}

pub fn size_feature() -> Feature {
    Feature::new(size(), "Size", FeatureKind::Text)
        .with_value(Value::new(small(), "S").with_continue_selling(true))
        .with_value(Value::new(medium(), "M").with_stock(10).with_additional_price(300))
}

pub fn shirt(total_stock: u64) -> Product {
    Product::new(product_id(), 1000)
        .with_total_stock(total_stock)
        .with_feature(color_feature())
        .with_feature(size_feature())
}
