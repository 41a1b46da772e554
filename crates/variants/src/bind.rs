//! Binds: one selected value per feature, and their canonical identity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use shopdesk_core::{FeatureId, ValueId, ValueObject};

/// What a bind selects for one feature.
///
/// Serialized tagged (`{"value": ..}` / `{"input": ..}`) so raw input that
/// happens to look like an id still round-trips as input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindValue {
    /// A discrete value of the feature.
    Value(ValueId),
    /// A raw string for a free-input feature.
    Input(String),
}

impl BindValue {
    pub fn value_id(&self) -> Option<ValueId> {
        match self {
            BindValue::Value(id) => Some(*id),
            BindValue::Input(_) => None,
        }
    }

    fn canonical(&self) -> String {
        match self {
            BindValue::Value(id) => id.to_string(),
            BindValue::Input(raw) => raw.clone(),
        }
    }
}

/// Feature -> selection mapping for one candidate combination.
///
/// Keys are kept sorted by feature id, which is what makes [`Bind::bind_hash`]
/// independent of the order selections were made in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bind(BTreeMap<FeatureId, BindValue>);

impl Bind {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, feature: FeatureId, value: BindValue) -> Self {
        self.0.insert(feature, value);
        self
    }

    pub fn with_value(self, feature: FeatureId, value: ValueId) -> Self {
        self.with(feature, BindValue::Value(value))
    }

    pub fn with_input(self, feature: FeatureId, raw: impl Into<String>) -> Self {
        self.with(feature, BindValue::Input(raw.into()))
    }

    pub fn insert(&mut self, feature: FeatureId, value: BindValue) -> Option<BindValue> {
        self.0.insert(feature, value)
    }

    pub fn get(&self, feature: &FeatureId) -> Option<&BindValue> {
        self.0.get(feature)
    }

    /// The discrete value bound to `feature`, if any.
    pub fn value_id(&self, feature: &FeatureId) -> Option<ValueId> {
        self.get(feature).and_then(BindValue::value_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureId, &BindValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical identity: a JSON object of `feature id -> value id (or raw
    /// input)` with keys in ascending feature-id order.
    pub fn bind_hash(&self) -> BindHash {
        let mut object = Map::new();
        for (feature, value) in &self.0 {
            object.insert(feature.to_string(), JsonValue::String(value.canonical()));
        }
        BindHash(JsonValue::Object(object).to_string())
    }
}

impl ValueObject for Bind {}

/// Canonical identity string of a [`Bind`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindHash(String);

impl BindHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BindHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for BindHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for BindHash {}
