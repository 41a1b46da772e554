use serde::{Deserialize, Serialize};

use shopdesk_core::{Entity, FeatureId, ValueId, find_by_id};

/// How a feature's options are presented and selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Color,
    Icon,
    Text,
    /// Free input: the buyer supplies a raw string instead of picking a value.
    Input,
}

impl FeatureKind {
    /// Discrete kinds select one of the feature's values by id.
    pub fn is_selectable(self) -> bool {
        !matches!(self, FeatureKind::Input)
    }
}

/// One selectable option within a feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Value {
    pub id: ValueId,
    /// Display text (or color code / icon key, depending on the feature kind).
    pub key: String,
    /// Signed delta on top of the product's base price, in minor currency units.
    #[serde(default)]
    pub additional_price: Option<i64>,
    /// Stock ceiling for this value; `None` means unlimited.
    #[serde(default)]
    pub stock: Option<u64>,
    #[serde(default)]
    pub decreases_stock: bool,
    /// Orders are still accepted once stock reaches zero.
    #[serde(default)]
    pub continue_selling: bool,
}

impl Value {
    pub fn new(id: ValueId, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            additional_price: None,
            stock: None,
            decreases_stock: false,
            continue_selling: false,
        }
    }

    pub fn with_additional_price(mut self, additional_price: i64) -> Self {
        self.additional_price = Some(additional_price);
        self
    }

    pub fn with_stock(mut self, stock: u64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_decreases_stock(mut self, decreases_stock: bool) -> Self {
        self.decreases_stock = decreases_stock;
        self
    }

    pub fn with_continue_selling(mut self, continue_selling: bool) -> Self {
        self.continue_selling = continue_selling;
        self
    }
}

impl Entity for Value {
    type Id = ValueId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A named purchasable dimension of a product (e.g. Color, Size).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    pub kind: FeatureKind,
    /// Ordered option list; order drives combination ordering.
    #[serde(default)]
    pub values: Vec<Value>,
    /// Marks the product's display/media feature.
    #[serde(default)]
    pub is_default: bool,
}

impl Feature {
    pub fn new(id: FeatureId, name: impl Into<String>, kind: FeatureKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            values: Vec::new(),
            is_default: false,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.values.push(value);
        self
    }

    pub fn as_display(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Look up a value by id.
    pub fn value(&self, id: &ValueId) -> Option<&Value> {
        find_by_id(&self.values, id)
    }

    pub fn value_ids(&self) -> impl Iterator<Item = ValueId> + '_ {
        self.values.iter().map(|v| v.id)
    }
}

impl Entity for Feature {
    type Id = FeatureId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn vid(n: u128) -> ValueId {
        ValueId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn input_kind_is_not_selectable() {
        assert!(FeatureKind::Color.is_selectable());
        assert!(FeatureKind::Icon.is_selectable());
        assert!(FeatureKind::Text.is_selectable());
        assert!(!FeatureKind::Input.is_selectable());
    }

    #[test]
    fn value_lookup_finds_by_id_only() {
        let feature = Feature::new(FeatureId::from_uuid(Uuid::from_u128(1)), "Color", FeatureKind::Color)
            .with_value(Value::new(vid(10), "Red"))
            .with_value(Value::new(vid(11), "Blue").with_stock(5));

        assert_eq!(feature.value(&vid(11)).map(|v| v.key.as_str()), Some("Blue"));
        assert!(feature.value(&vid(12)).is_none());
        assert_eq!(feature.value_ids().collect::<Vec<_>>(), vec![vid(10), vid(11)]);
    }

    #[test]
    fn value_optional_fields_default_when_absent() {
        let json = format!(r#"{{"id":"{}","key":"Red"}}"#, vid(10));
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.additional_price, None);
        assert_eq!(value.stock, None);
        assert!(!value.decreases_stock);
        assert!(!value.continue_selling);
    }

    #[test]
    fn feature_kind_uses_lowercase_tags() {
        let json = serde_json::to_string(&FeatureKind::Input).unwrap();
        assert_eq!(json, r#""input""#);
    }
}
