//! Wire structures for compiled claims.
//!
//! These types serialize to the exact JSON shape the `wbeditentity` API
//! expects. They are created fresh per compilation and never mutated after
//! construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{EntityId, PropertyId, Value};
use crate::util::datetime::parse_timestamp;
use crate::vocab::ENTITY_IRI_PREFIX;

/// Whether a snak carries a value or marks one as deliberately unrecorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakType {
    Value,
    SomeValue,
}

/// The wire datatype of a snak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakDataType {
    #[serde(rename = "wikibase-item")]
    WikibaseItem,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "quantity")]
    Quantity,
    #[serde(rename = "monolingualtext")]
    MonolingualText,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "url")]
    Url,
}

/// An entity reference datavalue: the bare numeric id plus the full id string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityIdValue {
    #[serde(rename = "numeric-id")]
    pub numeric_id: u64,
    pub id: EntityId,
}

/// A quantity datavalue: amount string plus the unit as a full entity IRI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityValue {
    pub amount: String,
    pub unit: String,
}

/// Text in a specific language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonolingualTextValue {
    pub text: String,
    pub language: String,
}

/// A point-in-time datavalue as produced by the date encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeValue {
    pub time: String,
    pub timezone: i32,
    pub before: i32,
    pub after: i32,
    pub precision: u8,
    pub calendarmodel: String,
}

/// A kind-specific datavalue, dispatched on the wire `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DataValue {
    #[serde(rename = "wikibase-entityid")]
    EntityId(EntityIdValue),
    #[serde(rename = "string")]
    String(String),
    #[serde(rename = "quantity")]
    Quantity(QuantityValue),
    #[serde(rename = "monolingualtext")]
    MonolingualText(MonolingualTextValue),
    #[serde(rename = "time")]
    Time(TimeValue),
}

/// The atomic value-or-absence unit inside a claim, qualifier, or reference.
///
/// The `datatype` field is always consistent with the shape of `datavalue`.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snak {
    pub snaktype: SnakType,
    pub property: PropertyId,
    pub datatype: SnakDataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datavalue: Option<DataValue>,
}

impl Snak {
    /// Recovers the typed value description this snak was compiled from.
    ///
    /// Returns `None` for shapes that have no descriptor form (url snaks,
    /// datatype/datavalue combinations that never leave the compiler).
    pub fn decode(&self) -> Option<Value> {
        if self.snaktype == SnakType::SomeValue {
            return Some(Value::Unknown);
        }
        match (self.datatype, self.datavalue.as_ref()?) {
            (SnakDataType::WikibaseItem, DataValue::EntityId(value)) => Some(Value::Item {
                item: value.id.clone(),
            }),
            (SnakDataType::String, DataValue::String(text)) => Some(Value::String {
                text: text.clone(),
            }),
            (SnakDataType::Quantity, DataValue::Quantity(quantity)) => {
                let unit = quantity.unit.strip_prefix(ENTITY_IRI_PREFIX)?;
                Some(Value::Quantity {
                    value: quantity.amount.clone(),
                    unit: EntityId::parse(unit)?,
                })
            }
            (SnakDataType::MonolingualText, DataValue::MonolingualText(value)) => {
                Some(Value::MonolingualText {
                    text: value.text.clone(),
                    language: value.language.clone(),
                })
            }
            (SnakDataType::Time, DataValue::Time(time)) => {
                let (year, month, day) = parse_timestamp(&time.time)?;
                Some(Value::PointInTime {
                    year: Some(year),
                    month,
                    day,
                    precision: Some(time.precision),
                })
            }
            _ => None,
        }
    }
}

/// Statement priority marker; this compiler always emits `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Normal,
}

/// Claim entity type; always `statement` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Statement,
}

/// One property-value assertion, optionally qualified and referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub mainsnak: Snak,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub rank: Rank,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifiers: Option<BTreeMap<PropertyId, Vec<Snak>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

/// Provenance attached to a claim: grouped snaks plus their serialization
/// order. The grouping map and the order list carry the same property keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub snaks: BTreeMap<PropertyId, Vec<Snak>>,
    #[serde(rename = "snaks-order")]
    pub snaks_order: Vec<PropertyId>,
}

/// The complete edit payload handed to the transport layer.
///
/// `claims` is non-empty by construction: the compiler returns an absent
/// payload instead of an empty claims list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditPayload {
    pub claims: Vec<Claim>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_somevalue_snak_shape() {
        let snak = Snak {
            snaktype: SnakType::SomeValue,
            property: PropertyId::new("P170"),
            datatype: SnakDataType::WikibaseItem,
            datavalue: None,
        };
        assert_eq!(
            serde_json::to_value(&snak).unwrap(),
            json!({
                "snaktype": "somevalue",
                "property": "P170",
                "datatype": "wikibase-item"
            })
        );
    }

    #[test]
    fn test_item_snak_shape() {
        let snak = Snak {
            snaktype: SnakType::Value,
            property: PropertyId::new("P31"),
            datatype: SnakDataType::WikibaseItem,
            datavalue: Some(DataValue::EntityId(EntityIdValue {
                numeric_id: 5,
                id: EntityId::new("Q5"),
            })),
        };
        assert_eq!(
            serde_json::to_value(&snak).unwrap(),
            json!({
                "snaktype": "value",
                "property": "P31",
                "datatype": "wikibase-item",
                "datavalue": {
                    "value": {"numeric-id": 5, "id": "Q5"},
                    "type": "wikibase-entityid"
                }
            })
        );
    }

    #[test]
    fn test_snak_json_roundtrip() {
        let snak = Snak {
            snaktype: SnakType::Value,
            property: PropertyId::new("P2048"),
            datatype: SnakDataType::Quantity,
            datavalue: Some(DataValue::Quantity(QuantityValue {
                amount: "+77".to_string(),
                unit: "http://www.wikidata.org/entity/Q174728".to_string(),
            })),
        };
        let encoded = serde_json::to_string(&snak).unwrap();
        let decoded: Snak = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, snak);
    }

    #[test]
    fn test_decode_unknown() {
        let snak = Snak {
            snaktype: SnakType::SomeValue,
            property: PropertyId::new("P170"),
            datatype: SnakDataType::WikibaseItem,
            datavalue: None,
        };
        assert_eq!(snak.decode(), Some(Value::Unknown));
    }

    #[test]
    fn test_decode_url_has_no_descriptor_form() {
        let snak = Snak {
            snaktype: SnakType::Value,
            property: PropertyId::new("P854"),
            datatype: SnakDataType::Url,
            datavalue: Some(DataValue::String("https://example.org".to_string())),
        };
        assert_eq!(snak.decode(), None);
    }
}
