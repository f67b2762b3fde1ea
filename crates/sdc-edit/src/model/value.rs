//! Typed value descriptions for desired statements.
//!
//! A [`Value`] is the caller's declaration of what a statement should say,
//! before compilation into the wire snak structure. Each variant carries
//! exactly the fields its kind needs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompileError;
use crate::model::{EntityId, PropertyId};

/// The closed set of value kinds a statement can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Item,
    String,
    Quantity,
    PointInTime,
    MonolingualText,
    Unknown,
}

impl ValueKind {
    /// Returns the kind's canonical name as it appears in job descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Item => "Item",
            ValueKind::String => "String",
            ValueKind::Quantity => "Quantity",
            ValueKind::PointInTime => "Point in time",
            ValueKind::MonolingualText => "Monolingual text",
            ValueKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Item" => Ok(ValueKind::Item),
            "String" => Ok(ValueKind::String),
            "Quantity" => Ok(ValueKind::Quantity),
            "Point in time" => Ok(ValueKind::PointInTime),
            "Monolingual text" => Ok(ValueKind::MonolingualText),
            "Unknown" => Ok(ValueKind::Unknown),
            other => Err(CompileError::UnrecognizedValueKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A typed value description, tagged by its declared datatype.
///
/// The serde representation matches the flat job-description JSON, where the
/// `datatype` field selects the kind and the remaining fields carry the value:
///
/// ```json
/// {"property": "P571", "datatype": "Point in time", "year": 1863}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "datatype")]
pub enum Value {
    /// A reference to another entity.
    Item { item: EntityId },

    /// A plain string.
    String { text: String },

    /// An amount with a unit entity.
    Quantity { value: String, unit: EntityId },

    /// Text in a specific language.
    #[serde(rename = "Monolingual text")]
    MonolingualText { text: String, language: String },

    /// A calendar date of year, month, or day granularity.
    ///
    /// `precision` overrides inference when present and nonzero; see the
    /// date encoder for the inference rules.
    #[serde(rename = "Point in time")]
    PointInTime {
        #[serde(default)]
        year: Option<i32>,
        #[serde(default)]
        month: Option<u8>,
        #[serde(default)]
        day: Option<u8>,
        #[serde(default)]
        precision: Option<u8>,
    },

    /// The property applies but its value is deliberately unrecorded.
    Unknown,
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Item { .. } => ValueKind::Item,
            Value::String { .. } => ValueKind::String,
            Value::Quantity { .. } => ValueKind::Quantity,
            Value::MonolingualText { .. } => ValueKind::MonolingualText,
            Value::PointInTime { .. } => ValueKind::PointInTime,
            Value::Unknown => ValueKind::Unknown,
        }
    }

    /// Returns the item id for Item values, `None` otherwise.
    pub fn item_id(&self) -> Option<&EntityId> {
        match self {
            Value::Item { item } => Some(item),
            _ => None,
        }
    }
}

/// One desired statement: a property, a typed value, and optional qualifiers.
///
/// Owned by the caller and read-only to the compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementDescriptor {
    pub property: PropertyId,
    #[serde(flatten)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifiers: Option<Vec<QualifierDescriptor>>,
}

impl StatementDescriptor {
    /// Creates a descriptor with no qualifiers.
    pub fn new(property: PropertyId, value: Value) -> Self {
        Self {
            property,
            value,
            qualifiers: None,
        }
    }
}

/// A qualifier description: the same shape as a statement minus nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifierDescriptor {
    pub property: PropertyId,
    #[serde(flatten)]
    pub value: Value,
}

impl QualifierDescriptor {
    pub fn new(property: PropertyId, value: Value) -> Self {
        Self { property, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        let kinds = [
            ValueKind::Item,
            ValueKind::String,
            ValueKind::Quantity,
            ValueKind::PointInTime,
            ValueKind::MonolingualText,
            ValueKind::Unknown,
        ];
        for kind in kinds {
            assert_eq!(kind.name().parse::<ValueKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unrecognized_kind() {
        let err = "Globe coordinate".parse::<ValueKind>().unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnrecognizedValueKind { ref kind } if kind == "Globe coordinate"
        ));
    }

    #[test]
    fn test_descriptor_from_job_json() {
        let descriptor: StatementDescriptor = serde_json::from_str(
            r#"{"property": "P31", "datatype": "Item", "item": "Q5"}"#,
        )
        .unwrap();
        assert_eq!(descriptor.property, PropertyId::new("P31"));
        assert_eq!(
            descriptor.value,
            Value::Item {
                item: EntityId::new("Q5")
            }
        );
        assert!(descriptor.qualifiers.is_none());
    }

    #[test]
    fn test_descriptor_point_in_time_partial_fields() {
        let descriptor: StatementDescriptor = serde_json::from_str(
            r#"{"property": "P571", "datatype": "Point in time", "year": 1863}"#,
        )
        .unwrap();
        assert_eq!(
            descriptor.value,
            Value::PointInTime {
                year: Some(1863),
                month: None,
                day: None,
                precision: None,
            }
        );
    }

    #[test]
    fn test_descriptor_with_qualifiers() {
        let descriptor: StatementDescriptor = serde_json::from_str(
            r#"{
                "property": "P195",
                "datatype": "Item",
                "item": "Q190804",
                "qualifiers": [
                    {"property": "P217", "datatype": "String", "text": "SK-A-1115"}
                ]
            }"#,
        )
        .unwrap();
        let qualifiers = descriptor.qualifiers.unwrap();
        assert_eq!(qualifiers.len(), 1);
        assert_eq!(
            qualifiers[0].value,
            Value::String {
                text: "SK-A-1115".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_datatype_string_rejected() {
        let result: Result<StatementDescriptor, _> = serde_json::from_str(
            r#"{"property": "P31", "datatype": "External identifier", "id": "123"}"#,
        );
        assert!(result.is_err());
    }
}
