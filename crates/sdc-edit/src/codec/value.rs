//! Value snak compilation.
//!
//! Converts one typed value description into the wire snak structure, one
//! routine per value kind, plus the qualifier compiler that groups qualifier
//! snaks by property.

use std::collections::BTreeMap;

use tracing::trace;

use crate::error::CompileError;
use crate::model::{
    DataValue, EntityId, EntityIdValue, MonolingualTextValue, PropertyId, QualifierDescriptor,
    QuantityValue, Snak, SnakDataType, SnakType, TimeValue, Value,
};
use crate::util::datetime::encode_time;
use crate::vocab::entity_iri;

/// Compiles a value description into its snak.
///
/// Returns `Ok(None)` only for point-in-time values with no usable date; the
/// caller drops that statement and continues. Structural problems (an item id
/// with no numeric part) are errors.
pub fn compile_value_snak(
    property: &PropertyId,
    value: &Value,
) -> Result<Option<Snak>, CompileError> {
    match value {
        Value::Item { item } => item_snak(property, item).map(Some),
        Value::String { text } => Ok(Some(string_snak(property, text))),
        Value::Quantity { value, unit } => Ok(Some(quantity_snak(property, value, unit))),
        Value::MonolingualText { text, language } => {
            Ok(Some(monolingual_text_snak(property, text, language)))
        }
        Value::PointInTime {
            year,
            month,
            day,
            precision,
        } => Ok(time_snak(property, *year, *month, *day, *precision)),
        Value::Unknown => Ok(Some(unknown_snak(property))),
    }
}

/// Compiles an entity reference snak carrying the bare numeric id and the
/// full id string.
pub fn item_snak(property: &PropertyId, item: &EntityId) -> Result<Snak, CompileError> {
    let numeric_id = item.numeric_id().ok_or_else(|| CompileError::InvalidEntityId {
        id: item.as_str().to_string(),
    })?;
    Ok(Snak {
        snaktype: SnakType::Value,
        property: property.clone(),
        datatype: SnakDataType::WikibaseItem,
        datavalue: Some(DataValue::EntityId(EntityIdValue {
            numeric_id,
            id: item.clone(),
        })),
    })
}

/// Compiles a plain string snak.
pub fn string_snak(property: &PropertyId, text: &str) -> Snak {
    Snak {
        snaktype: SnakType::Value,
        property: property.clone(),
        datatype: SnakDataType::String,
        datavalue: Some(DataValue::String(text.to_string())),
    }
}

/// Compiles a quantity snak; the unit is rendered as a full entity IRI.
pub fn quantity_snak(property: &PropertyId, amount: &str, unit: &EntityId) -> Snak {
    Snak {
        snaktype: SnakType::Value,
        property: property.clone(),
        datatype: SnakDataType::Quantity,
        datavalue: Some(DataValue::Quantity(QuantityValue {
            amount: amount.to_string(),
            unit: entity_iri(unit),
        })),
    }
}

/// Compiles a monolingual text snak.
pub fn monolingual_text_snak(property: &PropertyId, text: &str, language: &str) -> Snak {
    Snak {
        snaktype: SnakType::Value,
        property: property.clone(),
        datatype: SnakDataType::MonolingualText,
        datavalue: Some(DataValue::MonolingualText(MonolingualTextValue {
            text: text.to_string(),
            language: language.to_string(),
        })),
    }
}

/// Compiles a url snak. Only the reference builder emits these; url is not a
/// declarable statement kind.
pub fn url_snak(property: &PropertyId, url: &str) -> Snak {
    Snak {
        snaktype: SnakType::Value,
        property: property.clone(),
        datatype: SnakDataType::Url,
        datavalue: Some(DataValue::String(url.to_string())),
    }
}

/// Compiles a point-in-time snak, or `None` when the date is unproducible.
pub fn time_snak(
    property: &PropertyId,
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    precision: Option<u8>,
) -> Option<Snak> {
    encode_time(year, month, day, precision).map(|time| time_value_snak(property, time))
}

/// Wraps an already-encoded time value in its snak.
pub fn time_value_snak(property: &PropertyId, time: TimeValue) -> Snak {
    Snak {
        snaktype: SnakType::Value,
        property: property.clone(),
        datatype: SnakDataType::Time,
        datavalue: Some(DataValue::Time(time)),
    }
}

/// Compiles a `somevalue` snak: the property applies but the value is
/// deliberately unrecorded.
pub fn unknown_snak(property: &PropertyId) -> Snak {
    Snak {
        snaktype: SnakType::SomeValue,
        property: property.clone(),
        datatype: SnakDataType::WikibaseItem,
        datavalue: None,
    }
}

/// Compiles qualifier descriptions into a property → snak-list grouping.
///
/// Valid qualifier kinds are Item, Quantity, String, and PointInTime; any
/// other kind yields no snak and is dropped without error, as is a
/// point-in-time qualifier with no usable date. Multiple qualifiers on the
/// same property keep their order under that property's key. Returns `None`
/// when nothing was produced.
pub fn compile_qualifiers(
    qualifiers: &[QualifierDescriptor],
) -> Result<Option<BTreeMap<PropertyId, Vec<Snak>>>, CompileError> {
    let mut grouped: BTreeMap<PropertyId, Vec<Snak>> = BTreeMap::new();

    for qualifier in qualifiers {
        let snak = match &qualifier.value {
            Value::Item { item } => Some(item_snak(&qualifier.property, item)?),
            Value::Quantity { value, unit } => {
                Some(quantity_snak(&qualifier.property, value, unit))
            }
            Value::String { text } => Some(string_snak(&qualifier.property, text)),
            Value::PointInTime {
                year,
                month,
                day,
                precision,
            } => time_snak(&qualifier.property, *year, *month, *day, *precision),
            Value::MonolingualText { .. } | Value::Unknown => {
                trace!(
                    property = %qualifier.property,
                    kind = %qualifier.value.kind(),
                    "dropping qualifier of unsupported kind"
                );
                None
            }
        };

        if let Some(snak) = snak {
            grouped.entry(qualifier.property.clone()).or_default().push(snak);
        }
    }

    Ok(if grouped.is_empty() { None } else { Some(grouped) })
}
