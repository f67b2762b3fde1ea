//! Read-side types for an entity's currently stored statements.
//!
//! The transport layer fetches entity data with `wbgetentities`; the dedup
//! engine only needs the stored statements keyed by property, and within
//! them only the main snak's entity id when the value is item-shaped.
//! Deserialization is deliberately lenient: datavalue types this crate does
//! not compile are tolerated and ignored.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::model::{EntityId, PropertyId};

/// An entity's stored statements, keyed by property.
///
/// Deserializes directly from the `statements` object of an entity response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EntityStatements {
    statements: FxHashMap<PropertyId, Vec<ExistingStatement>>,
}

impl EntityStatements {
    /// Creates an empty statement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored statements for a property, if the property is
    /// present at all.
    pub fn get(&self, property: &PropertyId) -> Option<&[ExistingStatement]> {
        self.statements.get(property).map(Vec::as_slice)
    }

    /// Returns true when the entity has any statement for the property.
    ///
    /// Batch drivers use this to pre-check gating properties such as
    /// P6243 "digital representation of" before compiling anything.
    pub fn has_property(&self, property: &PropertyId) -> bool {
        self.statements.contains_key(property)
    }

    /// Inserts the stored statements for one property.
    pub fn insert(&mut self, property: PropertyId, statements: Vec<ExistingStatement>) {
        self.statements.insert(property, statements);
    }

    /// Returns true when no property has stored statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl FromIterator<(PropertyId, Vec<ExistingStatement>)> for EntityStatements {
    fn from_iter<I: IntoIterator<Item = (PropertyId, Vec<ExistingStatement>)>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

/// One stored statement. Only the main snak is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ExistingStatement {
    pub mainsnak: ExistingSnak,
}

impl ExistingStatement {
    /// Builds a stored item-valued statement, for fixtures and callers that
    /// assemble statement sets by hand.
    pub fn item(id: EntityId) -> Self {
        Self {
            mainsnak: ExistingSnak {
                datavalue: Some(ExistingValue::EntityId(ExistingEntityRef { id })),
            },
        }
    }

    /// Returns the stored value's entity id when the value is item-shaped.
    pub fn item_id(&self) -> Option<&EntityId> {
        match self.mainsnak.datavalue.as_ref()? {
            ExistingValue::EntityId(entity) => Some(&entity.id),
            ExistingValue::Other => None,
        }
    }
}

/// The main snak of a stored statement. `datavalue` is absent for
/// `somevalue`/`novalue` snaks.
#[derive(Debug, Clone, Deserialize)]
pub struct ExistingSnak {
    #[serde(default)]
    pub datavalue: Option<ExistingValue>,
}

/// A stored datavalue, read only far enough to compare entity ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ExistingValue {
    #[serde(rename = "wikibase-entityid")]
    EntityId(ExistingEntityRef),
    #[serde(other)]
    Other,
}

/// An entity reference inside a stored datavalue.
#[derive(Debug, Clone, Deserialize)]
pub struct ExistingEntityRef {
    pub id: EntityId,
}
