//! Property → expected value kind registry.
//!
//! A pure lookup used to validate caller input before compilation. Absence of
//! a property is not an error; it only means no expectation is registered.
//! Branching during compilation always uses the descriptor's own declared
//! kind, never the registry.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::error::CompileError;
use crate::model::{PropertyId, ValueKind};
use crate::vocab::properties;

/// An immutable mapping from property id to its expected value kind.
///
/// New properties are data: register them with [`add_property`] instead of
/// extending code.
///
/// [`add_property`]: PropertyRegistry::add_property
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    properties: FxHashMap<PropertyId, ValueKind>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a property with its expected value kind.
    pub fn add_property(&mut self, property: PropertyId, kind: ValueKind) {
        self.properties.insert(property, kind);
    }

    /// Registers a property from its kind's canonical name, as carried in
    /// data files.
    pub fn add_property_named(
        &mut self,
        property: PropertyId,
        kind: &str,
    ) -> Result<(), CompileError> {
        self.properties.insert(property, kind.parse()?);
        Ok(())
    }

    /// Returns the expected kind for a property, if one is registered.
    pub fn expected_kind(&self, property: &PropertyId) -> Option<ValueKind> {
        self.properties.get(property).copied()
    }

    /// Returns the number of registered properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true when no property is registered.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns the built-in registry for common Commons artwork properties.
    pub fn commons() -> &'static PropertyRegistry {
        &COMMONS
    }
}

impl FromIterator<(PropertyId, ValueKind)> for PropertyRegistry {
    fn from_iter<I: IntoIterator<Item = (PropertyId, ValueKind)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

lazy_static! {
    static ref COMMONS: PropertyRegistry = PropertyRegistry::from_iter([
        (properties::instance_of(), ValueKind::Item),
        (properties::creator(), ValueKind::Item),
        (properties::collection(), ValueKind::Item),
        (properties::inventory_number(), ValueKind::String),
        (properties::catalog_code(), ValueKind::String),
        (properties::inception(), ValueKind::PointInTime),
        (properties::location_of_creation(), ValueKind::Item),
        (properties::height(), ValueKind::Quantity),
        (properties::width(), ValueKind::Quantity),
    ]);
}
