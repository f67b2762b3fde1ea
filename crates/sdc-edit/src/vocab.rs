//! Well-known ids from the Wikidata vocabulary.
//!
//! Properties and entities with fixed meanings that the compiler and the
//! built-in registry rely on. New properties are data, not code: nothing here
//! is required to compile a statement for an unlisted property.

use crate::model::{EntityId, PropertyId};

/// Concatenation base for full entity IRIs (quantity units, calendar models).
pub const ENTITY_IRI_PREFIX: &str = "http://www.wikidata.org/entity/";

/// Renders an entity id as its full IRI.
pub fn entity_iri(id: &EntityId) -> String {
    format!("{}{}", ENTITY_IRI_PREFIX, id)
}

/// Well-known properties.
pub mod properties {
    use super::PropertyId;

    /// P31 "instance of".
    pub fn instance_of() -> PropertyId {
        PropertyId::new("P31")
    }

    /// P170 "creator".
    pub fn creator() -> PropertyId {
        PropertyId::new("P170")
    }

    /// P195 "collection".
    pub fn collection() -> PropertyId {
        PropertyId::new("P195")
    }

    /// P217 "inventory number".
    pub fn inventory_number() -> PropertyId {
        PropertyId::new("P217")
    }

    /// P248 "stated in"; reference source item.
    pub fn stated_in() -> PropertyId {
        PropertyId::new("P248")
    }

    /// P528 "catalog code".
    pub fn catalog_code() -> PropertyId {
        PropertyId::new("P528")
    }

    /// P571 "inception".
    pub fn inception() -> PropertyId {
        PropertyId::new("P571")
    }

    /// P813 "retrieved"; reference retrieval date.
    pub fn retrieved() -> PropertyId {
        PropertyId::new("P813")
    }

    /// P854 "reference URL".
    pub fn reference_url() -> PropertyId {
        PropertyId::new("P854")
    }

    /// P1071 "location of creation".
    pub fn location_of_creation() -> PropertyId {
        PropertyId::new("P1071")
    }

    /// P2048 "height".
    pub fn height() -> PropertyId {
        PropertyId::new("P2048")
    }

    /// P2049 "width".
    pub fn width() -> PropertyId {
        PropertyId::new("P2049")
    }

    /// P6243 "digital representation of"; entities already carrying this
    /// statement are typically left untouched by batch jobs.
    pub fn digital_representation_of() -> PropertyId {
        PropertyId::new("P6243")
    }
}

/// Well-known entities.
pub mod entities {
    use super::EntityId;

    /// Q1985727, the proleptic Gregorian calendar.
    pub fn gregorian_calendar() -> EntityId {
        EntityId::new("Q1985727")
    }

    /// Q1985786, the proleptic Julian calendar.
    pub fn julian_calendar() -> EntityId {
        EntityId::new("Q1985786")
    }
}
