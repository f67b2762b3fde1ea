//! String identifiers for entities and properties.
//!
//! Wikibase assigns stable ids: `Q`-prefixed items, `M`-prefixed media
//! entities, and `P`-prefixed properties. Ids are carried as strings on the
//! wire; item ids additionally expose their bare numeric part for the
//! `wikibase-entityid` datavalue shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An entity identifier (`Q5`, `M76543`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an entity id from a caller-supplied string, unchecked.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses and validates an entity id (`Q` or `M` prefix followed by digits).
    pub fn parse(s: &str) -> Option<EntityId> {
        let mut chars = s.chars();
        match chars.next() {
            Some('Q') | Some('M') => {}
            _ => return None,
        }
        let rest = &s[1..];
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the bare numeric part of the id, if it has one.
    ///
    /// `Q5` yields 5; an id without a digit suffix yields `None`.
    pub fn numeric_id(&self) -> Option<u64> {
        let rest = self.0.get(1..)?;
        if rest.is_empty() {
            return None;
        }
        rest.parse().ok()
    }

    /// Returns true for `M`-prefixed media entity ids.
    pub fn is_media(&self) -> bool {
        self.0.starts_with('M')
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A property identifier (`P31`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    /// Creates a property id from a caller-supplied string, unchecked.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses and validates a property id (`P` followed by digits).
    pub fn parse(s: &str) -> Option<PropertyId> {
        let rest = s.strip_prefix('P')?;
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
