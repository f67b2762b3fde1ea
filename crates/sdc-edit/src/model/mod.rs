//! Data model types for structured-data edits.
//!
//! This module contains the core types the compiler works with:
//! - Identifiers (entity and property id strings)
//! - Value descriptions (typed, caller-declared)
//! - Wire structures (snaks, claims, references, the payload)
//! - Read-side stored statements
//! - Builders (ergonomic construction)

pub mod builder;
pub mod claim;
pub mod existing;
pub mod id;
pub mod value;

pub use builder::{QualifiersBuilder, StatementsBuilder};
pub use claim::{
    Claim, ClaimType, DataValue, EditPayload, EntityIdValue, MonolingualTextValue, QuantityValue,
    Rank, Reference, Snak, SnakDataType, SnakType, TimeValue,
};
pub use existing::{EntityStatements, ExistingEntityRef, ExistingSnak, ExistingStatement, ExistingValue};
pub use id::{EntityId, PropertyId};
pub use value::{QualifierDescriptor, StatementDescriptor, Value, ValueKind};
