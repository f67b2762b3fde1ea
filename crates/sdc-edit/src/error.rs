//! Error types for statement compilation and payload encoding.

use thiserror::Error;

use crate::model::{PropertyId, ValueKind};

/// Error during statement compilation.
///
/// Structural errors are fatal to the whole compile call: no partial payload
/// is produced. Data-shape gaps (a point-in-time value without a usable date)
/// are not errors; the affected statement is dropped and compilation
/// continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("datatype mismatch for {property}: declared {declared}, registry expects {expected}")]
    DatatypeMismatch {
        property: PropertyId,
        declared: ValueKind,
        expected: ValueKind,
    },

    #[error("unrecognized value kind: {kind:?}")]
    UnrecognizedValueKind { kind: String },

    #[error("entity id {id:?} has no numeric part")]
    InvalidEntityId { id: String },
}

/// Error during payload encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("payload serialization failed: {0}")]
    Serialization(String),
}
