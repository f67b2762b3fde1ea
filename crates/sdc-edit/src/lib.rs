//! sdc-edit: statement compiler and dedup engine for Wikibase
//! structured-data edits.
//!
//! Given a declarative list of desired statements and an entity's currently
//! stored statements, this crate decides which desired statements are
//! genuinely new, compiles each into the native statement/snak wire
//! structure, attaches a standard provenance reference, and produces a single
//! edit payload ready for submission.
//!
//! # Overview
//!
//! The pipeline is a pure, synchronous transformation:
//!
//! 1. The dedup engine filters desired statements against the stored set.
//! 2. Each accepted statement is validated against the property registry and
//!    compiled into a snak (dates go through precision and calendar
//!    inference).
//! 3. Qualifiers and the shared provenance reference are attached, and the
//!    claims fold into an [`EditPayload`] — or an absent payload when
//!    nothing survived.
//!
//! Session handling, entity lookup, and the write request belong to the
//! calling transport layer; this crate performs no I/O.
//!
//! # Quick Start
//!
//! ```rust
//! use sdc_edit::codec::{build_reference, ClaimCompiler, RetrievalDate};
//! use sdc_edit::model::{EntityId, EntityStatements, StatementsBuilder};
//! use sdc_edit::registry::PropertyRegistry;
//! use sdc_edit::vocab::properties;
//!
//! # fn main() -> Result<(), sdc_edit::CompileError> {
//! let desired = StatementsBuilder::new()
//!     .item(properties::instance_of(), EntityId::new("Q3305213"))
//!     .point_in_time(properties::inception(), Some(1642), None, None)
//!     .build();
//!
//! // Stored statements normally come from the entity read; empty here.
//! let existing = EntityStatements::new();
//!
//! let reference = build_reference(
//!     &EntityId::new("Q190804"),
//!     "https://www.rijksmuseum.nl/nl/collectie/SK-C-5",
//!     &RetrievalDate::new(2023, 11, 4),
//! )?;
//!
//! let payload = ClaimCompiler::new(PropertyRegistry::commons())
//!     .with_references(reference)
//!     .compile(&desired, &existing)?;
//! assert!(payload.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (ids, values, snaks, claims, payload)
//! - [`codec`]: Compilation into the claim wire format and JSON encoding
//! - [`dedup`]: Keep/drop decisions against stored statements
//! - [`registry`]: Property → expected value kind lookup
//! - [`vocab`]: Well-known property and entity ids
//! - [`error`]: Error types
//!
//! # Error contract
//!
//! Structural errors (datatype mismatch, unrecognized kind, malformed entity
//! id) abort the entire compile call with no partial payload. A
//! point-in-time statement with no usable date is dropped individually and
//! compilation continues.

pub mod codec;
pub mod dedup;
pub mod error;
pub mod model;
pub mod registry;
pub mod util;
pub mod vocab;

// Re-export commonly used types at crate root
pub use codec::{build_reference, encode_edit, ClaimCompiler, RetrievalDate};
pub use dedup::{decide, select_new, Decision};
pub use error::{CompileError, EncodeError};
pub use model::{
    Claim, EditPayload, EntityId, EntityStatements, ExistingStatement, PropertyId,
    QualifierDescriptor, Reference, Snak, StatementDescriptor, StatementsBuilder, Value, ValueKind,
};
pub use registry::PropertyRegistry;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
