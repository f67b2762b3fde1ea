//! Claim assembly and payload encoding.
//!
//! The compiler ties the pipeline together: dedup against the entity's
//! stored statements, registry validation, value snak compilation, qualifier
//! and reference attachment, and the final fold into an edit payload.

use tracing::debug;

use crate::codec::value::{compile_qualifiers, compile_value_snak};
use crate::dedup::select_new;
use crate::error::{CompileError, EncodeError};
use crate::model::{
    Claim, ClaimType, EditPayload, EntityStatements, Rank, Reference, StatementDescriptor,
    ValueKind,
};
use crate::registry::PropertyRegistry;

/// Compiles desired statements into an edit payload.
///
/// Holds the registry used for validation and, optionally, the prebuilt
/// reference list attached to every claim. One compiler instance serves one
/// entity; it keeps no state across `compile` calls.
#[derive(Debug, Clone)]
pub struct ClaimCompiler<'a> {
    registry: &'a PropertyRegistry,
    references: Option<Vec<Reference>>,
}

impl<'a> ClaimCompiler<'a> {
    /// Creates a compiler that attaches no references.
    pub fn new(registry: &'a PropertyRegistry) -> Self {
        Self {
            registry,
            references: None,
        }
    }

    /// Attaches a prebuilt reference list to every compiled claim.
    pub fn with_references(mut self, references: Vec<Reference>) -> Self {
        self.references = Some(references);
        self
    }

    /// Compiles the desired statements that survive dedup into a payload.
    ///
    /// Structural errors abort the whole batch before any claim is produced;
    /// callers must not assume partial progress. Statements whose date is
    /// unproducible are dropped individually. Returns `Ok(None)` when nothing
    /// remains: an empty claims list is never emitted.
    pub fn compile(
        &self,
        desired: &[StatementDescriptor],
        existing: &EntityStatements,
    ) -> Result<Option<EditPayload>, CompileError> {
        let accepted = select_new(desired, existing);

        // Validate the full batch up front so a late mismatch cannot leave
        // half a payload behind.
        for statement in &accepted {
            self.check_datatype(statement)?;
        }

        let mut claims = Vec::with_capacity(accepted.len());
        for statement in accepted {
            let Some(mainsnak) = compile_value_snak(&statement.property, &statement.value)? else {
                debug!(property = %statement.property, "dropping statement without a usable date");
                continue;
            };
            let qualifiers = match &statement.qualifiers {
                Some(qualifiers) => compile_qualifiers(qualifiers)?,
                None => None,
            };
            claims.push(Claim {
                mainsnak,
                claim_type: ClaimType::Statement,
                rank: Rank::Normal,
                qualifiers,
                references: self.references.clone(),
            });
        }

        if claims.is_empty() {
            Ok(None)
        } else {
            Ok(Some(EditPayload { claims }))
        }
    }

    /// Checks a statement's declared kind against the registry.
    ///
    /// The `Unknown` kind overrides the registered expectation; a property
    /// absent from the registry carries no expectation at all.
    fn check_datatype(&self, statement: &StatementDescriptor) -> Result<(), CompileError> {
        let Some(expected) = self.registry.expected_kind(&statement.property) else {
            return Ok(());
        };
        let declared = statement.value.kind();
        if declared != expected && declared != ValueKind::Unknown {
            return Err(CompileError::DatatypeMismatch {
                property: statement.property.clone(),
                declared,
                expected,
            });
        }
        Ok(())
    }
}

/// Encodes a payload as the JSON string submitted as `wbeditentity` data.
pub fn encode_edit(payload: &EditPayload) -> Result<String, EncodeError> {
    serde_json::to_string(payload).map_err(|err| EncodeError::Serialization(err.to_string()))
}
