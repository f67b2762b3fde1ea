//! Builder API for ergonomic statement list construction.
//!
//! # Example
//!
//! ```rust
//! use sdc_edit::model::builder::StatementsBuilder;
//! use sdc_edit::model::EntityId;
//! use sdc_edit::vocab::properties;
//!
//! let statements = StatementsBuilder::new()
//!     .item(properties::instance_of(), EntityId::new("Q3305213"))
//!     .string(properties::inventory_number(), "SK-C-5")
//!     .point_in_time(properties::inception(), Some(1642), None, None)
//!     .build();
//! ```

use crate::model::{
    EntityId, PropertyId, QualifierDescriptor, StatementDescriptor, Value,
};

/// Builder for a list of desired statements.
#[derive(Debug, Clone, Default)]
pub struct StatementsBuilder {
    statements: Vec<StatementDescriptor>,
}

impl StatementsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item-valued statement.
    pub fn item(mut self, property: PropertyId, item: EntityId) -> Self {
        self.statements
            .push(StatementDescriptor::new(property, Value::Item { item }));
        self
    }

    /// Adds a string-valued statement.
    pub fn string(mut self, property: PropertyId, text: impl Into<String>) -> Self {
        self.statements.push(StatementDescriptor::new(
            property,
            Value::String { text: text.into() },
        ));
        self
    }

    /// Adds a quantity statement.
    pub fn quantity(
        mut self,
        property: PropertyId,
        value: impl Into<String>,
        unit: EntityId,
    ) -> Self {
        self.statements.push(StatementDescriptor::new(
            property,
            Value::Quantity {
                value: value.into(),
                unit,
            },
        ));
        self
    }

    /// Adds a monolingual text statement.
    pub fn monolingual_text(
        mut self,
        property: PropertyId,
        text: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        self.statements.push(StatementDescriptor::new(
            property,
            Value::MonolingualText {
                text: text.into(),
                language: language.into(),
            },
        ));
        self
    }

    /// Adds a point-in-time statement with inferred precision.
    pub fn point_in_time(
        mut self,
        property: PropertyId,
        year: Option<i32>,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Self {
        self.statements.push(StatementDescriptor::new(
            property,
            Value::PointInTime {
                year,
                month,
                day,
                precision: None,
            },
        ));
        self
    }

    /// Adds an unknown-value statement.
    pub fn unknown(mut self, property: PropertyId) -> Self {
        self.statements
            .push(StatementDescriptor::new(property, Value::Unknown));
        self
    }

    /// Adds a statement with qualifiers built through a closure.
    pub fn qualified<F>(mut self, property: PropertyId, value: Value, f: F) -> Self
    where
        F: FnOnce(QualifiersBuilder) -> QualifiersBuilder,
    {
        let qualifiers = f(QualifiersBuilder::new()).build();
        self.statements.push(StatementDescriptor {
            property,
            value,
            qualifiers: if qualifiers.is_empty() {
                None
            } else {
                Some(qualifiers)
            },
        });
        self
    }

    /// Adds a raw descriptor directly.
    pub fn statement(mut self, statement: StatementDescriptor) -> Self {
        self.statements.push(statement);
        self
    }

    /// Returns the number of statements added so far.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true when no statement was added.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Builds the final descriptor list.
    pub fn build(self) -> Vec<StatementDescriptor> {
        self.statements
    }
}

/// Builder for a statement's qualifiers.
#[derive(Debug, Clone, Default)]
pub struct QualifiersBuilder {
    qualifiers: Vec<QualifierDescriptor>,
}

impl QualifiersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item-valued qualifier.
    pub fn item(mut self, property: PropertyId, item: EntityId) -> Self {
        self.qualifiers
            .push(QualifierDescriptor::new(property, Value::Item { item }));
        self
    }

    /// Adds a string-valued qualifier.
    pub fn string(mut self, property: PropertyId, text: impl Into<String>) -> Self {
        self.qualifiers.push(QualifierDescriptor::new(
            property,
            Value::String { text: text.into() },
        ));
        self
    }

    /// Adds a quantity qualifier.
    pub fn quantity(
        mut self,
        property: PropertyId,
        value: impl Into<String>,
        unit: EntityId,
    ) -> Self {
        self.qualifiers.push(QualifierDescriptor::new(
            property,
            Value::Quantity {
                value: value.into(),
                unit,
            },
        ));
        self
    }

    /// Adds a point-in-time qualifier with inferred precision.
    pub fn point_in_time(
        mut self,
        property: PropertyId,
        year: Option<i32>,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Self {
        self.qualifiers.push(QualifierDescriptor::new(
            property,
            Value::PointInTime {
                year,
                month,
                day,
                precision: None,
            },
        ));
        self
    }

    fn build(self) -> Vec<QualifierDescriptor> {
        self.qualifiers
    }
}
