//! Dedup decision engine.
//!
//! Decides, per desired statement, whether it would duplicate a statement the
//! entity already carries. Only item-valued statements can be deduplicated by
//! value; a non-item property that already has any stored statement is
//! conservatively treated as satisfied.

use tracing::debug;

use crate::model::{EntityStatements, StatementDescriptor, Value};

/// The outcome for one desired statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The statement is genuinely new and should be compiled.
    Add,
    /// The statement is already recorded (or cannot be compared) and is
    /// dropped.
    Skip,
}

/// Decides whether a desired statement should be added.
///
/// Evaluated independently per statement: the decision never consults other
/// desired statements in the same batch, so repeated evaluation against the
/// same stored set is idempotent.
pub fn decide(desired: &StatementDescriptor, existing: &EntityStatements) -> Decision {
    let Some(current) = existing.get(&desired.property) else {
        return Decision::Add;
    };

    let Value::Item { item } = &desired.value else {
        debug!(
            property = %desired.property,
            "skipping: property already has a statement and the desired value is not comparable"
        );
        return Decision::Skip;
    };

    if current
        .iter()
        .any(|statement| statement.item_id() == Some(item))
    {
        debug!(property = %desired.property, item = %item, "skipping: already recorded");
        Decision::Skip
    } else {
        Decision::Add
    }
}

/// Filters a desired list down to the statements that should be added.
pub fn select_new<'a>(
    desired: &'a [StatementDescriptor],
    existing: &EntityStatements,
) -> Vec<&'a StatementDescriptor> {
    desired
        .iter()
        .filter(|statement| decide(statement, existing) == Decision::Add)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityId, ExistingStatement, PropertyId, StatementDescriptor, Value};

    fn item_statement(property: &str, item: &str) -> StatementDescriptor {
        StatementDescriptor::new(
            PropertyId::new(property),
            Value::Item {
                item: EntityId::new(item),
            },
        )
    }

    fn stored_item(property: &str, item: &str) -> EntityStatements {
        EntityStatements::from_iter([(
            PropertyId::new(property),
            vec![ExistingStatement::item(EntityId::new(item))],
        )])
    }

    #[test]
    fn test_absent_property_always_adds() {
        let existing = stored_item("P195", "Q190804");
        let statements = [
            item_statement("P31", "Q3305213"),
            StatementDescriptor::new(
                PropertyId::new("P217"),
                Value::String {
                    text: "SK-A-1115".to_string(),
                },
            ),
            StatementDescriptor::new(
                PropertyId::new("P571"),
                Value::PointInTime {
                    year: Some(1642),
                    month: None,
                    day: None,
                    precision: None,
                },
            ),
            StatementDescriptor::new(PropertyId::new("P170"), Value::Unknown),
        ];
        for statement in &statements {
            assert_eq!(decide(statement, &existing), Decision::Add);
        }
    }

    #[test]
    fn test_item_dedup_by_value() {
        let existing = stored_item("P31", "Q5");

        assert_eq!(decide(&item_statement("P31", "Q5"), &existing), Decision::Skip);
        assert_eq!(decide(&item_statement("P31", "Q7"), &existing), Decision::Add);

        // No item id to compare against.
        let unknown = StatementDescriptor::new(PropertyId::new("P31"), Value::Unknown);
        assert_eq!(decide(&unknown, &existing), Decision::Skip);
    }

    #[test]
    fn test_non_item_property_with_existing_statement_skips() {
        let existing = stored_item("P217", "Q1");
        let desired = StatementDescriptor::new(
            PropertyId::new("P217"),
            Value::String {
                text: "different text".to_string(),
            },
        );
        assert_eq!(decide(&desired, &existing), Decision::Skip);
    }

    #[test]
    fn test_multi_valued_property() {
        let existing = EntityStatements::from_iter([(
            PropertyId::new("P180"),
            vec![
                ExistingStatement::item(EntityId::new("Q5")),
                ExistingStatement::item(EntityId::new("Q144")),
            ],
        )]);
        assert_eq!(decide(&item_statement("P180", "Q144"), &existing), Decision::Skip);
        assert_eq!(decide(&item_statement("P180", "Q146"), &existing), Decision::Add);
    }

    #[test]
    fn test_select_new_is_idempotent() {
        let existing = stored_item("P31", "Q5");
        let desired = vec![
            item_statement("P31", "Q5"),
            item_statement("P31", "Q7"),
            item_statement("P195", "Q190804"),
        ];

        let first: Vec<_> = select_new(&desired, &existing);
        let second: Vec<_> = select_new(&desired, &existing);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0], &desired[1]);
        assert_eq!(first[1], &desired[2]);
    }

    #[test]
    fn test_decisions_do_not_consult_other_desired_statements() {
        // Two identical desired statements against an absent property are
        // both accepted; dedup compares against stored statements only.
        let existing = EntityStatements::new();
        let desired = vec![item_statement("P31", "Q5"), item_statement("P31", "Q5")];
        assert_eq!(select_new(&desired, &existing).len(), 2);
    }
}
