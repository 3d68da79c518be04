//! List operation - entity classification overview.

use tagsmith_codegen::{Classifier, RUST_NAMING};
use tagsmith_schema::{LookupTables, Schema};

use crate::reports::{EntityInfo, ListReport};

/// Execute the list operation.
pub fn list(schema: &Schema, tables: &LookupTables) -> ListReport {
    let classifier = Classifier::new(tables);

    let entities = schema
        .entities()
        .iter()
        .map(|entity| {
            let (flag_attributes, value_attributes) = entity
                .attributes
                .iter()
                .cloned()
                .partition(|attr| classifier.is_boolean_attribute(attr));

            EntityInfo {
                tag: entity.tag.clone(),
                builder: RUST_NAMING.type_name(&entity.tag),
                capabilities: classifier.classify(entity),
                flag_attributes,
                value_attributes,
            }
        })
        .collect();

    ListReport { entities }
}
