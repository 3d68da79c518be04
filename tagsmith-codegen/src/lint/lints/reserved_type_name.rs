//! Lint for builder types that collide with names the builder file uses.

use tagsmith_schema::{LookupTables, Schema};

use crate::{
    lint::{Diagnostic, Lint},
    naming::RUST_NAMING,
};

/// Names imported into every builder file.
const IMPORTED_NAMES: &[&str] = &[
    "Attr",
    "Node",
    "NodeBuilder",
    "SetAttr",
    "EventAttr",
    "GlobalAttr",
];

/// Prelude names the builder file relies on. A struct of the same name
/// shadows them in the whole module.
const PRELUDE_NAMES: &[&str] = &["String", "Vec", "Into", "IntoIterator"];

/// Lint that errors when a tag's builder type would be named like a type or
/// trait the generated file already refers to.
pub struct ReservedTypeNameLint;

impl Lint for ReservedTypeNameLint {
    fn name(&self) -> &'static str {
        "reserved-type-name"
    }

    fn description(&self) -> &'static str {
        "Detect tags whose builder type clashes with a name used by the generated file"
    }

    fn check(&self, schema: &Schema, _tables: &LookupTables, diagnostics: &mut Vec<Diagnostic>) {
        for entity in schema.entities() {
            let type_name = RUST_NAMING.type_name(&entity.tag);

            let clash = if IMPORTED_NAMES.contains(&type_name.as_str()) {
                "the imported"
            } else if PRELUDE_NAMES.contains(&type_name.as_str()) {
                "the prelude's"
            } else {
                continue;
            };

            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!(
                        "tag '{}' generates type '{}', which clashes with {} '{}'",
                        entity.tag, type_name, clash, type_name
                    ),
                )
                .at(format!("{}.tag", entity.tag)),
            );
        }
    }
}
