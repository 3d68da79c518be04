//! Check operation - schema validation.

use std::path::Path;

use tagsmith_codegen::{Linter, Severity};
use tagsmith_schema::{LookupTables, Schema};

use super::describe;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint over the loaded schema and sorts the diagnostics by
/// severity. Load-time errors never reach this point.
pub fn check(
    schema: &Schema,
    tables: &LookupTables,
    config_path: &Path,
    schema_path: &Path,
) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for diag in Linter::new().check(schema, tables) {
        let msg = describe(&diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        schema_path: schema_path.to_path_buf(),
        entity_count: schema.len(),
        errors,
        warnings,
    }
}
