//! Schema lints.
//!
//! Lints look for schemas that load fine but would produce broken or
//! confusing builders. Errors stop generation; warnings are reported only.

mod diagnostic;
pub mod lints;

use eyre::{Result, bail};
use tagsmith_schema::{LookupTables, Schema};

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{DuplicateAttributeLint, ReservedTypeNameLint, ShadowedAttributeLint};

/// A lint that checks the schema for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the schema and add any diagnostics.
    fn check(&self, schema: &Schema, tables: &LookupTables, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over a schema.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateAttributeLint),
                Box::new(ReservedTypeNameLint),
                Box::new(ShadowedAttributeLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint and collect the diagnostics.
    pub fn check(&self, schema: &Schema, tables: &LookupTables) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(schema, tables, &mut diagnostics);
        }
        diagnostics
    }

    /// Run every lint, failing if any produced an error.
    ///
    /// On success the (non-error) diagnostics are returned for reporting.
    pub fn run(&self, schema: &Schema, tables: &LookupTables) -> Result<Vec<Diagnostic>> {
        let diagnostics = self.check(schema, tables);
        let errors: Vec<&Diagnostic> = diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .collect();

        if !errors.is_empty() {
            let details: Vec<String> = errors.iter().map(|d| d.to_string()).collect();
            bail!(
                "schema check failed with {} error(s):\n  {}",
                errors.len(),
                details.join("\n  ")
            );
        }

        Ok(diagnostics)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
