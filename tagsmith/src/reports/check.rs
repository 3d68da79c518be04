//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file (which may not exist).
    pub config_path: PathBuf,
    /// Path to the entity schema.
    pub schema_path: PathBuf,
    /// Number of entities in the schema.
    pub entity_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
            out.key_value_indented("config", &self.config_path.display().to_string());
            out.key_value_indented(
                "entities",
                &format!(
                    "{} entit{}",
                    self.entity_count,
                    if self.entity_count == 1 { "y" } else { "ies" }
                ),
            );
        }
    }
}
