//! Generate command report data structures.

use std::path::PathBuf;

use tagsmith_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of schema entities.
    pub entity_count: usize,

    /// Warning messages from the schema lints.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, relative to the output directory.
    pub files: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Entities", &self.entity_count.to_string());
        out.key_value("Generated", &written.output_dir.display().to_string());
        out.newline();

        out.section(&format!("Files ({})", written.files.len()));
        for file in &written.files {
            out.added_item(file);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            entity_count: 1,
            warnings: vec!["attribute 'title' hides a method".to_string()],
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("src/builders"),
                files: vec!["abbr.rs".to_string(), "registry.rs".to_string()],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: attribute 'title' hides a method",
                "Entities: 1",
                "Generated: src/builders",
                "",
                "Files (2):",
                "  + abbr.rs",
                "  + registry.rs",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            entity_count: 1,
            warnings: Vec::new(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "br.rs".to_string(),
                    content: "pub fn br() -> Br {}".to_string(),
                }],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── br.rs ──",
                "pub fn br() -> Br {}",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
