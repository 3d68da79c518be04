use std::path::{Path, PathBuf};

use eyre::Result;

/// Header placed at the top of registry files that are regenerated on every run.
pub const GENERATED_HEADER: &str = "// Generated by tagsmith. Do not edit.";

/// Trait for types that represent a generated file.
///
/// Generated files are owned by the generator: every write replaces
/// whatever is on disk.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body
    fn render(&self) -> String;

    /// Render the full file content, including the header from [`FileRules`]
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{}\n\n{}", header, self.render()),
            None => self.render(),
        }
    }

    /// Write the file to disk, creating parent directories as needed
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.contents())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Rules that determine how a file is rendered
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Prepend a header line to the rendered content.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}
