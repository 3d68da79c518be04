//! Target-language generator abstraction.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific builder generators.
///
/// Implement this trait to emit builders for another target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs")
    fn file_extension(&self) -> &'static str;

    /// Render every file without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render and write every file into the output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory, in generation order
    pub written: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
