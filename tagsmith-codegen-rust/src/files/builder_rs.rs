use std::path::{Path, PathBuf};

use tagsmith_core::{FileRules, GeneratedFile};

/// One entity's builder file, `<tag>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderRs {
    pub tag: String,
    pub content: String,
}

impl BuilderRs {
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
        }
    }

    /// Path relative to the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.tag)
    }
}

impl GeneratedFile for BuilderRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
