use std::path::{Path, PathBuf};

use tagsmith_codegen::CodeBuilder;
use tagsmith_core::{FileRules, GENERATED_HEADER, GeneratedFile};

/// File name of the registry, relative to the output directory.
pub const REGISTRY_FILE: &str = "registry.rs";

/// The `registry.rs` file declaring every builder module and re-exporting
/// its factory function.
///
/// Meant to be pulled into the hand-written builders module with
/// `include!("registry.rs");`, which keeps `NodeBuilder` and the capability
/// traits out of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRs {
    pub tags: Vec<String>,
}

impl RegistryRs {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        tags.sort();
        Self { tags }
    }
}

impl GeneratedFile for RegistryRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(REGISTRY_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::default().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        CodeBuilder::new()
            .each(&self.tags, |b, tag| b.line(&format!("pub mod {};", tag)))
            .when(!self.tags.is_empty(), |b| b.blank())
            .each(&self.tags, |b, tag| b.line(&format!("pub use {}::{};", tag, tag)))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted() {
        let registry = RegistryRs::new(["p", "a", "img"]);

        assert_eq!(
            registry.render(),
            "pub mod a;\npub mod img;\npub mod p;\n\npub use a::a;\npub use img::img;\npub use p::p;\n"
        );
    }

    #[test]
    fn test_registry_has_generated_header() {
        let registry = RegistryRs::new(["br"]);

        assert!(registry.contents().starts_with(GENERATED_HEADER));
        assert_eq!(
            registry.path(Path::new("out")),
            PathBuf::from("out/registry.rs")
        );
    }

    #[test]
    fn test_empty_registry() {
        assert_eq!(RegistryRs::new(Vec::<String>::new()).render(), "");
    }
}
