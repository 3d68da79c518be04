//! Identifier sanitizing for generated code.

use tagsmith_core::capitalize_first;

/// Language-specific naming conventions.
///
/// Maps raw schema names (tags, attribute names) to identifiers that are
/// safe to emit in the target language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a tag into the builder type name (e.g., "img" -> "Img")
    pub tag_to_type: fn(&str) -> String,
    /// Separator found in raw names (e.g., '-' in "accept-charset")
    pub separator: char,
    /// What the separator becomes in identifiers
    pub separator_replacement: char,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Map a raw attribute name to a method identifier.
    ///
    /// Reserved words are escaped; every other name has its separators
    /// replaced. Total: every input yields an identifier string.
    pub fn sanitize(&self, raw: &str) -> String {
        if self.is_reserved(raw) {
            (self.escape_reserved)(raw)
        } else {
            raw.replace(self.separator, &self.separator_replacement.to_string())
        }
    }

    /// Builder type name for a tag.
    pub fn type_name(&self, tag: &str) -> String {
        (self.tag_to_type)(tag)
    }
}

/// Keywords that `r#` cannot escape.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

fn escape_rust_reserved(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else {
        format!("r#{}", name)
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    tag_to_type: capitalize_first,
    separator: '-',
    separator_replacement: '_',
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};
