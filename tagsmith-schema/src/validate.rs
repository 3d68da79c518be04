//! Validation utilities for tags and attribute names.

use miette::SourceSpan;

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords (2021 edition)
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords (may be used in future)
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Validate that a tag can be used verbatim as a Rust module and function name.
/// Returns None if valid, Some(reason) if invalid.
///
/// Unlike attribute names, tags are not sanitized, so dashes are rejected.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("a tag must start with an ASCII letter or underscore"),
        None => return Some("a tag cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("a tag may contain only ASCII letters, digits, and underscores");
    }

    if name == "_" {
        return Some("'_' alone is not a usable identifier");
    }

    None
}

/// Validate an attribute name.
/// Returns None if valid, Some(reason) if invalid.
///
/// Attribute names are embedded in string literals as-is and sanitized into
/// method names, so dashes are allowed but not at the start.
pub(crate) fn validate_attribute(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("an attribute must start with an ASCII letter or underscore"),
        None => return Some("an attribute cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-')) {
        return Some("an attribute may contain only ASCII letters, digits, underscores, and dashes");
    }

    if name == "_" {
        return Some("'_' alone is not a usable method name");
    }

    None
}

/// Find the spans of every `"tag": "<name>"` value in the JSON source.
///
/// The span covers the string contents, without the quotes.
pub(crate) fn find_tag_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    let quoted = format!("\"{}\"", name);

    for (key_pos, _) in src.match_indices("\"tag\"") {
        let rest = &src[key_pos + "\"tag\"".len()..];
        let trimmed = rest.trim_start();
        let Some(after_colon) = trimmed.strip_prefix(':') else {
            continue;
        };
        let value = after_colon.trim_start();
        if value.starts_with(&quoted) {
            let start = src.len() - value.len() + 1;
            spans.push(SourceSpan::from((start, name.len())));
        }
    }

    spans
}

/// Find the span of a quoted string anywhere in the source (less precise).
pub(crate) fn find_string_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        assert!(validate_identifier("div").is_none());
        assert!(validate_identifier("h1").is_none());
        assert!(validate_identifier("my_tag").is_none());
        assert!(validate_identifier("_private").is_none());
    }

    #[test]
    fn test_invalid_tags() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("my-tag").is_some());
        assert!(validate_identifier("font face").is_some());
    }

    #[test]
    fn test_lone_underscore_is_rejected() {
        assert!(validate_identifier("_").is_some());
        assert!(validate_attribute("_").is_some());
        assert!(validate_identifier("__").is_none());
        assert!(validate_attribute("_x").is_none());
    }

    #[test]
    fn test_keywords() {
        assert!(is_rust_keyword("type"));
        assert!(is_rust_keyword("loop"));
        assert!(is_rust_keyword("Self"));
        assert!(!is_rust_keyword("div"));
        assert!(!is_rust_keyword("main"));
    }

    #[test]
    fn test_attribute_names() {
        assert!(validate_attribute("href").is_none());
        assert!(validate_attribute("accept-charset").is_none());
        assert!(validate_attribute("http-equiv").is_none());
        assert!(validate_attribute("").is_some());
        assert!(validate_attribute("-x").is_some());
        assert!(validate_attribute("on:click").is_some());
    }

    #[test]
    fn test_find_tag_spans() {
        let src = r#"[{"tag": "a", "attr": ["a"]}, {"tag":"a"}]"#;
        let spans = find_tag_spans(src, "a");

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].offset(), 10);
        assert_eq!(&src[spans[1].offset()..spans[1].offset() + 1], "a");
        assert_eq!(spans[1].len(), 1);
    }

    #[test]
    fn test_find_string_span() {
        let src = r#"{"attr": ["src", "alt"]}"#;
        let span = find_string_span(src, "alt").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "alt");
    }
}
