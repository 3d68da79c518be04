//! Shared utility functions for code generation.

/// Uppercase the first character of a string, leaving the rest untouched
/// (e.g., "img" -> "Img", "colgroup" -> "Colgroup", "fooBar" -> "FooBar").
///
/// Multi-segment names are not split: "my-tag" becomes "My-tag".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
