//! Placeholder substitution.
//!
//! A template is plain text containing `$NAME$` markers, where `NAME` is made
//! of ASCII uppercase letters, digits, and underscores. [`render`] replaces
//! every marker with its bound value in a single left-to-right pass.
//! Substituted values are copied verbatim and never rescanned, so composing
//! fragments is just rendering an inner template and binding the result into
//! an outer one.
//!
//! ```
//! use tagsmith_codegen::{Bindings, render};
//!
//! let inner = render("fn $NAME$() {}", &Bindings::new().bind("NAME", "div")).unwrap();
//! let outer = render("$BODY$\n$BODY$", &Bindings::new().bind("BODY", inner)).unwrap();
//!
//! assert_eq!(outer, "fn div() {}\nfn div() {}");
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// Marker delimiting placeholder names.
const DELIMITER: char = '$';

/// Errors raised while rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template references a placeholder with no binding.
    #[error("unbound placeholder `${name}$` in template")]
    Unbound { name: String },

    /// A placeholder marker survived into finished output.
    #[error("placeholder `${name}$` left unresolved in generated output")]
    Unresolved { name: String },
}

/// Placeholder name to substitution text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder (name without delimiters) to a value.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind in place, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Substitute every placeholder in `template`.
///
/// Every occurrence of a name gets the same value. Bindings the template
/// doesn't use are ignored. A placeholder without a binding fails the whole
/// call; no partially substituted text is ever returned.
pub fn render(template: &str, bindings: &Bindings) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(DELIMITER) {
        out.push_str(&rest[..start]);
        let after = &rest[start + DELIMITER.len_utf8()..];

        match placeholder_at(after) {
            Some(name) => {
                let value = bindings.get(name).ok_or_else(|| TemplateError::Unbound {
                    name: name.to_string(),
                })?;
                out.push_str(value);
                rest = &after[name.len() + DELIMITER.len_utf8()..];
            }
            None => {
                // a lone `$` is literal text
                out.push(DELIMITER);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Check that finished output contains no placeholder markers.
pub fn ensure_resolved(text: &str) -> Result<(), TemplateError> {
    match placeholders(text).first() {
        Some(name) => Err(TemplateError::Unresolved {
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

/// Placeholder names in `text`, in order of first occurrence, without duplicates.
pub fn placeholders(text: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(DELIMITER) {
        let after = &rest[start + DELIMITER.len_utf8()..];
        match placeholder_at(after) {
            Some(name) => {
                if !names.contains(&name) {
                    names.push(name);
                }
                rest = &after[name.len() + DELIMITER.len_utf8()..];
            }
            None => rest = after,
        }
    }

    names
}

/// If `s` starts with `NAME$`, return `NAME`.
fn placeholder_at(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !is_name_char(c))?;
    if end > 0 && s[end..].starts_with(DELIMITER) {
        Some(&s[..end])
    } else {
        None
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        let out = render(
            "impl $NAME$ {}\nimpl Other for $NAME$ {}",
            &Bindings::new().bind("NAME", "Div"),
        )
        .unwrap();

        assert_eq!(out, "impl Div {}\nimpl Other for Div {}");
    }

    #[test]
    fn test_template_without_placeholders_is_unchanged() {
        let out = render("pub struct Br;", &Bindings::new()).unwrap();
        assert_eq!(out, "pub struct Br;");
    }

    #[test]
    fn test_unused_bindings_are_ignored() {
        let out = render(
            "$A$",
            &Bindings::new().bind("A", "x").bind("UNUSED", "y"),
        )
        .unwrap();
        assert_eq!(out, "x");
    }

    #[test]
    fn test_unbound_placeholder_fails() {
        let err = render("let x = $MISSING$;", &Bindings::new()).unwrap_err();

        assert_eq!(
            err,
            TemplateError::Unbound {
                name: "MISSING".to_string()
            }
        );
        assert_eq!(err.to_string(), "unbound placeholder `$MISSING$` in template");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let bindings = Bindings::new()
            .bind("OUTER", "$INNER$")
            .bind("INNER", "never");

        let out = render("[$OUTER$]", &bindings).unwrap();
        assert_eq!(out, "[$INNER$]");
    }

    #[test]
    fn test_empty_value() {
        let out = render("a$GAP$b", &Bindings::new().bind("GAP", "")).unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_lone_dollars_are_literal() {
        let bindings = Bindings::new().bind("X", "1");

        assert_eq!(render("$", &bindings).unwrap(), "$");
        assert_eq!(render("cost: $5 and $X$", &bindings).unwrap(), "cost: $5 and 1");
        assert_eq!(render("$lower$", &bindings).unwrap(), "$lower$");
        assert_eq!(render("$$X$", &bindings).unwrap(), "$1");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let bindings = Bindings::new().bind("A", "x").bind("B", "y");
        assert_eq!(render("$A$$B$", &bindings).unwrap(), "xy");
    }

    #[test]
    fn test_composition() {
        let fragment = render(
            "fn $NAME$(self) -> Self { self }",
            &Bindings::new().bind("NAME", "open"),
        )
        .unwrap();
        let file = render(
            "impl $TYPE$ {\n    $FUNS$\n}",
            &Bindings::new().bind("TYPE", "Details").bind("FUNS", fragment),
        )
        .unwrap();

        assert_eq!(file, "impl Details {\n    fn open(self) -> Self { self }\n}");
        assert!(placeholders(&file).is_empty());
    }

    #[test]
    fn test_placeholders_in_first_occurrence_order() {
        let names = placeholders("$B$ $A$ $B$ $ $c$ $C_2$");
        assert_eq!(names, ["B", "A", "C_2"]);
    }

    #[test]
    fn test_ensure_resolved() {
        assert!(ensure_resolved("fn div() {}").is_ok());
        assert!(ensure_resolved("costs $5").is_ok());
        assert_eq!(
            ensure_resolved("fn $NAME$() {}"),
            Err(TemplateError::Unresolved {
                name: "NAME".to_string()
            })
        );
    }

    #[test]
    fn test_bindings_insert_replaces() {
        let mut bindings = Bindings::new();
        bindings.insert("A", "1");
        bindings.insert("A", "2");

        assert_eq!(bindings.get("A"), Some("2"));
        assert_eq!(render("$A$", &bindings).unwrap(), "2");
    }
}
