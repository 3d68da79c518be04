//! Code builder utility for generating line-oriented code.

/// Fluent API for building code line by line.
///
/// # Example
///
/// ```
/// use tagsmith_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .each(["a", "div"], |b, tag| b.line(&format!("pub mod {};", tag)))
///     .blank()
///     .line("pub use div::div;")
///     .build();
///
/// assert_eq!(code, "pub mod a;\npub mod div;\n\npub use div::div;\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code.
    pub fn line(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
