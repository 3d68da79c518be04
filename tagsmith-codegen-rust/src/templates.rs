//! Fixed text templates for the Rust builder files.
//!
//! Placeholders use the `$NAME$` syntax understood by
//! [`tagsmith_codegen::render`].

/// The builder type: struct, constructor, setters, child functions and the
/// `NodeBuilder`/`SetAttr` impls.
pub(crate) const BUILDER: &str = r#"use crate::html::{Attr, Node};
$IMPORTS$
use crate::builders::set_attr::SetAttr;

#[derive(Debug)]
pub struct $BUILDER_NAME$ {
    attr: Vec<Attr>,$CHILD_FIELD$
}

impl $BUILDER_NAME$ {
    pub fn new() -> Self {
        Self {
            attr: Vec::<Attr>::new(),$CHILD_INIT$
        }
    }
$ATTR_FNS$$CHILD_FNS$}

impl NodeBuilder for $BUILDER_NAME$ {
    fn node(self) -> Node {
        Node::new_el("$TAG$", self.attr, $CHILDREN$, $SELF_CLOSING$)
    }
}

impl SetAttr for $BUILDER_NAME$ {
    fn set_attr<T: Into<String>>(mut self, name: &'static str, value: T) -> Self {
        self.attr.push(Attr::new(name, value));
        self
    }
}
"#;

pub(crate) const IMPORTS_PLAIN: &str = "use crate::builders::NodeBuilder;";
pub(crate) const IMPORTS_GLOBAL: &str = "use crate::builders::{GlobalAttr, NodeBuilder};";
pub(crate) const IMPORTS_EVENTS: &str = "use crate::builders::{EventAttr, NodeBuilder};";
pub(crate) const IMPORTS_EVENTS_GLOBAL: &str =
    "use crate::builders::{EventAttr, GlobalAttr, NodeBuilder};";

/// Setter for an attribute that carries a value.
pub(crate) const VALUE_SETTER: &str = r#"    pub fn $METHOD$<T: Into<String>>(mut self, value: T) -> Self {
        self.attr.push(Attr::new("$ATTR$", value));
        self
    }
"#;

/// Setter for a presence-only attribute.
pub(crate) const FLAG_SETTER: &str = r#"    pub fn $METHOD$(mut self) -> Self {
        self.attr.push(Attr::name_only("$ATTR$"));
        self
    }
"#;

pub(crate) const CHILD_FIELD: &str = "\n    children: Vec<Node>,";
pub(crate) const CHILD_INIT: &str = "\n            children: Vec::<Node>::new(),";

pub(crate) const CHILD_FNS: &str = r#"    pub fn el(mut self, node: impl NodeBuilder) -> Self {
        self.children.push(node.node());
        self
    }

    pub fn els(mut self, nodes: impl IntoIterator<Item = impl NodeBuilder>) -> Self {
        self.children.extend(nodes.into_iter().map(|node| node.node()));
        self
    }

    pub fn text<T: Into<String>>(mut self, text: T) -> Self {
        self.children.push(Node::new_text(text));
        self
    }
"#;

pub(crate) const CHILDREN_STORED: &str = "self.children";
pub(crate) const CHILDREN_NONE: &str = "Vec::<Node>::new()";

pub(crate) const EVENT_ATTR_IMPL: &str = "
impl EventAttr for $BUILDER_NAME$ {}
";

pub(crate) const GLOBAL_ATTR_IMPL: &str = "
impl GlobalAttr for $BUILDER_NAME$ {}
";

/// Module-level entry point, named after the tag.
pub(crate) const FACTORY_FN: &str = "
pub fn $TAG$() -> $BUILDER_NAME$ {
    $BUILDER_NAME$::new()
}
";
