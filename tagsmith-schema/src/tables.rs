//! Fixed lookup tables consulted during classification.

use indexmap::IndexSet;

pub(crate) const HTML_BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

pub(crate) const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Attributes provided by the generated code's `GlobalAttr` trait.
pub(crate) const HTML_GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "hidden",
    "id",
    "lang",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
];

/// Attributes provided by the generated code's `EventAttr` trait.
pub(crate) const HTML_EVENT_ATTRIBUTES: &[&str] = &[
    "onabort",
    "onauxclick",
    "onblur",
    "oncancel",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "onclose",
    "oncuechange",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragexit",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadend",
    "onloadstart",
    "onmousedown",
    "onmouseenter",
    "onmouseleave",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onpause",
    "onplay",
    "onplaying",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onseeked",
    "onseeking",
    "onselect",
    "onshow",
    "onstalled",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "onvolumechange",
    "onwaiting",
    "onwheel",
];

/// Process-wide membership sets, decided once at startup.
///
/// There is no way to mutate a table after construction; callers share it
/// by reference for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupTables {
    boolean_attributes: IndexSet<String>,
    void_elements: IndexSet<String>,
    global_attributes: IndexSet<String>,
    event_attributes: IndexSet<String>,
}

impl LookupTables {
    /// Build tables from explicit boolean-attribute and void-element lists.
    ///
    /// The capability attribute sets start empty; see
    /// [`with_capability_attributes`](Self::with_capability_attributes).
    pub fn new<B, V>(boolean_attributes: B, void_elements: V) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            boolean_attributes: collect(boolean_attributes),
            void_elements: collect(void_elements),
            global_attributes: IndexSet::new(),
            event_attributes: IndexSet::new(),
        }
    }

    /// The built-in HTML tables.
    pub fn html() -> Self {
        Self::new(
            HTML_BOOLEAN_ATTRIBUTES.iter().copied(),
            HTML_VOID_ELEMENTS.iter().copied(),
        )
        .with_capability_attributes(
            HTML_GLOBAL_ATTRIBUTES.iter().copied(),
            HTML_EVENT_ATTRIBUTES.iter().copied(),
        )
    }

    /// Set the attribute names provided by the global-attribute and event traits.
    pub fn with_capability_attributes<G, E>(mut self, global: G, events: E) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        self.global_attributes = collect(global);
        self.event_attributes = collect(events);
        self
    }

    /// Whether an attribute is a presence-only flag.
    pub fn is_boolean_attribute(&self, name: &str) -> bool {
        self.boolean_attributes.contains(name)
    }

    /// Whether a tag can never contain children.
    pub fn is_void_element(&self, tag: &str) -> bool {
        self.void_elements.contains(tag)
    }

    /// Whether the global-attribute trait already provides this attribute.
    pub fn is_global_attribute(&self, name: &str) -> bool {
        self.global_attributes.contains(name)
    }

    /// Whether the event trait already provides this attribute.
    pub fn is_event_attribute(&self, name: &str) -> bool {
        self.event_attributes.contains(name)
    }

    pub fn boolean_attributes(&self) -> impl Iterator<Item = &str> {
        self.boolean_attributes.iter().map(String::as_str)
    }

    pub fn void_elements(&self) -> impl Iterator<Item = &str> {
        self.void_elements.iter().map(String::as_str)
    }
}

fn collect<I>(items: I) -> IndexSet<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
