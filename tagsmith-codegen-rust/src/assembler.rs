//! Per-entity assembly of a builder file.

use tagsmith_codegen::{
    Bindings, Capabilities, Classifier, ImportVariant, NamingConvention, RUST_NAMING,
    TemplateError, ensure_resolved, render,
};
use tagsmith_schema::{EntityDescriptor, LookupTables};

use crate::templates;

/// Builds the complete source text for one entity.
///
/// Holds only shared references to the run's immutable tables, so one
/// assembler can serve every entity and no entity observes another's output.
#[derive(Debug, Clone, Copy)]
pub struct EntityAssembler<'a> {
    classifier: Classifier<'a>,
    naming: NamingConvention,
}

impl<'a> EntityAssembler<'a> {
    pub fn new(tables: &'a LookupTables) -> Self {
        Self {
            classifier: Classifier::new(tables),
            naming: RUST_NAMING,
        }
    }

    pub fn classify(&self, entity: &EntityDescriptor) -> Capabilities {
        self.classifier.classify(entity)
    }

    /// Render the builder file for `entity`.
    ///
    /// The output is the base builder, then the event and global capability
    /// impls (each only when the entity has that capability), then the
    /// factory function.
    pub fn assemble(&self, entity: &EntityDescriptor) -> Result<String, TemplateError> {
        let builder_name = self.naming.type_name(&entity.tag);
        let caps = self.classify(entity);
        let children = ChildHandling::for_capabilities(&caps);

        let bindings = Bindings::new()
            .bind("BUILDER_NAME", builder_name.as_str())
            .bind("TAG", entity.tag.as_str())
            .bind("IMPORTS", imports(caps.import_variant()))
            .bind("ATTR_FNS", self.attribute_fns(entity)?)
            .bind("CHILD_FIELD", children.field())
            .bind("CHILD_INIT", children.init())
            .bind("CHILD_FNS", children.fns())
            .bind("CHILDREN", children.expr())
            .bind("SELF_CLOSING", children.self_closing());

        let mut out = render(templates::BUILDER, &bindings)?;
        if caps.has_events {
            out.push_str(&render(templates::EVENT_ATTR_IMPL, &bindings)?);
        }
        if caps.has_global {
            out.push_str(&render(templates::GLOBAL_ATTR_IMPL, &bindings)?);
        }
        out.push_str(&render(templates::FACTORY_FN, &bindings)?);

        ensure_resolved(&out)?;
        Ok(out)
    }

    /// One setter per attribute, in schema order, separated by blank lines.
    fn attribute_fns(&self, entity: &EntityDescriptor) -> Result<String, TemplateError> {
        let setters = entity
            .attributes
            .iter()
            .map(|attr| self.setter(attr))
            .collect::<Result<Vec<_>, _>>()?;

        if setters.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("\n{}", setters.join("\n")))
        }
    }

    fn setter(&self, attr: &str) -> Result<String, TemplateError> {
        let template = if self.classifier.is_boolean_attribute(attr) {
            templates::FLAG_SETTER
        } else {
            templates::VALUE_SETTER
        };

        render(
            template,
            &Bindings::new()
                .bind("METHOD", self.naming.sanitize(attr))
                .bind("ATTR", attr),
        )
    }
}

fn imports(variant: ImportVariant) -> &'static str {
    match variant {
        ImportVariant::Plain => templates::IMPORTS_PLAIN,
        ImportVariant::Global => templates::IMPORTS_GLOBAL,
        ImportVariant::Events => templates::IMPORTS_EVENTS,
        ImportVariant::EventsAndGlobal => templates::IMPORTS_EVENTS_GLOBAL,
    }
}

/// Whether a builder stores children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildHandling {
    /// Void entity: no storage, empty children, self-closing
    Void,
    /// Child storage field plus `el`/`els`/`text`
    Stored,
}

impl ChildHandling {
    fn for_capabilities(caps: &Capabilities) -> Self {
        if caps.is_void { Self::Void } else { Self::Stored }
    }

    fn field(self) -> &'static str {
        match self {
            Self::Void => "",
            Self::Stored => templates::CHILD_FIELD,
        }
    }

    fn init(self) -> &'static str {
        match self {
            Self::Void => "",
            Self::Stored => templates::CHILD_INIT,
        }
    }

    fn fns(self) -> String {
        match self {
            Self::Void => String::new(),
            Self::Stored => format!("\n{}", templates::CHILD_FNS),
        }
    }

    fn expr(self) -> &'static str {
        match self {
            Self::Void => templates::CHILDREN_NONE,
            Self::Stored => templates::CHILDREN_STORED,
        }
    }

    fn self_closing(self) -> &'static str {
        match self {
            Self::Void => "true",
            Self::Stored => "false",
        }
    }
}
