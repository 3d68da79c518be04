//! Capability classification for schema entities.
//!
//! Decides which optional pieces a generated builder receives: child
//! handling (absent for void entities), the event-handler trait, and the
//! global-attribute trait.

use tagsmith_schema::{EntityDescriptor, LookupTables};

/// The classification of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// The tag can never contain children
    pub is_void: bool,
    /// The builder implements the event-handler trait
    pub has_events: bool,
    /// The builder implements the global-attribute trait
    pub has_global: bool,
}

impl Capabilities {
    /// Which import block the builder needs.
    pub fn import_variant(&self) -> ImportVariant {
        ImportVariant::from_flags(self.has_events, self.has_global)
    }
}

/// The four import-block variants, one per (events, global) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportVariant {
    /// Neither capability
    Plain,
    /// Global attributes only
    Global,
    /// Event handlers only
    Events,
    /// Both capabilities
    EventsAndGlobal,
}

impl ImportVariant {
    pub fn from_flags(has_events: bool, has_global: bool) -> Self {
        match (has_events, has_global) {
            (false, false) => Self::Plain,
            (false, true) => Self::Global,
            (true, false) => Self::Events,
            (true, true) => Self::EventsAndGlobal,
        }
    }

    /// Position in the fixed variant table (0 through 3).
    pub fn index(&self) -> usize {
        match self {
            Self::Plain => 0,
            Self::Global => 1,
            Self::Events => 2,
            Self::EventsAndGlobal => 3,
        }
    }

    pub fn has_events(&self) -> bool {
        matches!(self, Self::Events | Self::EventsAndGlobal)
    }

    pub fn has_global(&self) -> bool {
        matches!(self, Self::Global | Self::EventsAndGlobal)
    }
}

/// Classifies entities against the run's lookup tables.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    tables: &'a LookupTables,
}

impl<'a> Classifier<'a> {
    pub fn new(tables: &'a LookupTables) -> Self {
        Self { tables }
    }

    /// Classify an entity. Deterministic: depends only on the entity and the tables.
    pub fn classify(&self, entity: &EntityDescriptor) -> Capabilities {
        Capabilities {
            is_void: self.tables.is_void_element(&entity.tag),
            has_events: entity.supports_events,
            has_global: entity.supports_global_attributes,
        }
    }

    /// Whether an attribute setter records presence only.
    pub fn is_boolean_attribute(&self, name: &str) -> bool {
        self.tables.is_boolean_attribute(name)
    }
}
