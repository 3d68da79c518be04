//! List command report data structures.

use tagsmith_codegen::{Capabilities, ImportVariant};

use super::output::{Output, Report};

/// Report data listing every schema entity.
#[derive(Debug)]
pub struct ListReport {
    pub entities: Vec<EntityInfo>,
}

/// One entity and its classification.
#[derive(Debug)]
pub struct EntityInfo {
    pub tag: String,
    /// Generated builder type name.
    pub builder: String,
    pub capabilities: Capabilities,
    /// Presence-only attributes, in schema order.
    pub flag_attributes: Vec<String>,
    /// Value attributes, in schema order.
    pub value_attributes: Vec<String>,
}

impl EntityInfo {
    fn traits(&self) -> &'static str {
        match self.capabilities.import_variant() {
            ImportVariant::Plain => "none",
            ImportVariant::Global => "GlobalAttr",
            ImportVariant::Events => "EventAttr",
            ImportVariant::EventsAndGlobal => "EventAttr, GlobalAttr",
        }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entities.is_empty() {
            out.preformatted("No entities defined");
            return;
        }

        out.section(&format!("Entities ({})", self.entities.len()));
        for entity in &self.entities {
            let kind = if entity.capabilities.is_void {
                "void"
            } else {
                "container"
            };
            out.list_item(&format!("{} ({}, {})", entity.tag, entity.builder, kind));
            out.key_value_indented("traits", entity.traits());
            if !entity.value_attributes.is_empty() {
                out.key_value_indented("values", &entity.value_attributes.join(", "));
            }
            if !entity.flag_attributes.is_empty() {
                out.key_value_indented("flags", &entity.flag_attributes.join(", "));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_list_report() {
        let report = ListReport {
            entities: vec![EntityInfo {
                tag: "input".to_string(),
                builder: "Input".to_string(),
                capabilities: Capabilities {
                    is_void: true,
                    has_events: true,
                    has_global: false,
                },
                flag_attributes: vec!["disabled".to_string()],
                value_attributes: vec!["name".to_string(), "value".to_string()],
            }],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Entities (1):",
                "  - input (Input, void)",
                "    traits: EventAttr",
                "    values: name, value",
                "    flags: disabled",
            ]
        );
    }

    #[test]
    fn test_empty_schema() {
        let mut out = BufferOutput::default();
        ListReport {
            entities: Vec::new(),
        }
        .render(&mut out);

        assert_eq!(out.lines, ["No entities defined"]);
    }
}
