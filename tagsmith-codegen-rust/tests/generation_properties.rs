//! Behavioral properties of generated builders, checked across inputs.

use std::fs;

use tagsmith_codegen::{ImportVariant, placeholders};
use tagsmith_codegen_rust::{EntityAssembler, Generator, LanguageCodegen};
use tagsmith_schema::{EntityDescriptor, LookupTables, Schema};
use tempfile::TempDir;

const CHILD_FIELD: &str = "children: Vec<Node>,";
const CHILD_FNS: [&str; 3] = ["pub fn el(", "pub fn els(", "pub fn text<"];

fn assemble(entity: &EntityDescriptor) -> String {
    let tables = LookupTables::html();
    EntityAssembler::new(&tables)
        .assemble(entity)
        .expect("assembly failed")
}

#[test]
fn test_generation_is_deterministic() {
    let tables = LookupTables::html();
    let assembler = EntityAssembler::new(&tables);
    let entity = EntityDescriptor::new("select")
        .with_attributes(["name", "multiple", "required", "size"])
        .with_events(true)
        .with_global_attributes(true);

    let first = assembler.assemble(&entity).unwrap();
    let second = assembler.assemble(&entity).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_boolean_attributes_take_no_value() {
    let tables = LookupTables::html();
    let attrs: Vec<&str> = tables.boolean_attributes().collect();
    let out = assemble(&EntityDescriptor::new("x").with_attributes(attrs.iter().copied()));

    for attr in attrs {
        let method = tagsmith_codegen::RUST_NAMING.sanitize(attr);
        assert!(
            out.contains(&format!("pub fn {}(mut self) -> Self {{", method)),
            "`{attr}` should be a flag setter"
        );
        assert!(out.contains(&format!("Attr::name_only(\"{}\")", attr)));
        assert!(
            !out.contains(&format!("pub fn {}<T: Into<String>>(mut self, value: T)", method)),
            "`{attr}` should not take a value"
        );
    }
    // only `SetAttr::set_attr` takes a value
    assert_eq!(out.matches("value: T").count(), 1);
}

#[test]
fn test_other_attributes_take_one_value() {
    let attrs = ["href", "accept-charset", "data-id", "for"];
    let out = assemble(&EntityDescriptor::new("x").with_attributes(attrs));

    for (attr, method) in attrs.iter().zip(["href", "accept_charset", "data_id", "r#for"]) {
        assert!(out.contains(&format!(
            "pub fn {}<T: Into<String>>(mut self, value: T) -> Self {{",
            method
        )));
        assert!(out.contains(&format!("Attr::new(\"{}\", value)", attr)));
    }
    assert!(!out.contains("name_only"));
}

#[test]
fn test_void_elements_have_no_children() {
    let tables = LookupTables::html();
    let assembler = EntityAssembler::new(&tables);

    for tag in tables.void_elements() {
        let out = assembler.assemble(&EntityDescriptor::new(tag)).unwrap();

        assert!(!out.contains(CHILD_FIELD), "{tag} has child storage");
        for child_fn in CHILD_FNS {
            assert!(!out.contains(child_fn), "{tag} has `{child_fn}`");
        }
        assert!(out.contains(&format!(
            "Node::new_el(\"{}\", self.attr, Vec::<Node>::new(), true)",
            tag
        )));
    }
}

#[test]
fn test_container_elements_have_children() {
    for tag in ["div", "p", "ul", "section", "custom"] {
        let out = assemble(&EntityDescriptor::new(tag));

        assert!(out.contains(CHILD_FIELD), "{tag} lacks child storage");
        for child_fn in CHILD_FNS {
            assert!(out.contains(child_fn), "{tag} lacks `{child_fn}`");
        }
        assert!(out.contains(&format!(
            "Node::new_el(\"{}\", self.attr, self.children, false)",
            tag
        )));
    }
}

#[test]
fn test_no_placeholders_survive() {
    for events in [false, true] {
        for global in [false, true] {
            for tag in ["img", "div"] {
                let out = assemble(
                    &EntityDescriptor::new(tag)
                        .with_attributes(["src", "checked", "http-equiv", "type"])
                        .with_events(events)
                        .with_global_attributes(global),
                );
                assert_eq!(placeholders(&out), Vec::<&str>::new());
                assert!(!out.contains('$'));
            }
        }
    }
}

#[test]
fn test_import_variant_and_capability_blocks() {
    let expected = [
        (false, false, 0, "use crate::builders::NodeBuilder;"),
        (false, true, 1, "use crate::builders::{GlobalAttr, NodeBuilder};"),
        (true, false, 2, "use crate::builders::{EventAttr, NodeBuilder};"),
        (true, true, 3, "use crate::builders::{EventAttr, GlobalAttr, NodeBuilder};"),
    ];

    for (events, global, index, imports) in expected {
        assert_eq!(ImportVariant::from_flags(events, global).index(), index);

        let out = assemble(
            &EntityDescriptor::new("span")
                .with_events(events)
                .with_global_attributes(global),
        );

        assert!(out.contains(&format!("{imports}\n")));
        assert_eq!(out.contains("impl EventAttr for Span {}"), events);
        assert_eq!(out.contains("impl GlobalAttr for Span {}"), global);
    }
}

#[test]
fn test_img_example() {
    let out = assemble(
        &EntityDescriptor::new("img")
            .with_attributes(["src", "alt"])
            .with_global_attributes(true),
    );

    assert!(out.contains("pub fn src<T: Into<String>>(mut self, value: T) -> Self {"));
    assert!(out.contains("pub fn alt<T: Into<String>>(mut self, value: T) -> Self {"));
    assert!(!out.contains(CHILD_FIELD));
    assert!(out.contains("impl GlobalAttr for Img {}"));
    assert!(!out.contains("impl EventAttr"));
    assert!(out.contains("pub fn img() -> Img {"));
}

#[test]
fn test_input_example() {
    let out = assemble(
        &EntityDescriptor::new("input")
            .with_attributes(["disabled"])
            .with_events(true),
    );

    assert!(out.contains("pub fn disabled(mut self) -> Self {"));
    assert!(out.contains("impl EventAttr for Input {}"));
    assert!(!out.contains("impl GlobalAttr"));
    assert!(out.contains("pub fn input() -> Input {"));
}

#[test]
fn test_attribute_order_is_preserved() {
    let attrs = ["width", "alt", "src", "height", "crossorigin"];
    let out = assemble(&EntityDescriptor::new("img").with_attributes(attrs));

    let positions: Vec<usize> = attrs
        .iter()
        .map(|attr| out.find(&format!("pub fn {}<", attr)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();

    assert_eq!(positions, sorted);
}

#[test]
fn test_custom_tables_drive_classification() {
    let tables = LookupTables::new(["flag"], ["leaf"]);
    let assembler = EntityAssembler::new(&tables);

    let leaf = assembler
        .assemble(&EntityDescriptor::new("leaf").with_attributes(["flag", "disabled"]))
        .unwrap();

    assert!(leaf.contains("pub fn flag(mut self) -> Self {"));
    assert!(leaf.contains("pub fn disabled<T: Into<String>>"));
    assert!(!leaf.contains(CHILD_FIELD));

    let img = assembler.assemble(&EntityDescriptor::new("img")).unwrap();
    assert!(img.contains(CHILD_FIELD));
}

#[test]
fn test_generate_writes_one_file_per_entity() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("builders");
    let schema = Schema::new(vec![
        EntityDescriptor::new("div").with_global_attributes(true),
        EntityDescriptor::new("br"),
    ]);
    let tables = LookupTables::html();

    let result = Generator::new(&schema, &tables).generate(&output).unwrap();

    assert_eq!(result.written, ["div.rs", "br.rs", "registry.rs"]);
    let div = fs::read_to_string(output.join("div.rs")).unwrap();
    assert!(div.starts_with("use crate::html::{Attr, Node};"));
    let registry = fs::read_to_string(output.join("registry.rs")).unwrap();
    assert!(registry.contains("pub mod br;\npub mod div;\n"));
}

#[test]
fn test_generate_overwrites_previous_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("p.rs"), "stale").unwrap();
    let schema = Schema::new(vec![EntityDescriptor::new("p")]);
    let tables = LookupTables::html();

    Generator::new(&schema, &tables)
        .with_registry(false)
        .generate(temp.path())
        .unwrap();

    let p = fs::read_to_string(temp.path().join("p.rs")).unwrap();
    assert!(p.contains("pub struct P {"));
}

#[test]
fn test_duplicate_tags_write_nothing() {
    let temp = TempDir::new().unwrap();
    let schema = Schema::new(vec![EntityDescriptor::new("p"), EntityDescriptor::new("p")]);
    let tables = LookupTables::html();

    let err = Generator::new(&schema, &tables)
        .generate(temp.path())
        .unwrap_err();

    assert!(err.to_string().contains("duplicate tag"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
