//! PlantUML rendering
//!
//! Serializes the model into a class diagram: one namespace per module, one
//! class per entity, stereotype markers by entity kind, and the resolved
//! relationship edges at the end. Everything iterates in sorted order so the
//! same tree always renders the same text.

use crate::models::{display_name, Entity, EntityKind, Model, Module, RelationshipEdge};

/// Stereotype for the synthesized per-module global holder
const GLOBAL_STEREOTYPE: &str = "<< (G,Green) >>";
/// Stereotype for record types
const STRUCT_STEREOTYPE: &str = "<< (S,Aquamarine) >>";
/// Stereotype for non-struct type declarations
const TYPE_STEREOTYPE: &str = "<< (T, #FF7700) >>";

/// Render the whole diagram
pub fn render(model: &Model, edges: &[RelationshipEdge]) -> String {
    let mut out = String::from("@startuml\n");

    let mut first = true;
    for (path, module) in &model.modules {
        if module.entities.is_empty() {
            continue;
        }
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(&namespace_block(&display_name(path), module));
    }

    for edge in edges {
        out.push_str(&edge.render());
        out.push('\n');
    }

    out.push_str("@enduml\n");
    out
}

fn namespace_block(namespace: &str, module: &Module) -> String {
    let mut out = format!("namespace {} {{\n", namespace);
    for entity in module.entities.values() {
        for line in class_block(namespace, entity).lines() {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("}\n");
    out
}

/// Render one entity as a class, with visibility markers on every member.
///
/// A function-type declaration additionally gets a companion class carrying
/// the colored signature text, dot-linked to the declaring class.
fn class_block(namespace: &str, entity: &Entity) -> String {
    let stereotype = match &entity.kind {
        EntityKind::Global => GLOBAL_STEREOTYPE,
        EntityKind::Record => STRUCT_STEREOTYPE,
        EntityKind::Alias(_) => TYPE_STEREOTYPE,
    };

    let mut out = format!("class {}.{} {} {{\n", namespace, entity.name, stereotype);

    for (name, type_text) in &entity.private_fields {
        out.push_str(&format!("\t- {} {}\n", name, type_text));
    }
    if !entity.private_fields.is_empty() {
        out.push('\n');
    }
    for (name, type_text) in &entity.public_fields {
        out.push_str(&format!("\t+ {} {}\n", name, type_text));
    }
    if !entity.private_functions.is_empty() {
        out.push('\n');
    }
    for signature in &entity.private_functions {
        out.push_str(&format!("\t- {}\n", signature));
    }
    if !entity.public_functions.is_empty() {
        out.push('\n');
    }
    for signature in &entity.public_functions {
        out.push_str(&format!("\t+ {}\n", signature));
    }
    out.push_str("}\n");

    if let EntityKind::Alias(rhs) = &entity.kind {
        if rhs.starts_with("func") {
            let id = signature_class_id(rhs);
            out.push_str(&format!(
                "class \"{} \" as {}.{} {{\n}}\n",
                color_keywords(rhs),
                namespace,
                id
            ));
            out.push_str(&format!(
                "\"{}.{}\" #.. \"{}\"\n",
                namespace, id, entity.name
            ));
        }
    }

    out
}

/// Wrap type-constructor keywords in blue font tags
fn color_keywords(text: &str) -> String {
    let mut colored = text.to_string();
    for keyword in ["map", "struct", "chan", "func"] {
        if colored.contains(keyword) {
            colored = colored.replace(keyword, &format!("<font color=blue>{}</font>", keyword));
        }
    }
    colored
}

/// Reduce a signature to an identifier usable as a PlantUML class alias
fn signature_class_id(signature: &str) -> String {
    signature
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ':')
        .collect()
}
