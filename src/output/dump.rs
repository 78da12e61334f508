//! Model dump rendering
//!
//! The `--dump` escape hatch: serializes the intermediate model and the
//! resolved edges as pretty-printed JSON instead of a diagram, for
//! inspecting what extraction actually saw.

use crate::error::Result;
use crate::models::{Model, RelationshipEdge};
use serde::Serialize;

#[derive(Serialize)]
struct ModelDump<'a> {
    model: &'a Model,
    relationships: &'a [RelationshipEdge],
}

/// Render the model and edge list as JSON
pub fn render(model: &Model, edges: &[RelationshipEdge]) -> Result<String> {
    let dump = ModelDump {
        model,
        relationships: edges,
    };
    let mut text = serde_json::to_string_pretty(&dump)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, EntityKind};

    #[test]
    fn test_dump_contains_entities_and_edges() {
        let mut model = Model::new();
        let mut foo = Entity::new("Foo", EntityKind::Record);
        foo.add_field("Name", "string");
        model.module_mut("a").merge_entity(foo);
        model.build_type_map();

        let edges = vec![RelationshipEdge::directed("b.Bar", "a.Foo")];
        let text = render(&model, &edges).unwrap();

        assert!(text.contains("\"Foo\""));
        assert!(text.contains("\"Name\": \"string\""));
        assert!(text.contains("\"b.Bar\""));
        assert!(text.contains("\"Directed\""));
    }
}
