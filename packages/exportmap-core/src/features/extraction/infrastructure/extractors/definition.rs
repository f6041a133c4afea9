//! Function and class definition extraction
//!
//! Only the definition name (and, for classes, the declared bases) is
//! recorded; bodies and decorators are never traversed for further symbols.

use tree_sitter::Node;

use crate::features::extraction::domain::{DefinitionBinding, DefinitionKind};
use crate::features::extraction::infrastructure::tree_sitter::{node_text, node_to_span};

/// Extract a binding from a `function_definition` node (incl. `async def`)
pub fn extract_function(node: &Node, source: &str) -> Option<DefinitionBinding> {
    if node.kind() != "function_definition" {
        return None;
    }
    let name_node = node.child_by_field_name("name")?;
    let is_async = node
        .child(0)
        .map(|c| c.kind() == "async")
        .unwrap_or(false);

    Some(DefinitionBinding {
        name: node_text(&name_node, source),
        kind: DefinitionKind::Function,
        bases: Vec::new(),
        is_async,
        span: node_to_span(node),
    })
}

/// Extract a binding from a `class_definition` node
///
/// Bases are captured verbatim as written (identifier, dotted attribute, or
/// subscripted generic); keyword arguments like `metaclass=...` are not bases.
pub fn extract_class(node: &Node, source: &str) -> Option<DefinitionBinding> {
    if node.kind() != "class_definition" {
        return None;
    }
    let name_node = node.child_by_field_name("name")?;

    let mut bases = Vec::new();
    if let Some(superclasses) = node.child_by_field_name("superclasses") {
        let mut cursor = superclasses.walk();
        for argument in superclasses.named_children(&mut cursor) {
            match argument.kind() {
                "keyword_argument" | "comment" => {}
                _ => bases.push(node_text(&argument, source)),
            }
        }
    }

    Some(DefinitionBinding {
        name: node_text(&name_node, source),
        kind: DefinitionKind::Class,
        bases,
        is_async: false,
        span: node_to_span(node),
    })
}

/// Unwrap a `decorated_definition` and extract the inner def/class
pub fn extract_decorated(node: &Node, source: &str) -> Option<DefinitionBinding> {
    if node.kind() != "decorated_definition" {
        return None;
    }
    let definition = node.child_by_field_name("definition")?;
    match definition.kind() {
        "function_definition" => extract_function(&definition, source),
        "class_definition" => extract_class(&definition, source),
        _ => None,
    }
}
