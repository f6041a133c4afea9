//! Assignment target extraction
//!
//! Handles the binding side of top-level assignments:
//! - simple: `name = expr`, annotated `name: T = expr`, bare `name: T`
//! - chained: `a = b = expr` (the grammar nests the chain in `right`)
//! - unpacking: `a, b = ...`, `(a, b) = ...`, `[a, b] = ...`, `*rest`
//!
//! Targets that cannot bind a module-level name (attribute/subscript
//! targets, destructuring nested beyond one level) are reported as a
//! `Diagnostic` and the whole statement is skipped.

use tree_sitter::Node;

use crate::features::extraction::domain::{AssignmentBinding, Diagnostic};
use crate::features::extraction::infrastructure::tree_sitter::{node_text, node_to_span};
use crate::shared::models::Span;

/// Extract every name bound by an `assignment` node
///
/// On an unsupported target shape the statement yields no bindings at all;
/// partial extraction would misreport sibling positions.
pub fn extract_assignment(
    node: &Node,
    source: &str,
) -> std::result::Result<Vec<AssignmentBinding>, Diagnostic> {
    if node.kind() != "assignment" {
        return Ok(Vec::new());
    }

    let span = node_to_span(node);
    let mut bindings = Vec::new();
    let mut current = *node;
    loop {
        let annotated = current.child_by_field_name("type").is_some();
        let left = match current.child_by_field_name("left") {
            Some(left) => left,
            None => break,
        };
        collect_targets(&left, source, annotated, span, &mut bindings)?;

        // Chained assignment nests the next link in the right field
        match current.child_by_field_name("right") {
            Some(right) if right.kind() == "assignment" => current = right,
            _ => break,
        }
    }
    Ok(bindings)
}

fn collect_targets(
    left: &Node,
    source: &str,
    annotated: bool,
    span: Span,
    out: &mut Vec<AssignmentBinding>,
) -> std::result::Result<(), Diagnostic> {
    match left.kind() {
        "identifier" => {
            out.push(AssignmentBinding {
                name: node_text(left, source),
                unpack_index: None,
                annotated,
                starred: false,
                span,
            });
            Ok(())
        }

        "pattern_list" | "tuple_pattern" | "list_pattern" => {
            let mut cursor = left.walk();
            for (position, target) in left.named_children(&mut cursor).enumerate() {
                match target.kind() {
                    "identifier" => out.push(AssignmentBinding {
                        name: node_text(&target, source),
                        unpack_index: Some(position as u32),
                        annotated,
                        starred: false,
                        span,
                    }),
                    // *rest binds rest to the remainder; arity is not modeled
                    "list_splat_pattern" => match splat_identifier(&target, source) {
                        Some(name) => out.push(AssignmentBinding {
                            name,
                            unpack_index: Some(position as u32),
                            annotated,
                            starred: true,
                            span,
                        }),
                        None => return Err(unsupported_target(&target, source)),
                    },
                    _ => return Err(unsupported_target(&target, source)),
                }
            }
            Ok(())
        }

        "attribute" | "subscript" => Err(Diagnostic {
            message: format!(
                "assignment target `{}` binds no module-level name",
                node_text(left, source)
            ),
            raw_kind: left.kind().to_string(),
            span: node_to_span(left),
        }),

        _ => Err(unsupported_target(left, source)),
    }
}

fn unsupported_target(node: &Node, source: &str) -> Diagnostic {
    Diagnostic {
        message: format!(
            "unsupported assignment target `{}`",
            node_text(node, source)
        ),
        raw_kind: node.kind().to_string(),
        span: node_to_span(node),
    }
}

/// Identifier inside a `list_splat_pattern` (`*rest`)
fn splat_identifier(node: &Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "identifier")
        .map(|c| node_text(&c, source));
    result
}
