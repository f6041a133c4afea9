//! Import statement extraction
//!
//! Handles every import shape the grammar produces at top level:
//! - `import module` / `import module as alias` / `import a.b, c as d`
//! - `from module import name, other as alias` (parenthesized lists included)
//! - `from . import name` / `from ..pkg import name` (relative forms)
//! - `from module import *`
//! - `from __future__ import feature` (own node kind in the grammar)

use tree_sitter::Node;

use crate::features::extraction::domain::{ImportBinding, WildcardImport};
use crate::features::extraction::infrastructure::tree_sitter::{node_text, node_to_span};
use crate::shared::models::Span;

/// Outcome of a from-import statement
#[derive(Debug)]
pub enum FromImport {
    Names(Vec<ImportBinding>),
    Wildcard(WildcardImport),
}

/// Extract bindings from an `import_statement` node
///
/// `import a.b` binds the first path segment (`a`); `import a.b as c`
/// binds the alias. One binding per comma-separated module.
pub fn extract_import_statement(node: &Node, source: &str) -> Vec<ImportBinding> {
    let mut bindings = Vec::new();
    if node.kind() != "import_statement" {
        return bindings;
    }

    let span = node_to_span(node);
    let mut cursor = node.walk();
    for name_node in node.children_by_field_name("name", &mut cursor) {
        match name_node.kind() {
            "dotted_name" => {
                let module = node_text(&name_node, source);
                let local = module.split('.').next().unwrap_or("").to_string();
                bindings.push(plain_binding(local, module, None, 0, span));
            }
            "aliased_import" => {
                if let Some((module, alias)) = split_aliased(&name_node, source) {
                    let original = Some(module.clone());
                    bindings.push(plain_binding(alias, module, original, 0, span));
                }
            }
            _ => {}
        }
    }
    bindings
}

/// Extract bindings from an `import_from_statement` or
/// `future_import_statement` node
///
/// Wildcards produce a single `FromImport::Wildcard`; no individual names
/// are fabricated for them.
pub fn extract_import_from_statement(node: &Node, source: &str) -> Option<FromImport> {
    let kind = node.kind();
    if kind != "import_from_statement" && kind != "future_import_statement" {
        return None;
    }

    let span = node_to_span(node);
    let (module, dot_depth) = if kind == "future_import_statement" {
        ("__future__".to_string(), 0)
    } else {
        match node.child_by_field_name("module_name") {
            Some(module_node) => split_module_path(&node_text(&module_node, source)),
            None => (String::new(), 0),
        }
    };

    let mut cursor = node.walk();
    let has_wildcard = node
        .named_children(&mut cursor)
        .any(|c| c.kind() == "wildcard_import");
    if has_wildcard {
        return Some(FromImport::Wildcard(WildcardImport {
            module,
            dot_depth,
            span,
        }));
    }

    let mut bindings = Vec::new();
    let mut cursor = node.walk();
    for name_node in node.children_by_field_name("name", &mut cursor) {
        match name_node.kind() {
            "dotted_name" | "identifier" => {
                let name = node_text(&name_node, source);
                bindings.push(plain_binding(name, module.clone(), None, dot_depth, span));
            }
            "aliased_import" => {
                if let Some((name, alias)) = split_aliased(&name_node, source) {
                    bindings.push(plain_binding(
                        alias,
                        module.clone(),
                        Some(name),
                        dot_depth,
                        span,
                    ));
                }
            }
            _ => {}
        }
    }
    Some(FromImport::Names(bindings))
}

fn plain_binding(
    local: String,
    module: String,
    original: Option<String>,
    dot_depth: u32,
    span: Span,
) -> ImportBinding {
    ImportBinding {
        local,
        module,
        original,
        dot_depth,
        in_fallback: false,
        alternates: Vec::new(),
        span,
    }
}

/// Split a module path as written into (path without leading dots, dot depth)
fn split_module_path(text: &str) -> (String, u32) {
    let depth = text.chars().take_while(|c| *c == '.').count();
    (text[depth..].to_string(), depth as u32)
}

/// (name, alias) from an `aliased_import` node
fn split_aliased(node: &Node, source: &str) -> Option<(String, String)> {
    let name = node.child_by_field_name("name")?;
    let alias = node.child_by_field_name("alias")?;
    Some((node_text(&name, source), node_text(&alias, source)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::language()).unwrap();
        parser.parse(code, None).unwrap()
    }

    fn find_node<'a>(node: &tree_sitter::Node<'a>, kind: &str) -> Option<tree_sitter::Node<'a>> {
        if node.kind() == kind {
            return Some(*node);
        }
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                if let Some(found) = find_node(&child, kind) {
                    return Some(found);
                }
            }
        }
        None
    }

    #[test]
    fn test_simple_import_binds_first_segment() {
        let code = "import os.path";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_statement").unwrap();

        let bindings = extract_import_statement(&node, code);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].local, "os");
        assert_eq!(bindings[0].module, "os.path");
        assert!(bindings[0].original.is_none());
    }

    #[test]
    fn test_aliased_import() {
        let code = "import numpy.linalg as la";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_statement").unwrap();

        let bindings = extract_import_statement(&node, code);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].local, "la");
        assert_eq!(bindings[0].module, "numpy.linalg");
        assert_eq!(bindings[0].original.as_deref(), Some("numpy.linalg"));
    }

    #[test]
    fn test_multi_import_binds_each_module() {
        let code = "import os, sys as system";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_statement").unwrap();

        let bindings = extract_import_statement(&node, code);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].local, "os");
        assert_eq!(bindings[1].local, "system");
        assert_eq!(bindings[1].module, "sys");
    }

    #[test]
    fn test_from_import_with_alias() {
        let code = "from collections import OrderedDict as OD, deque";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_from_statement").unwrap();

        let result = extract_import_from_statement(&node, code).unwrap();
        let bindings = match result {
            FromImport::Names(b) => b,
            FromImport::Wildcard(_) => panic!("not a wildcard"),
        };
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].local, "OD");
        assert_eq!(bindings[0].original.as_deref(), Some("OrderedDict"));
        assert_eq!(bindings[1].local, "deque");
        assert!(bindings[1].original.is_none());
        assert_eq!(bindings[0].module, "collections");
    }

    #[test]
    fn test_parenthesized_multiline_list() {
        let code = "from pkg import (\n    first,\n    second as two,\n)";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_from_statement").unwrap();

        let result = extract_import_from_statement(&node, code).unwrap();
        let bindings = match result {
            FromImport::Names(b) => b,
            FromImport::Wildcard(_) => panic!("not a wildcard"),
        };
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].local, "first");
        assert_eq!(bindings[1].local, "two");
    }

    #[test]
    fn test_relative_import_depth() {
        let code = "from ..pkg import helper";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_from_statement").unwrap();

        let result = extract_import_from_statement(&node, code).unwrap();
        let bindings = match result {
            FromImport::Names(b) => b,
            FromImport::Wildcard(_) => panic!("not a wildcard"),
        };
        assert_eq!(bindings[0].dot_depth, 2);
        assert_eq!(bindings[0].module, "pkg");
        assert_eq!(bindings[0].local, "helper");
    }

    #[test]
    fn test_bare_relative_import() {
        let code = "from . import sibling";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_from_statement").unwrap();

        let result = extract_import_from_statement(&node, code).unwrap();
        let bindings = match result {
            FromImport::Names(b) => b,
            FromImport::Wildcard(_) => panic!("not a wildcard"),
        };
        assert_eq!(bindings[0].dot_depth, 1);
        assert_eq!(bindings[0].module, "");
        assert_eq!(bindings[0].local, "sibling");
    }

    #[test]
    fn test_wildcard_import() {
        let code = "from typing import *";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "import_from_statement").unwrap();

        let result = extract_import_from_statement(&node, code).unwrap();
        match result {
            FromImport::Wildcard(w) => {
                assert_eq!(w.module, "typing");
                assert_eq!(w.dot_depth, 0);
            }
            FromImport::Names(_) => panic!("expected wildcard"),
        }
    }

    #[test]
    fn test_future_import() {
        let code = "from __future__ import annotations";
        let tree = parse(code);
        let node = find_node(&tree.root_node(), "future_import_statement").unwrap();

        let result = extract_import_from_statement(&node, code).unwrap();
        let bindings = match result {
            FromImport::Names(b) => b,
            FromImport::Wildcard(_) => panic!("not a wildcard"),
        };
        assert_eq!(bindings[0].local, "annotations");
        assert_eq!(bindings[0].module, "__future__");
    }
}
