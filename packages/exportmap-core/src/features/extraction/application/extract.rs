//! Export extraction use case
//!
//! Walks the top-level statements of one parsed source unit and builds the
//! ExportSet. Bodies of functions and classes are never entered; try/except
//! blocks are walked as guarded top level with the fallback policy below.
//!
//! Fallback policy: at runtime exactly one branch of a try/except import
//! block executes, so static analysis picks a deterministic representative.
//! The try branch's bindings are live; except-branch imports for the same
//! local name are attached as alternates. A name bound only in an except
//! branch becomes the live binding.

use rayon::prelude::*;
use tracing::{debug, warn};
use tree_sitter::Node;

use crate::errors::Result;
use crate::features::extraction::domain::{Binding, ExportSet, ImportBinding};
use crate::features::extraction::infrastructure::extractors::{
    extract_assignment, extract_class, extract_decorated, extract_function,
    extract_import_from_statement, extract_import_statement, FromImport,
};
use crate::features::extraction::infrastructure::TreeSitterParser;
use crate::features::extraction::ports::Parser;
use crate::shared::models::SourceUnit;

/// Pure, stateless extractor; one invocation per source unit
pub struct ExportExtractor {
    parser: TreeSitterParser,
}

impl Default for ExportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportExtractor {
    pub fn new() -> Self {
        Self {
            parser: TreeSitterParser::python(),
        }
    }

    /// Extract the exported-symbol set of one source unit
    pub fn extract(&self, unit: &SourceUnit) -> Result<ExportSet> {
        let tree = self.parser.parse(unit)?;
        let root = tree.root_node();

        let mut set = ExportSet::new();
        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            walk_statement(&statement, &unit.source, &mut set, Branch::Main);
        }

        debug!(
            path = %unit.path,
            records = set.len(),
            diagnostics = set.diagnostics.len(),
            has_wildcard = set.has_wildcard,
            "extracted top-level exports"
        );
        Ok(set)
    }
}

/// Extract many independent units in parallel, results in input order
///
/// Each invocation owns its parser and symbol table; there is no shared
/// mutable state.
pub fn extract_many(units: &[SourceUnit]) -> Vec<Result<ExportSet>> {
    units
        .par_iter()
        .map(|unit| ExportExtractor::new().extract(unit))
        .collect()
}

/// Which arm of a try/except construct (if any) a statement sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Main,
    /// try body: live bindings, flagged as fallback-originated
    Try,
    /// except body: alternates, never shadowing
    Except,
}

fn walk_statement(node: &Node, source: &str, set: &mut ExportSet, branch: Branch) {
    match node.kind() {
        "import_statement" => {
            for binding in extract_import_statement(node, source) {
                record_import(set, binding, branch);
            }
        }

        "import_from_statement" | "future_import_statement" => {
            match extract_import_from_statement(node, source) {
                Some(FromImport::Wildcard(wildcard)) => set.push(Binding::Wildcard(wildcard)),
                Some(FromImport::Names(bindings)) => {
                    for binding in bindings {
                        record_import(set, binding, branch);
                    }
                }
                None => {}
            }
        }

        "expression_statement" => {
            let mut cursor = node.walk();
            for inner in node.named_children(&mut cursor) {
                match inner.kind() {
                    "assignment" => match extract_assignment(&inner, source) {
                        Ok(bindings) => {
                            for binding in bindings {
                                record_named(set, Binding::Assignment(binding), branch);
                            }
                        }
                        Err(diagnostic) => {
                            warn!(
                                span = %diagnostic.span,
                                raw_kind = %diagnostic.raw_kind,
                                "skipped statement: {}", diagnostic.message
                            );
                            set.push_diagnostic(diagnostic);
                        }
                    },
                    // Docstrings and bare expressions bind nothing; text
                    // inside them is never mistaken for statements
                    _ => {}
                }
            }
        }

        "function_definition" => {
            if let Some(binding) = extract_function(node, source) {
                record_named(set, Binding::Definition(binding), branch);
            }
        }

        "class_definition" => {
            if let Some(binding) = extract_class(node, source) {
                record_named(set, Binding::Definition(binding), branch);
            }
        }

        "decorated_definition" => {
            if let Some(binding) = extract_decorated(node, source) {
                record_named(set, Binding::Definition(binding), branch);
            }
        }

        "try_statement" => walk_try(node, source, set),

        // Control flow, calls, del, comments: no module-level names here
        _ => {}
    }
}

fn walk_try(node: &Node, source: &str, set: &mut ExportSet) {
    if let Some(body) = node.child_by_field_name("body") {
        walk_suite(&body, source, set, Branch::Try);
    }

    let mut cursor = node.walk();
    for clause in node.named_children(&mut cursor) {
        match clause.kind() {
            "except_clause" | "except_group_clause" => {
                let mut inner = clause.walk();
                for child in clause.named_children(&mut inner) {
                    if child.kind() == "block" {
                        walk_suite(&child, source, set, Branch::Except);
                    }
                }
            }
            // else runs only when the try body succeeded; finally always runs
            "else_clause" => walk_clause_blocks(&clause, source, set, Branch::Try),
            "finally_clause" => walk_clause_blocks(&clause, source, set, Branch::Main),
            _ => {}
        }
    }
}

fn walk_clause_blocks(clause: &Node, source: &str, set: &mut ExportSet, branch: Branch) {
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if child.kind() == "block" {
            walk_suite(&child, source, set, branch);
        }
    }
}

fn walk_suite(node: &Node, source: &str, set: &mut ExportSet, branch: Branch) {
    if node.kind() == "block" {
        let mut cursor = node.walk();
        for statement in node.named_children(&mut cursor) {
            walk_statement(&statement, source, set, branch);
        }
    } else {
        // single-line suite (`try: import x`)
        walk_statement(node, source, set, branch);
    }
}

fn record_import(set: &mut ExportSet, mut binding: ImportBinding, branch: Branch) {
    match branch {
        Branch::Main => set.push(Binding::Import(binding)),
        Branch::Try => {
            binding.in_fallback = true;
            set.push(Binding::Import(binding));
        }
        Branch::Except => {
            binding.in_fallback = true;
            if let Some(live) = set.live_import_mut(&binding.local) {
                live.alternates.push(binding);
            } else if !set.is_bound(&binding.local) {
                set.push(Binding::Import(binding));
            }
            // bound to a non-import: the try branch stays the representative
        }
    }
}

fn record_named(set: &mut ExportSet, binding: Binding, branch: Branch) {
    if branch == Branch::Except {
        if let Some(name) = binding.local_name() {
            if set.is_bound(name) {
                return;
            }
        }
    }
    set.push(binding);
}
