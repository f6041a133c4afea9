//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser, Tree};

use crate::errors::{ExtractError, Result};
use crate::features::extraction::ports::Parser;
use crate::shared::models::{SourceUnit, Span};

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Python,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
        }
    }

    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, unit: &SourceUnit) -> Result<Tree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| {
                ExtractError::parse(
                    &unit.path,
                    format!("failed to set language: {}", e),
                    Span::zero(),
                )
            })?;

        let tree = parser
            .parse(&unit.source, None)
            .ok_or_else(|| ExtractError::parse(&unit.path, "failed to parse source", Span::zero()))?;

        // Malformed input fails the whole unit before any walking happens
        if let Some(err) = first_syntax_error(&tree.root_node()) {
            return Err(err.into_error(&unit.path));
        }

        Ok(tree)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Python => matches!(ext, "py" | "pyi"),
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Python => "python",
        }
    }
}

struct SyntaxError {
    message: String,
    span: Span,
}

impl SyntaxError {
    fn into_error(self, path: &str) -> ExtractError {
        ExtractError::parse(path, self.message, self.span)
    }
}

/// Depth-first scan for the first ERROR or MISSING node
fn first_syntax_error(node: &Node) -> Option<SyntaxError> {
    if node.is_error() || node.is_missing() {
        let span = node_to_span(node);
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "invalid syntax".to_string()
        };
        return Some(SyntaxError { message, span });
    }
    if !node.has_error() {
        return None;
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if let Some(err) = first_syntax_error(&child) {
                return Some(err);
            }
        }
    }
    None
}

/// Convert a tree-sitter node position to a Span
pub fn node_to_span(node: &Node) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}

/// Source text covered by a node
pub fn node_text(node: &Node, source: &str) -> String {
    source.get(node.byte_range()).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_module() {
        let parser = TreeSitterParser::python();
        let unit = SourceUnit::new("test.py", "import os\n\ndef hello():\n    pass\n");
        let tree = parser.parse(&unit);
        assert!(tree.is_ok());
    }

    #[test]
    fn test_parse_error_fails_fast() {
        let parser = TreeSitterParser::python();
        let unit = SourceUnit::new("broken.py", "def (:\n");
        let err = parser.parse(&unit).unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
        assert!(err.to_string().starts_with("broken.py:"));
    }

    #[test]
    fn test_supports_extension() {
        let parser = TreeSitterParser::python();
        assert!(parser.supports_extension("py"));
        assert!(parser.supports_extension("pyi"));
        assert!(!parser.supports_extension("go"));
    }
}
