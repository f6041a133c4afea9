//! Extraction ports
//!
//! Contract between the extraction walk and the parsing backend.

use crate::errors::Result;
use crate::shared::models::SourceUnit;
use tree_sitter::Tree;

/// Parsing backend seam
///
/// `parse` fails fast with `ExtractError::Parse` when the grammar reports a
/// syntax error anywhere in the unit; a returned tree is walkable.
pub trait Parser {
    fn parse(&self, unit: &SourceUnit) -> Result<Tree>;

    fn supports_extension(&self, ext: &str) -> bool;

    fn language_name(&self) -> &'static str;
}
