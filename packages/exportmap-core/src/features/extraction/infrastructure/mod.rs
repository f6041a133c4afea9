//! Extraction infrastructure

pub mod extractors;
pub mod tree_sitter;

pub use tree_sitter::TreeSitterParser;
