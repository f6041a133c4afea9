//! Tree-sitter backed parsing

mod parser;

pub use parser::{node_text, node_to_span, TreeSitterParser};
