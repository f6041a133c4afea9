//! Shared models

mod source_unit;
mod span;

pub use source_unit::SourceUnit;
pub use span::Span;
