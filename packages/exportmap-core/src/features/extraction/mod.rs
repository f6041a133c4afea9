//! Export extraction feature
//!
//! ## Structure
//! - `domain/` - Binding variants, ExportSet, Diagnostic
//! - `ports/` - Parser trait
//! - `application/` - ExportExtractor walk
//! - `infrastructure/` - TreeSitterParser, statement extractors

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::{extract_many, ExportExtractor};
pub use domain::{Binding, Diagnostic, ExportSet};

// Internal use - prefer the application layer
#[doc(hidden)]
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
