//! Statement extractors
//!
//! One module per statement family; each takes a grammar node plus the
//! source text and yields domain bindings.

pub mod assignment;
pub mod definition;
pub mod import;

pub use assignment::extract_assignment;
pub use definition::{extract_class, extract_decorated, extract_function};
pub use import::{extract_import_from_statement, extract_import_statement, FromImport};
