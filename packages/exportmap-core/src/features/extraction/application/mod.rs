//! Extraction use cases

mod extract;

pub use extract::{extract_many, ExportExtractor};
