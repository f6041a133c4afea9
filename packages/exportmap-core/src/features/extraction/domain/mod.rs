//! Extraction domain models

mod binding;
mod export_set;

pub use binding::{
    AssignmentBinding, Binding, DefinitionBinding, DefinitionKind, ImportBinding, WildcardImport,
};
pub use export_set::{Diagnostic, ExportSet};
