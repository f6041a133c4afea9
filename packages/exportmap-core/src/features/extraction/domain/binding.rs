//! Binding variants
//!
//! A binding records how one local name entered module scope. The many
//! statement shapes (plain/aliased/relative imports, wildcard, chained and
//! unpacked assignments, def/class) collapse into one closed enum, each
//! variant carrying only the fields relevant to it.

use crate::shared::models::Span;
use serde::{Deserialize, Serialize};

/// Name introduced via an import statement
///
/// `module` is the source module path as written, without the leading dots of
/// relative forms; `dot_depth` counts those dots (0 = absolute). For
/// `from . import x` the module is empty and `dot_depth` is 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBinding {
    /// Local name bound in module scope
    pub local: String,

    /// Source module path (e.g. "os.path"), leading dots stripped
    pub module: String,

    /// Pre-alias name, for `import x as y` / `from m import x as y`
    pub original: Option<String>,

    /// Relative import depth (0 = absolute, 1 = ., 2 = .., ...)
    pub dot_depth: u32,

    /// Did this binding originate inside a try/except fallback block?
    pub in_fallback: bool,

    /// Except-branch bindings for the same local name. Empty for ordinary
    /// imports; alternates never carry alternates of their own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<ImportBinding>,

    pub span: Span,
}

/// Name introduced via a top-level assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentBinding {
    pub name: String,

    /// Ordinal among siblings of an unpacking statement; None for
    /// simple and chained targets
    pub unpack_index: Option<u32>,

    /// `name: T = value` or bare `name: T`
    pub annotated: bool,

    /// `*rest` target, bound to the remainder of the sequence
    pub starred: bool,

    pub span: Span,
}

/// Definition kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Function,
    Class,
}

/// Top-level function or class definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionBinding {
    pub name: String,
    pub kind: DefinitionKind,

    /// Declared base classes, verbatim as written. Always empty for
    /// functions; keyword arguments (metaclass=...) are not bases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<String>,

    pub is_async: bool,

    pub span: Span,
}

/// `from X import *` — the exported-name set is open, no individual
/// names are fabricated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardImport {
    pub module: String,
    pub dot_depth: u32,
    pub span: Span,
}

/// One observed top-level binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Binding {
    Import(ImportBinding),
    Assignment(AssignmentBinding),
    Definition(DefinitionBinding),
    Wildcard(WildcardImport),
}

impl Binding {
    /// The local name this binding introduces; wildcards introduce an
    /// indeterminate set and have none.
    pub fn local_name(&self) -> Option<&str> {
        match self {
            Binding::Import(b) => Some(&b.local),
            Binding::Assignment(b) => Some(&b.name),
            Binding::Definition(b) => Some(&b.name),
            Binding::Wildcard(_) => None,
        }
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            Binding::Import(_) => "import",
            Binding::Assignment(_) => "assignment",
            Binding::Definition(_) => "definition",
            Binding::Wildcard(_) => "wildcard",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Binding::Import(b) => b.span,
            Binding::Assignment(b) => b.span,
            Binding::Definition(b) => b.span,
            Binding::Wildcard(b) => b.span,
        }
    }
}
