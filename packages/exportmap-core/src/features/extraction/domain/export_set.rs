//! Exported-symbol set
//!
//! Ordered list of all bindings observed in one source unit. Iteration
//! preserves insertion order; lookup by name returns the latest live binding,
//! mirroring the dynamic rule that re-assignment replaces the prior binding.

use super::binding::{Binding, ImportBinding};
use crate::errors::ExtractError;
use crate::shared::models::Span;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// One skipped construct, surfaced so callers can measure coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,

    /// Raw grammar node kind of the offending statement
    pub raw_kind: String,

    pub span: Span,
}

impl Diagnostic {
    /// Promote to a structural error, for callers that treat skipped
    /// statements as failures
    pub fn into_error(self, path: &str) -> ExtractError {
        ExtractError::structural(path, self.message, self.span)
    }
}

/// All bindings observed in one source unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSet {
    records: Vec<Binding>,
    /// Latest live binding per local name
    index: HashMap<String, usize>,
    pub has_wildcard: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a binding. Later bindings to the same name shadow earlier ones
    /// for lookup; the record list keeps everything in observation order.
    pub fn push(&mut self, binding: Binding) {
        if let Binding::Wildcard(_) = binding {
            self.has_wildcard = true;
        }
        if let Some(name) = binding.local_name() {
            self.index.insert(name.to_string(), self.records.len());
        }
        self.records.push(binding);
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Latest live binding for a local name
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Is `name` currently bound?
    pub fn is_bound(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Mutable access to the live import binding for `name`, if the live
    /// binding is an import. Used to attach fallback alternates.
    pub(crate) fn live_import_mut(&mut self, name: &str) -> Option<&mut ImportBinding> {
        let i = *self.index.get(name)?;
        match &mut self.records[i] {
            Binding::Import(binding) => Some(binding),
            _ => None,
        }
    }

    /// All records in observation order
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to the external record shape: an ordered list of
    /// `{name, kind, detail}` rows plus the wildcard flag and diagnostics.
    pub fn to_json(&self) -> Value {
        let records: Vec<Value> = self
            .records
            .iter()
            .map(|binding| {
                let tagged = serde_json::to_value(binding).unwrap_or(Value::Null);
                json!({
                    "name": binding.local_name(),
                    "kind": binding.kind_str(),
                    "detail": tagged.get("detail").cloned().unwrap_or(Value::Null),
                })
            })
            .collect();
        json!({
            "records": records,
            "has_wildcard": self.has_wildcard,
            "diagnostics": self.diagnostics,
        })
    }
}
