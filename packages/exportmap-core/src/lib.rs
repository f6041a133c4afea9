/*
 * Exportmap Core - Python Export Extraction
 *
 * Feature-First Hexagonal Architecture:
 * - shared/   : Common models (Span, SourceUnit)
 * - features/ : Extraction slice (domain -> ports -> application -> infrastructure)
 *
 * One parse pass per source unit: text -> tree-sitter CST -> top-level
 * statement walk -> ordered exported-symbol set. Pure and stateless; the
 * caller owns file I/O and any concurrency limit beyond extract_many.
 */

#![allow(clippy::collapsible_if)] // Readability over brevity
#![allow(clippy::single_match)] // Single match for readability

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

/// Shared models and utilities
pub mod shared;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{ExtractError, Result};
pub use features::extraction::domain::{
    AssignmentBinding, Binding, DefinitionBinding, DefinitionKind, Diagnostic, ExportSet,
    ImportBinding, WildcardImport,
};
pub use features::extraction::{extract_many, ExportExtractor};
pub use shared::models::{SourceUnit, Span};
