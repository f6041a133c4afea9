//! Error types for exportmap-core
//!
//! Two error kinds only:
//! - `Parse`: malformed syntax, unrecoverable for that source unit
//! - `Structural`: a recognized import/assignment shape the extractor does
//!   not support; during a walk these are downgraded to diagnostics on the
//!   result, the variant exists for callers that promote them

use crate::shared::models::Span;
use thiserror::Error;

/// Main error type for extraction operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Malformed syntax
    #[error("{path}: parse error at {span}: {message}")]
    Parse {
        path: String,
        message: String,
        span: Span,
    },

    /// Recognized-but-unsupported statement shape
    #[error("{path}: unsupported statement at {span}: {message}")]
    Structural {
        path: String,
        message: String,
        span: Span,
    },
}

impl ExtractError {
    /// Create a parse error
    pub fn parse(path: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        ExtractError::Parse {
            path: path.into(),
            message: message.into(),
            span,
        }
    }

    /// Create a structural error
    pub fn structural(path: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        ExtractError::Structural {
            path: path.into(),
            message: message.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ExtractError::Parse { span, .. } | ExtractError::Structural { span, .. } => *span,
        }
    }
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
