//! Input unit for extraction
//!
//! One module's source text plus its identifying path. The path is
//! provenance only (error messages, serialized output); it is never parsed.

use serde::{Deserialize, Serialize};

/// One module's source text, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub path: String,
    pub source: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }

    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let unit = SourceUnit::new("mod.py", "import os\nfoo = 1\n");
        assert_eq!(unit.line_count(), 2);
        assert!(!unit.is_empty());
    }

    #[test]
    fn test_empty_unit() {
        assert!(SourceUnit::new("mod.py", "   \n").is_empty());
    }
}
