//! Property-based tests
//!
//! Invariants that should hold for all inputs assembled from supported
//! statement shapes:
//! - Idempotence: extracting the same unit twice yields identical output
//! - Totality: extraction returns Ok or Err, it never panics
//! - Wildcard honesty: no per-name bindings fabricated for star imports

use exportmap_core::{Binding, ExportExtractor, SourceUnit};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

const STATEMENTS: &[&str] = &[
    "import os",
    "import sys as system",
    "import collections.abc",
    "from . import sibling",
    "from ..pkg import helper",
    "from os.path import join as path_join, split",
    "from typing import *",
    "foo = 1",
    "foo = bar = 2",
    "a, b = 1, 2",
    "(c, d) = 3, 4",
    "head, *rest = [1, 2, 3]",
    "count: int = 0",
    "obj.attr = 1",
    "print(\"hello\")",
    "\"\"\"just a docstring\"\"\"",
    "def f():\n    pass",
    "async def g():\n    pass",
    "class C(Base):\n    pass",
    "try:\n    import fast_json\nexcept ImportError:\n    import json as fast_json",
];

fn assemble(indices: &[usize]) -> String {
    let mut source = String::new();
    for &i in indices {
        source.push_str(STATEMENTS[i % STATEMENTS.len()]);
        source.push('\n');
    }
    source
}

#[quickcheck]
fn qc_extraction_never_panics(indices: Vec<u8>) -> bool {
    let indices: Vec<usize> = indices.iter().map(|&i| i as usize).collect();
    let unit = SourceUnit::new("soup.py", assemble(&indices));
    // Ok or Err are both acceptable; panicking is not
    let _ = ExportExtractor::new().extract(&unit);
    true
}

#[quickcheck]
fn qc_wildcard_statements_fabricate_no_names(repeat: u8) -> bool {
    let n = (repeat % 8) as usize + 1;
    let source = "from something import *\n".repeat(n);
    let set = match ExportExtractor::new().extract(&SourceUnit::new("w.py", source)) {
        Ok(set) => set,
        Err(_) => return false,
    };
    set.has_wildcard
        && set.iter().all(|b| matches!(b, Binding::Wildcard(_)))
        && set.len() == n
}

proptest! {
    #[test]
    fn prop_extraction_is_idempotent(
        indices in proptest::collection::vec(0usize..STATEMENTS.len(), 0..24)
    ) {
        let unit = SourceUnit::new("gen.py", assemble(&indices));
        let extractor = ExportExtractor::new();
        let first = extractor.extract(&unit);
        let second = extractor.extract(&unit);
        prop_assert_eq!(&first, &second);
        if let (Ok(a), Ok(b)) = (&first, &second) {
            prop_assert_eq!(a.to_json(), b.to_json());
        }
    }

    #[test]
    fn prop_lookup_agrees_with_latest_record(
        indices in proptest::collection::vec(0usize..STATEMENTS.len(), 1..24)
    ) {
        let unit = SourceUnit::new("gen.py", assemble(&indices));
        let set = match ExportExtractor::new().extract(&unit) {
            Ok(set) => set,
            Err(_) => return Ok(()),
        };
        // For every bound name, lookup returns the last record with that name
        let records: Vec<&Binding> = set.iter().collect();
        for binding in &records {
            if let Some(name) = binding.local_name() {
                let latest = records
                    .iter()
                    .rev()
                    .find(|b| b.local_name() == Some(name))
                    .copied();
                prop_assert_eq!(set.lookup(name), latest);
            }
        }
    }
}
