// This module stores the slow-path blocks collected during a generation run. Several handlers
// usually share one fallback routine, so blocks are keyed by name and generated text is only
// kept once. A repeated request must reproduce the stored text byte for byte; anything else
// means the template produced different code under the same name, which is reported with the
// first line where the two versions diverge. Entries are kept in a BTreeMap so the orchestrator
// can append them in ascending name order no matter which handler asked for them first.

//! Name-keyed registry of deduplicated slow-path blocks.

use super::error::{GenError, GenResult};
use std::collections::BTreeMap;

/// Slow-path blocks registered during one run, ordered by name.
#[derive(Debug, Default)]
pub struct SlowPathRegistry {
    blocks: BTreeMap<String, String>,
}

impl SlowPathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under `name`.
    ///
    /// Returns `Ok(true)` when the block is new and `Ok(false)` when an
    /// identical block was already present.
    pub fn register(&mut self, name: &str, text: String) -> GenResult<bool> {
        if let Some(existing) = self.blocks.get(name) {
            if *existing != text {
                return Err(GenError::SlowPathMismatch {
                    name: name.to_string(),
                    line: first_difference(existing, &text),
                });
            }
            return Ok(false);
        }

        self.blocks.insert(name.to_string(), text);
        Ok(true)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// 1-based line number of the first line that differs between `a` and `b`.
fn first_difference(a: &str, b: &str) -> usize {
    let mut left = a.split('\n');
    let mut right = b.split('\n');
    let mut line = 1;
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => line += 1,
            _ => return line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_new_and_repeat() {
        let mut registry = SlowPathRegistry::new();
        assert!(registry.register("op_move_slow_path", "a\nb\n".into()).unwrap());
        assert!(!registry.register("op_move_slow_path", "a\nb\n".into()).unwrap());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("op_move_slow_path"), Some("a\nb\n"));
    }

    #[test]
    fn test_mismatch_reports_line() {
        let mut registry = SlowPathRegistry::new();
        registry.register("x", "one\ntwo\nthree\n".into()).unwrap();

        match registry.register("x", "one\nTWO\nthree\n".into()) {
            Err(GenError::SlowPathMismatch { name, line }) => {
                assert_eq!(name, "x");
                assert_eq!(line, 2);
            }
            other => panic!("expected SlowPathMismatch, got {:?}", other),
        }
        // Stored text is untouched by the failed request.
        assert_eq!(registry.get("x"), Some("one\ntwo\nthree\n"));
    }

    #[test]
    fn test_mismatch_on_trailing_text() {
        let mut registry = SlowPathRegistry::new();
        registry.register("x", "one\n".into()).unwrap();
        let err = registry.register("x", "one\ntwo\n".into()).unwrap_err();
        assert!(matches!(err, GenError::SlowPathMismatch { line: 2, .. }));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut registry = SlowPathRegistry::new();
        registry.register("foo_slow_path", "f\n".into()).unwrap();
        registry.register("bar_slow_path", "b\n".into()).unwrap();
        registry.register("common_slow_path", "c\n".into()).unwrap();

        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["bar_slow_path", "common_slow_path", "foo_slow_path"]);
    }
}
