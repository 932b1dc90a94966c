// This module defines error types for the interpreter generator using the thiserror crate for
// idiomatic Rust error handling. GenError is the main error enum covering every way a run can
// fail: a slow path regenerated with different text, an opcode frame opened inside another,
// output capture nested deeper than the sink allows, an unbalanced capture, destination I/O
// failures and malformed opcode list files. Each variant carries the context needed to find
// the offending template code (block names, opcode names, line numbers, paths). The module
// also provides GenResult<T> as a convenience type alias for Result<T, GenError>. None of
// these errors are retried; a run either completes or is abandoned.

//! Error types for the interpreter generator.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a generation run.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Non-matching redefinition of {name} (first difference at line {line})")]
    SlowPathMismatch {
        name: String,
        line: usize,
    },

    #[error("Opcode frame {requested} started while {active} is still open")]
    NestedOpcodeFrame {
        active: String,
        requested: String,
    },

    #[error("Output capture for {name} would nest {depth} buffers deep (limit {limit})")]
    CaptureDepthExceeded {
        name: String,
        depth: usize,
        limit: usize,
    },

    #[error("Output capture ended without a matching start")]
    UnbalancedCapture,

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Opcode list line {line}: {reason}")]
    OpcodeList {
        line: usize,
        reason: String,
    },
}

/// Result type alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;
