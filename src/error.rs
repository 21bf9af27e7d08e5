//! Compile error taxonomy.
//!
//! All variants are fatal: compilation either emits a complete artifact for
//! every node or reports the first failure and produces nothing.

/// Errors that can occur while compiling a topology
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    #[error("malformed topology line {line_no}: '{line}' (expected '<from> <to> <relationship>')")]
    MalformedLine { line_no: usize, line: String },

    #[error("unknown relationship '{tag}' on topology line {line_no}: '{line}'")]
    UnknownRelationship {
        line_no: usize,
        tag: String,
        line: String,
    },

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
