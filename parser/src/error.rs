//! Ingestion error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for ingestion operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that abort ingestion.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file could not be opened or read.
    #[error("File {} cannot be opened: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    /// A graph-file line starts with an unknown character.
    #[error("illegal input format in line {line}")]
    IllegalLine { line: usize },

    /// A token that should be an integer failed to parse.
    #[error("invalid integer {token:?} in line {line}")]
    InvalidInteger { token: String, line: usize },

    /// An edge line appeared before the problem line.
    #[error("edge in line {line} appears before the problem line")]
    EdgeBeforeProblem { line: usize },

    /// The graph file never declared its vertex count.
    #[error("missing or incomplete problem line")]
    MissingProblemLine,

    /// An edge endpoint is outside the declared vertex range.
    #[error("vertex {vertex} in line {line} is out of range 1..={max}")]
    VertexOutOfRange { vertex: u32, line: usize, max: u32 },
}
