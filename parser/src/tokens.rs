//! Shared line-tokenizing helpers.

use std::fs;
use std::path::Path;

use recon_core::VertexId;

use crate::{ParseError, ParseResult};

/// Read a whole input file, mapping I/O failures to [`ParseError::Unreadable`].
pub(crate) fn read_input(path: &Path) -> ParseResult<String> {
    fs::read_to_string(path).map_err(|source| ParseError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse every token after the leading one as a vertex identifier.
pub(crate) fn rest_as_vertices(line: &str, line_number: usize) -> ParseResult<Vec<VertexId>> {
    line.split_whitespace()
        .skip(1)
        .map(|token| parse_u32(token, line_number))
        .collect()
}

/// Parse one integer token, reporting the offending token and line on failure.
pub(crate) fn parse_u32(token: &str, line_number: usize) -> ParseResult<u32> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        token: token.to_string(),
        line: line_number,
    })
}
