//! Answer (certificate) file reader.

use std::path::Path;

use recon_core::{Certificate, VertexSet};

use crate::tokens::{read_input, rest_as_vertices};
use crate::ParseResult;

/// Read the claimed certificate.
///
/// The first `a` line is the declaration: a second token of `NO` claims
/// that no sequence exists and ends ingestion immediately. Any other
/// declaration counts as YES and contributes no state. Every later `a`
/// line contributes one state, canonicalized. Lines not starting with `a`
/// are ignored; a file with no `a` lines yields an empty sequence.
pub fn read_answer_file(path: &Path) -> ParseResult<Certificate> {
    let text = read_input(path)?;
    let mut declared = false;
    let mut states: Vec<VertexSet> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if !line.starts_with('a') {
            continue;
        }
        if !declared {
            declared = true;
            if line.split_whitespace().nth(1) == Some("NO") {
                return Ok(Certificate::NoSequence);
            }
        } else {
            states.push(VertexSet::from_unsorted(rest_as_vertices(
                line,
                line_number,
            )?));
        }
    }

    Ok(Certificate::Sequence(states))
}
