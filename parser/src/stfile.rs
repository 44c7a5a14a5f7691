//! Start/goal endpoints file reader.

use std::path::Path;

use recon_core::{Endpoints, VertexId, VertexSet};

use crate::tokens::{read_input, rest_as_vertices};
use crate::ParseResult;

/// Read the declared start and goal sets.
///
/// Lines starting with `s` append to the start set, lines starting with
/// `t` to the goal set; multiple lines of the same kind accumulate. All
/// other lines are ignored. Both sets are canonicalized after reading.
pub fn read_endpoints_file(path: &Path) -> ParseResult<Endpoints> {
    let text = read_input(path)?;
    let mut start: Vec<VertexId> = Vec::new();
    let mut goal: Vec<VertexId> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        match line.chars().next() {
            Some('s') => start.extend(rest_as_vertices(line, line_number)?),
            Some('t') => goal.extend(rest_as_vertices(line, line_number)?),
            _ => {}
        }
    }

    Ok(Endpoints {
        start: VertexSet::from_unsorted(start),
        goal: VertexSet::from_unsorted(goal),
    })
}
