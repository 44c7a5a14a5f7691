//! DIMACS-like graph file reader.

use std::path::Path;

use recon_core::VertexId;
use recon_graph::Graph;

use crate::tokens::{parse_u32, read_input};
use crate::{ParseError, ParseResult};

/// Read a graph description.
///
/// Lines starting with `c` are comments. The `p` line has the form
/// `p <format> <num_vertices> [<num_edges>]`; the trailing edge count is
/// ignored. Each `e <u> <v>` line defines one edge with endpoints in
/// `1..=num_vertices`. Any other leading character, including a blank
/// line, is a fatal format error naming the 1-based line number.
pub fn read_graph_file(path: &Path) -> ParseResult<Graph> {
    let text = read_input(path)?;
    let mut num_vertices: Option<u32> = None;
    let mut edges: Vec<(VertexId, VertexId)> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        match line.chars().next() {
            Some('c') => {}
            Some('p') => {
                // Skip the leading token and the format token.
                let count = line
                    .split_whitespace()
                    .nth(2)
                    .ok_or(ParseError::MissingProblemLine)?;
                num_vertices = Some(parse_u32(count, line_number)?);
            }
            Some('e') => {
                let max = num_vertices.ok_or(ParseError::EdgeBeforeProblem {
                    line: line_number,
                })?;
                let mut tokens = line.split_whitespace().skip(1);
                let u = endpoint(tokens.next(), max, line_number)?;
                let v = endpoint(tokens.next(), max, line_number)?;
                edges.push((u, v));
            }
            _ => return Err(ParseError::IllegalLine { line: line_number }),
        }
    }

    let num_vertices = num_vertices.ok_or(ParseError::MissingProblemLine)?;
    Ok(Graph::new(num_vertices, edges))
}

fn endpoint(token: Option<&str>, max: u32, line_number: usize) -> ParseResult<VertexId> {
    let token = token.ok_or(ParseError::IllegalLine { line: line_number })?;
    let vertex = parse_u32(token, line_number)?;
    if vertex == 0 || vertex > max {
        return Err(ParseError::VertexOutOfRange {
            vertex,
            line: line_number,
            max,
        });
    }
    Ok(vertex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_vertices_and_edges() {
        let file = write_temp("c a path on three vertices\np isr 3 2\ne 1 2\ne 2 3\n");

        let graph = read_graph_file(file.path()).unwrap();

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.edges(), &[(1, 2), (2, 3)]);
    }

    #[test]
    fn test_edge_count_token_is_optional() {
        let file = write_temp("p isr 2\ne 1 2\n");

        let graph = read_graph_file(file.path()).unwrap();

        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.edges(), &[(1, 2)]);
    }

    #[test]
    fn test_unknown_leading_character_is_fatal() {
        let file = write_temp("p isr 3 1\nx 1 2\n");

        let err = read_graph_file(file.path()).unwrap_err();

        assert!(matches!(err, ParseError::IllegalLine { line: 2 }));
    }

    #[test]
    fn test_blank_line_is_fatal() {
        let file = write_temp("p isr 3 1\n\ne 1 2\n");

        let err = read_graph_file(file.path()).unwrap_err();

        assert!(matches!(err, ParseError::IllegalLine { line: 2 }));
    }

    #[test]
    fn test_edge_before_problem_line() {
        let file = write_temp("e 1 2\np isr 3 1\n");

        let err = read_graph_file(file.path()).unwrap_err();

        assert!(matches!(err, ParseError::EdgeBeforeProblem { line: 1 }));
    }

    #[test]
    fn test_missing_problem_line() {
        let file = write_temp("c only comments here\n");

        let err = read_graph_file(file.path()).unwrap_err();

        assert!(matches!(err, ParseError::MissingProblemLine));
    }

    #[test]
    fn test_endpoint_out_of_range() {
        let file = write_temp("p isr 3 1\ne 1 4\n");

        let err = read_graph_file(file.path()).unwrap_err();

        assert!(matches!(
            err,
            ParseError::VertexOutOfRange {
                vertex: 4,
                line: 2,
                max: 3
            }
        ));
    }

    #[test]
    fn test_zero_endpoint_rejected() {
        let file = write_temp("p isr 3 1\ne 0 2\n");

        let err = read_graph_file(file.path()).unwrap_err();

        assert!(matches!(err, ParseError::VertexOutOfRange { vertex: 0, .. }));
    }

    #[test]
    fn test_bad_integer_reports_token_and_line() {
        let file = write_temp("p isr 3 1\ne 1 two\n");

        let err = read_graph_file(file.path()).unwrap_err();

        match err {
            ParseError::InvalidInteger { token, line } => {
                assert_eq!(token, "two");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unopenable_file() {
        let err = read_graph_file(Path::new("/no/such/graph/file")).unwrap_err();

        assert!(matches!(err, ParseError::Unreadable { .. }));
    }
}
