//! Plain-text edge-list format.
//!
//! ```text
//! # comment lines and blank lines are ignored
//! 7
//! 0 1
//! 1,2
//! 2 , 3
//! ```
//!
//! The first significant line is the vertex count `N`. Every following line
//! is one edge, endpoints separated by spaces and/or commas. Duplicate edges
//! collapse into one. `N` is capped at [`AdjacencyGraph::MAX_VERTICES`].

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{GraphError, ParseError};
use crate::graph::adjacency::AdjacencyGraph;

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Parse an edge list.
///
/// # Errors
///
/// Returns [`ParseError`] when the header is missing or invalid, a line is
/// not exactly two non-negative integers, or an endpoint is `>= N`.
pub fn parse_edge_list(input: &str) -> Result<AdjacencyGraph, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let vertex_count: usize = header
        .parse()
        .map_err(|_| ParseError::InvalidHeader(header.to_string()))?;
    let mut graph = AdjacencyGraph::try_new(vertex_count).map_err(|source| ParseError::Graph {
        line: header_line,
        source,
    })?;
    for (line, content) in lines {
        let malformed = || ParseError::Malformed {
            line,
            content: content.to_string(),
        };
        let mut parts = tokens(content);
        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let from: usize = from.parse().map_err(|_| malformed())?;
        let to: usize = to.parse().map_err(|_| malformed())?;
        graph
            .try_add_edge(from, to)
            .map_err(|source| ParseError::Graph { line, source })?;
    }

    Ok(graph)
}

/// Read and parse an edge-list file.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, otherwise any
/// error from [`parse_edge_list`].
#[instrument]
pub fn read_edge_list(path: &Path) -> Result<AdjacencyGraph, ParseError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_edge_list(&raw)?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(graph)
}

/// Write `graph` in the edge-list format.
///
/// # Errors
///
/// Propagates write failures from `w`.
pub fn write_edge_list(graph: &AdjacencyGraph, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}", graph.vertex_count())?;
    for (from, to) in graph.edges() {
        writeln!(w, "{from} {to}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators_and_comments() {
        let g = parse_edge_list("# sample\n4\n0 1\n1,2\n\n 2 , 3 \n3\t0\n0 1\n").expect("parse");
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 3), (3, 0)]
        );
    }

    #[test]
    fn header_only_is_edgeless() {
        let g = parse_edge_list("3\n").expect("parse");
        assert_eq!(g.vertex_count(), 3);
        assert!(g.is_empty());
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert!(matches!(
            parse_edge_list("# nothing\n\n"),
            Err(ParseError::MissingHeader)
        ));
    }

    #[test]
    fn bad_header_is_reported() {
        assert!(matches!(
            parse_edge_list("seven\n0 1\n"),
            Err(ParseError::InvalidHeader(h)) if h == "seven"
        ));
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let err = parse_edge_list("3\n0 1\n1 2 3\n").expect_err("three tokens");
        assert!(matches!(err, ParseError::Malformed { line: 3, .. }));
        let err = parse_edge_list("3\n0 x\n").expect_err("not a number");
        assert!(matches!(err, ParseError::Malformed { line: 2, .. }));
    }

    #[test]
    fn out_of_range_vertex_is_reported() {
        let err = parse_edge_list("2\n0 1\n\n1 5\n").expect_err("range");
        assert!(matches!(
            err,
            ParseError::Graph {
                line: 4,
                source: GraphError::VertexOutOfRange {
                    vertex: 5,
                    vertex_count: 2
                }
            }
        ));
    }

    #[test]
    fn oversized_header_reports_its_own_line() {
        let err = parse_edge_list("# c\n# d\n5000000000\n").expect_err("too many vertices");
        assert!(matches!(
            err,
            ParseError::Graph {
                line: 3,
                source: GraphError::TooManyVertices {
                    count: 5_000_000_000,
                    ..
                }
            }
        ));
    }

    #[test]
    fn header_past_the_cap_is_rejected() {
        let header = format!("{}\n", AdjacencyGraph::MAX_VERTICES + 1);
        assert!(matches!(
            parse_edge_list(&header),
            Err(ParseError::Graph {
                line: 1,
                source: GraphError::TooManyVertices { .. }
            })
        ));
    }

    #[test]
    fn written_list_parses_back() {
        let g = AdjacencyGraph::with_edges(5, &[(4, 0), (0, 4), (2, 2)]);
        let mut buf = Vec::new();
        write_edge_list(&g, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text, "5\n0 4\n2 2\n4 0\n");
        assert_eq!(parse_edge_list(&text).expect("parse"), g);
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let err = read_edge_list(Path::new("/nonexistent/graph.txt")).expect_err("missing");
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
