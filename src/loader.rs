//! Edge-list input and output
//!
//! The text format is one edge per line, `parent,child`, no header. Tokens are opaque
//! names compared by string equality after trimming surrounding whitespace. Blank
//! lines are skipped; any other line that is not exactly two non-empty
//! comma-separated tokens fails the whole load.

use crate::graph::Graph;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Edge-list loading errors
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// `line` is 1-based
    #[error("Malformed edge on line {line}: `{content}` (expected `parent,child`)")]
    MalformedLine { line: usize, content: String },

    #[error("Invalid generator parameters: {0}")]
    InvalidParameters(String),
}

pub type LoaderResult<T> = Result<T, LoaderError>;

/// Split one line into its two endpoints
fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split(',');
    let parent = tokens.next()?.trim();
    let child = tokens.next()?.trim();
    if tokens.next().is_some() || parent.is_empty() || child.is_empty() {
        return None;
    }
    Some((parent, child))
}

/// Build a graph from an edge list. Nodes are registered in order of first appearance.
pub fn parse_edge_list<R: BufRead>(reader: R) -> LoaderResult<Graph> {
    let mut graph = Graph::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (parent, child) = parse_edge(&line).ok_or_else(|| LoaderError::MalformedLine {
            line: idx + 1,
            content: line.clone(),
        })?;
        graph.add_edge(parent, child);
    }

    debug!(
        "Parsed edge list: {} nodes, {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Read an edge-list file into a graph
pub fn build_graph(path: impl AsRef<Path>) -> LoaderResult<Graph> {
    let path = path.as_ref();
    info!("Loading edge list from {:?}", path);
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file))
}

/// `num_edges` random edges between nodes `0..num_nodes`.
///
/// Endpoints are drawn independently, so repeated edges and self-loops can occur.
pub fn generate_edge_list<R: Rng>(
    num_nodes: u64,
    num_edges: usize,
    rng: &mut R,
) -> LoaderResult<Vec<(u64, u64)>> {
    if num_nodes == 0 && num_edges > 0 {
        return Err(LoaderError::InvalidParameters(
            "cannot draw edges from zero nodes".to_string(),
        ));
    }
    Ok((0..num_edges)
        .map(|_| (rng.gen_range(0..num_nodes), rng.gen_range(0..num_nodes)))
        .collect())
}

/// Write edges in the `parent,child` line format
pub fn write_edge_list<W: Write, N: std::fmt::Display>(
    writer: W,
    edges: &[(N, N)],
) -> LoaderResult<()> {
    let mut writer = BufWriter::new(writer);
    for (parent, child) in edges {
        writeln!(writer, "{},{}", parent, child)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write an edge-list file, replacing any existing one
pub fn save_edge_list<N: std::fmt::Display>(
    path: impl AsRef<Path>,
    edges: &[(N, N)],
) -> LoaderResult<()> {
    let path = path.as_ref();
    info!("Writing {} edges to {:?}", edges.len(), path);
    write_edge_list(File::create(path)?, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn test_parse_edge_list() {
        let graph = parse_edge_list(Cursor::new("A,B\nB,C\nC,A\n")).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        let names: Vec<&str> = graph.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let graph = parse_edge_list(Cursor::new(" A , B \r\nB,A\n")).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let graph = parse_edge_list(Cursor::new("A,B\n\n   \nB,C\n")).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_malformed_lines_fail() {
        for (input, bad_line) in [
            ("A,B\nA\n", 2),
            ("A,B,C\n", 1),
            ("A,B\nB,C\n,D\n", 3),
            ("A,\n", 1),
        ] {
            match parse_edge_list(Cursor::new(input)) {
                Err(LoaderError::MalformedLine { line, .. }) => assert_eq!(line, bad_line),
                other => panic!("expected malformed line for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_generate_edge_list() {
        let mut rng = StdRng::seed_from_u64(7);
        let edges = generate_edge_list(10, 50, &mut rng).unwrap();

        assert_eq!(edges.len(), 50);
        assert!(edges.iter().all(|&(a, b)| a < 10 && b < 10));

        let mut again = StdRng::seed_from_u64(7);
        assert_eq!(generate_edge_list(10, 50, &mut again).unwrap(), edges);
    }

    #[test]
    fn test_generate_rejects_zero_nodes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_edge_list(0, 3, &mut rng).is_err());
        assert!(generate_edge_list(0, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_parse() {
        let mut buf = Vec::new();
        write_edge_list(&mut buf, &[(1u64, 2u64), (2, 3), (3, 1)]).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "1,2\n2,3\n3,1\n");

        let graph = parse_edge_list(Cursor::new(buf)).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.index_of("1").map(|id| id.index()), Some(0));
    }
}
