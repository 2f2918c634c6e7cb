//! Result presentation
//!
//! Pairs a score vector with the node names of the graph it was computed on. Nothing
//! here changes the scores.

use crate::graph::{Graph, NodeName};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A score together with the node it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    /// 1-based position in the graph's registration order
    pub position: usize,
    pub name: NodeName,
    pub score: f64,
}

/// Scores labelled with node names, in registration order
pub fn ranked_nodes(graph: &Graph, scores: &[f64]) -> Vec<RankedNode> {
    graph
        .names()
        .zip(scores.iter())
        .enumerate()
        .map(|(i, (name, &score))| RankedNode {
            position: i + 1,
            name: name.clone(),
            score,
        })
        .collect()
}

/// The `n` highest-scoring nodes, best first. Ties keep registration order.
pub fn top_n(graph: &Graph, scores: &[f64], n: usize) -> Vec<RankedNode> {
    let mut ranked = ranked_nodes(graph, scores);
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);
    ranked
}

/// One `Node <i> [id: <name>]: <score>` line per node
pub fn pretty_print(graph: &Graph, scores: &[f64]) -> String {
    let mut out = String::new();
    out.push_str("Page rank values:\n");
    out.push_str("-----------------------\n");
    for node in ranked_nodes(graph, scores) {
        let _ = writeln!(out, "Node {} [id: {}]: {}", node.position, node.name, node.score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
        Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A"), ("D", "A")])
    }

    #[test]
    fn test_ranked_nodes_follow_registration_order() {
        let ranked = ranked_nodes(&graph(), &[0.4, 0.3, 0.2, 0.1]);

        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].name, NodeName::from("A"));
        assert_eq!(ranked[3].name, NodeName::from("D"));
        assert_eq!(ranked[3].position, 4);
        assert_eq!(ranked[2].score, 0.2);
    }

    #[test]
    fn test_top_n() {
        let top = top_n(&graph(), &[0.2, 0.4, 0.2, 0.2], 3);

        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_pretty_print() {
        let graph = Graph::from_edges([("x", "y")]);
        let text = pretty_print(&graph, &[0.351, 0.649]);

        assert!(text.contains("Node 1 [id: x]: 0.351\n"));
        assert!(text.contains("Node 2 [id: y]: 0.649\n"));
    }
}
