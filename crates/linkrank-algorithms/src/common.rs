//! Shared utilities for the ranking solvers
//!
//! Provides a read-only, index-based view of the graph topology plus the small
//! vector helpers both solvers need.

use super::error::{AlgoError, AlgoResult};
use ndarray::Array1;

/// Number of decimal digits kept when a caller asks for rounded scores
pub const ROUND_DIGITS: i32 = 3;

/// A dense, integer-indexed view of the graph topology in Compressed Sparse Row (CSR) format.
///
/// Index `i` is the `i`-th node in the owning graph's registration order; every vector
/// and matrix produced by the solvers uses the same indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
}

impl GraphView {
    /// Build a view from per-node successor lists.
    ///
    /// Duplicate targets within a list are collapsed; first occurrence order is kept.
    /// A target outside `0..outgoing.len()` is rejected with
    /// [`AlgoError::EdgeOutOfRange`].
    pub fn from_adjacency_list(outgoing: Vec<Vec<usize>>) -> AlgoResult<Self> {
        let node_count = outgoing.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();

        out_offsets.push(0);
        for (node, neighbors) in outgoing.into_iter().enumerate() {
            let start = out_targets.len();
            for target in neighbors {
                if target >= node_count {
                    return Err(AlgoError::EdgeOutOfRange {
                        node,
                        target,
                        node_count,
                    });
                }
                if !out_targets[start..].contains(&target) {
                    out_targets.push(target);
                }
            }
            out_offsets.push(out_targets.len());
        }

        Ok(GraphView {
            node_count,
            out_offsets,
            out_targets,
        })
    }

    /// View with no nodes
    pub fn empty() -> Self {
        GraphView {
            node_count: 0,
            out_offsets: vec![0],
            out_targets: Vec::new(),
        }
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// A node with no outgoing edges
    pub fn is_sink(&self, idx: usize) -> bool {
        self.out_degree(idx) == 0
    }

    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }
}

/// L1 distance between two vectors of equal length
pub fn l1_distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Round every component to `digits` decimal places
pub fn round_to(values: &[f64], digits: i32) -> Vec<f64> {
    let scale = 10f64.powi(digits);
    values.iter().map(|v| (v * scale).round() / scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_view_from_adjacency_list() {
        // 0 -> 1, 0 -> 2, 1 -> 2, 2 has no successors
        let view = GraphView::from_adjacency_list(vec![vec![1, 2], vec![2], vec![]]).unwrap();

        assert_eq!(view.node_count, 3);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.out_degree(1), 1);
        assert!(view.is_sink(2));
        assert_eq!(view.edge_count(), 3);
    }

    #[test]
    fn test_view_collapses_duplicate_targets() {
        let view = GraphView::from_adjacency_list(vec![vec![1, 1, 0, 1], vec![]]).unwrap();
        assert_eq!(view.successors(0), &[1, 0]);
        assert_eq!(view.out_degree(0), 2);
    }

    #[test]
    fn test_view_rejects_out_of_range_target() {
        let err = GraphView::from_adjacency_list(vec![vec![1], vec![5]]).unwrap_err();
        assert_eq!(
            err,
            AlgoError::EdgeOutOfRange {
                node: 1,
                target: 5,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::empty();
        assert_eq!(view.node_count, 0);
        assert_eq!(view.edge_count(), 0);
        assert_eq!(view, GraphView::from_adjacency_list(Vec::new()).unwrap());
    }

    #[test]
    fn test_l1_distance() {
        let a = array![0.5, 0.25, 0.25];
        let b = array![0.25, 0.25, 0.5];
        assert!((l1_distance(&a, &b) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_round_to_three_digits() {
        let rounded = round_to(&[1.0 / 3.0, 0.6491228, 0.0004], ROUND_DIGITS);
        assert_eq!(rounded, vec![0.333, 0.649, 0.0]);
    }
}
