//! Transition matrix construction
//!
//! Turns the adjacency relation of a [`GraphView`] into the column-stochastic matrix `P`
//! used by both solvers. Column `j` holds the outgoing distribution of node `j`;
//! a sink column is left all-zero and flagged in the sink indicator instead of being
//! filled here, since each solver applies its own completion.

use super::common::GraphView;
use ndarray::{Array1, Array2, Zip};
use tracing::debug;

/// 0/1 adjacency matrix: entry (i, j) is 1 iff node `i` links to node `j`.
///
/// Built straight from the successor lists, so the cost beyond the dense
/// allocation is O(E).
pub fn adjacency_matrix(view: &GraphView) -> Array2<f64> {
    let n = view.node_count;
    let mut a = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for &j in view.successors(i) {
            a[[i, j]] = 1.0;
        }
    }
    a
}

/// Column-stochastic (sub-stochastic when sinks exist) transition matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    /// `matrix[[i, j]]` = probability mass flowing from node `j` to node `i`
    pub matrix: Array2<f64>,
    /// Sink indicator `c`: 1.0 where the column sums to zero
    pub sinks: Array1<f64>,
    /// Out-degree of each node as counted from the adjacency matrix
    pub out_degrees: Array1<f64>,
}

impl TransitionMatrix {
    pub fn from_view(view: &GraphView) -> Self {
        let at = adjacency_matrix(view).reversed_axes();
        let out_degrees = at.sum_axis(ndarray::Axis(0));
        let sinks = out_degrees.mapv(|d| if d == 0.0 { 1.0 } else { 0.0 });

        // Sink columns divide by 1 and stay zero
        let divisors = out_degrees.mapv(|d| if d == 0.0 { 1.0 } else { d });
        let mut matrix = at;
        for (mut column, &d) in matrix.columns_mut().into_iter().zip(divisors.iter()) {
            column /= d;
        }

        let transition = TransitionMatrix {
            matrix,
            sinks,
            out_degrees,
        };
        debug!(
            "Built {}x{} transition matrix with {} sink node(s)",
            transition.len(),
            transition.len(),
            transition.sink_count()
        );
        transition
    }

    /// Dimension N of the square matrix
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.iter().filter(|&&c| c == 1.0).count()
    }

    pub fn is_sink(&self, j: usize) -> bool {
        self.sinks[j] == 1.0
    }

    /// `P · x`
    pub fn apply(&self, x: &Array1<f64>) -> Array1<f64> {
        self.matrix.dot(x)
    }

    /// Probability mass currently parked on sink nodes (`c · x`)
    pub fn dangling_mass(&self, x: &Array1<f64>) -> f64 {
        self.sinks.dot(x)
    }

    /// `P + outer(u, c)`: every sink column replaced by `u`, giving a genuinely
    /// column-stochastic matrix when `u` sums to 1.
    pub fn completed(&self, u: &Array1<f64>) -> Array2<f64> {
        let mut completed = self.matrix.clone();
        for (j, mut column) in completed.columns_mut().into_iter().enumerate() {
            if self.is_sink(j) {
                Zip::from(&mut column).and(u).for_each(|p, &uj| *p += uj);
            }
        }
        completed
    }
}
