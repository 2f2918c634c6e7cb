//! Error types for the ranking solvers

use thiserror::Error;

/// Errors raised while validating a configuration or solving for a rank vector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    /// Damping factor outside the open interval (0, 1)
    #[error("Damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("Iteration cap must be positive")]
    InvalidIterations,

    #[error("Convergence tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// A custom distribution does not have one entry per node
    #[error("Distribution has {actual} entries but the graph has {expected} nodes")]
    DistributionLength { expected: usize, actual: usize },

    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    /// The linear system has no unique solution
    #[error("System matrix is singular (zero pivot at column {pivot_index})")]
    SingularMatrix { pivot_index: usize },

    /// A successor list names a node index the view does not have
    #[error("Edge {node} -> {target} points outside a graph of {node_count} nodes")]
    EdgeOutOfRange {
        node: usize,
        target: usize,
        node_count: usize,
    },

    #[error("Dimension mismatch: {rows}x{cols} matrix with right-hand side of length {rhs}")]
    DimensionMismatch { rows: usize, cols: usize, rhs: usize },
}

pub type AlgoResult<T> = Result<T, AlgoError>;
