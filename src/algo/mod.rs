//! Ranking entry point
//!
//! The solvers live in the `linkrank-algorithms` crate and work on dense indices.
//! This module is the adapter layer: it resolves name-keyed options against a
//! [`Graph`](crate::graph::Graph) and maps results back to node order.

pub mod config;
pub mod pagerank;

pub use config::{Algorithm, Personalization, RankConfig};
pub use pagerank::{compute_rank, RankOutcome};

// Re-export the solver layer
pub use linkrank_algorithms::{AlgoError, Distribution, PageRankConfig, PageRankResult};

use crate::graph::GraphError;
use thiserror::Error;

/// Errors from a rank computation or from loading its configuration
#[derive(Error, Debug)]
pub enum RankError {
    #[error("Solver error: {0}")]
    Algo(#[from] AlgoError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Unknown algorithm `{0}` (expected `iterative` or `exact`)")]
    UnknownAlgorithm(String),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RankResult<T> = Result<T, RankError>;
