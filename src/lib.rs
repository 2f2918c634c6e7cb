//! Linkrank
//!
//! PageRank for directed graphs given as edge lists, with two solvers that reach the
//! same stationary vector:
//!
//! - **Iterative**: power method with uniform start, redistributing the mass parked
//!   on sink nodes at every step. Stops at an L1 tolerance or an iteration cap and
//!   reports which one happened.
//! - **Exact**: completes the sink columns of the transition matrix and solves the
//!   dense linear system `(I - αP')x = (1-α)v`.
//!
//! # Architecture
//!
//! edge list → [`graph::Graph`] → transition matrix → {power method | exact solve}
//! → scores in node registration order → [`format`].
//!
//! The numeric core lives in the `linkrank-algorithms` crate and only sees dense
//! indices; this crate owns names, configuration and I/O.
//!
//! # Scalability
//!
//! Both solvers build a dense N×N matrix, so memory is O(N²); the exact solver is
//! O(N³) in time. Graphs that do not fit a dense matrix are out of scope.
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{compute_rank, Algorithm, Graph, RankConfig};
//!
//! let graph = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
//!
//! let config = RankConfig::default()
//!     .with_algorithm(Algorithm::Exact)
//!     .with_rounding(true);
//! let outcome = compute_rank(&graph, &config).unwrap();
//!
//! assert_eq!(outcome.scores, vec![0.333, 0.333, 0.333]);
//! assert_eq!(outcome.score_of(&graph, "B"), Some(0.333));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod format;
pub mod graph;
pub mod loader;

// Re-export main types for convenience
pub use graph::{Graph, GraphError, GraphResult, Node, NodeId, NodeName};

pub use algo::{
    compute_rank, AlgoError, Algorithm, Personalization, RankConfig, RankError, RankOutcome,
    RankResult,
};

pub use loader::{
    build_graph, generate_edge_list, parse_edge_list, save_edge_list, write_edge_list,
    LoaderError, LoaderResult,
};

pub use format::{pretty_print, ranked_nodes, top_n, RankedNode};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
