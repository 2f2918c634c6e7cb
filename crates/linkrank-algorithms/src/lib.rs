pub mod common;
pub mod error;
pub mod exact;
pub mod linalg;
pub mod pagerank;
pub mod transition;

pub use common::{l1_distance, round_to, GraphView, ROUND_DIGITS};
pub use error::{AlgoError, AlgoResult};
pub use exact::solve_exact;
pub use pagerank::{power_iteration, Distribution, PageRankConfig, PageRankResult};
pub use transition::{adjacency_matrix, TransitionMatrix};
