//! PageRank over a named graph
//!
//! Projects the [`Graph`] to an index view, runs the configured solver and returns the
//! scores in the graph's registration order together with convergence metadata.

use super::config::{Algorithm, RankConfig};
use super::RankError;
use crate::graph::Graph;
use linkrank_algorithms::{power_iteration, solve_exact, PageRankResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Scores plus how they were obtained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankOutcome {
    pub algorithm: Algorithm,
    /// One score per node, index-aligned with the graph's registration order
    pub scores: Vec<f64>,
    /// Power-method iterations performed (0 for the exact solver)
    pub iterations: usize,
    /// Last L1 step, or the L1 residual of the linear system
    pub residual: f64,
    /// False when the power method stopped at its iteration cap
    pub converged: bool,
}

impl RankOutcome {
    fn from_result(algorithm: Algorithm, result: PageRankResult) -> Self {
        RankOutcome {
            algorithm,
            scores: result.scores,
            iterations: result.iterations,
            residual: result.residual,
            converged: result.converged,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of the node called `name`
    pub fn score_of(&self, graph: &Graph, name: &str) -> Option<f64> {
        graph
            .index_of(name)
            .and_then(|id| self.scores.get(id.index()).copied())
    }

    pub fn total_mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Compute the PageRank vector of `graph`.
///
/// The graph is only read; calling this twice with the same arguments gives the same
/// scores. An empty graph yields an empty vector. With [`Algorithm::Iterative`],
/// stopping at `max_iterations` is not an error: check [`RankOutcome::converged`].
pub fn compute_rank(graph: &Graph, config: &RankConfig) -> Result<RankOutcome, RankError> {
    let solver_config = config.to_solver_config(graph)?;
    let view = graph.view()?;

    let result = match config.algorithm {
        Algorithm::Iterative => power_iteration(&view, &solver_config)?,
        Algorithm::Exact => solve_exact(&view, &solver_config)?,
    };

    info!(
        "Ranked {} nodes with {} solver ({} iterations, residual {:e})",
        graph.len(),
        config.algorithm,
        result.iterations,
        result.residual
    );
    Ok(RankOutcome::from_result(config.algorithm, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Personalization;
    use crate::graph::{GraphError, NodeName};
    use linkrank_algorithms::AlgoError;

    fn star() -> Graph {
        // Center links to both leaves, leaves link back
        Graph::from_edges([
            ("center", "l1"),
            ("center", "l2"),
            ("l1", "center"),
            ("l2", "center"),
        ])
    }

    #[test]
    fn test_pagerank_simple() {
        let graph = star();
        let outcome = compute_rank(&graph, &RankConfig::default()).unwrap();

        let center = outcome.score_of(&graph, "center").unwrap();
        let l1 = outcome.score_of(&graph, "l1").unwrap();
        assert!(center > l1);
        assert_eq!(outcome.len(), 3);
        assert_eq!(outcome.algorithm, Algorithm::Iterative);
    }

    #[test]
    fn test_exact_matches_iterative() {
        let graph = star();
        let iterative = compute_rank(&graph, &RankConfig::default()).unwrap();
        let exact = compute_rank(
            &graph,
            &RankConfig::default().with_algorithm(Algorithm::Exact),
        )
        .unwrap();

        for (a, b) in iterative.scores.iter().zip(exact.scores.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
        assert_eq!(exact.iterations, 0);
    }

    #[test]
    fn test_empty_graph() {
        let outcome = compute_rank(&Graph::new(), &RankConfig::default()).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_graph_is_unchanged() {
        let graph = star();
        let before = graph.adjacency_matrix().unwrap();
        compute_rank(&graph, &RankConfig::default()).unwrap();
        compute_rank(&graph, &RankConfig::default().with_algorithm(Algorithm::Exact)).unwrap();
        assert_eq!(graph.adjacency_matrix().unwrap(), before);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_teleport_by_name() {
        let graph = Graph::from_edges([("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")]);
        let config = RankConfig::default()
            .with_algorithm(Algorithm::Exact)
            .with_teleportation(Personalization::by_name([("c", 1.0)]));
        let outcome = compute_rank(&graph, &config).unwrap();

        assert!(outcome.score_of(&graph, "a").unwrap() < 1e-12);
        assert!((outcome.total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_personalization_name() {
        let config = RankConfig::default().with_teleportation(Personalization::by_name([("x", 1.0)]));
        let err = compute_rank(&star(), &config).unwrap_err();
        assert!(matches!(
            err,
            RankError::Graph(GraphError::NodeNotFound(ref n)) if *n == NodeName::from("x")
        ));
    }

    #[test]
    fn test_invalid_alpha() {
        for algorithm in [Algorithm::Iterative, Algorithm::Exact] {
            let config = RankConfig::default().with_alpha(1.2).with_algorithm(algorithm);
            let err = compute_rank(&star(), &config).unwrap_err();
            assert!(matches!(err, RankError::Algo(AlgoError::InvalidDamping(_))));
        }
    }
}
