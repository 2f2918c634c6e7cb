//! PageRank power method
//!
//! Approximates the stationary vector of
//! `x = α(P·x + (c·x)·dangling) + (1-α)·v`
//! by fixed-point iteration from the uniform vector. The mass parked on sink nodes
//! (`c·x`) is redistributed along the dangling distribution at every step, so the
//! iterate keeps summing to 1.
//!
//! The loop stops when the L1 step falls below the tolerance or when the iteration
//! cap is reached, whichever comes first. Hitting the cap is not an error: the last
//! iterate is returned with `converged = false`. Graphs with a small spectral gap
//! (damping close to 1, long chains) may need a larger cap to be accurate.

use super::common::{l1_distance, round_to, GraphView, ROUND_DIGITS};
use super::error::{AlgoError, AlgoResult};
use super::transition::TransitionMatrix;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Probability distribution over the nodes of a graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// 1/N on every node
    #[default]
    Uniform,
    /// One non-negative weight per node, in node order. Normalized to sum 1.
    Custom(Vec<f64>),
}

impl Distribution {
    /// Materialize the distribution for a graph of `n` nodes
    pub fn resolve(&self, n: usize) -> AlgoResult<Array1<f64>> {
        match self {
            Distribution::Uniform => {
                if n == 0 {
                    Ok(Array1::zeros(0))
                } else {
                    Ok(Array1::from_elem(n, 1.0 / n as f64))
                }
            }
            Distribution::Custom(weights) => {
                if weights.len() != n {
                    return Err(AlgoError::DistributionLength {
                        expected: n,
                        actual: weights.len(),
                    });
                }
                if n == 0 {
                    return Ok(Array1::zeros(0));
                }
                if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
                    return Err(AlgoError::InvalidDistribution(format!(
                        "weight {} is negative or not finite",
                        bad
                    )));
                }
                let total: f64 = weights.iter().sum();
                if total <= 0.0 {
                    return Err(AlgoError::InvalidDistribution(
                        "weights sum to zero".to_string(),
                    ));
                }
                Ok(weights.iter().map(|w| w / total).collect())
            }
        }
    }
}

/// PageRank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Damping factor, must lie in (0, 1)
    pub damping_factor: f64,
    /// Iteration cap for the power method (ignored by the exact solver)
    pub max_iterations: usize,
    /// Convergence tolerance on the L1 step. The 1e-16 default is usually below
    /// rounding noise, so the loop then runs to the cap; see `converged`.
    pub tolerance: f64,
    /// Round scores to three decimal digits
    pub round: bool,
    /// Teleportation (personalization) vector `v`
    pub teleportation: Distribution,
    /// Distribution sink mass is spread over
    pub dangling: Distribution,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 400,
            tolerance: 1e-16,
            round: false,
            teleportation: Distribution::Uniform,
            dangling: Distribution::Uniform,
        }
    }
}

impl PageRankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn with_teleportation(mut self, teleportation: Distribution) -> Self {
        self.teleportation = teleportation;
        self
    }

    pub fn with_dangling(mut self, dangling: Distribution) -> Self {
        self.dangling = dangling;
        self
    }

    /// Check the scalar parameters. Distributions are checked against the graph size
    /// when resolved.
    pub fn validate(&self) -> AlgoResult<()> {
        let d = self.damping_factor;
        if !(d > 0.0 && d < 1.0) {
            return Err(AlgoError::InvalidDamping(d));
        }
        if self.max_iterations == 0 {
            return Err(AlgoError::InvalidIterations);
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(AlgoError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankResult {
    /// Scores in node order
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final L1 step (power method) or L1 residual of the linear system (exact)
    pub residual: f64,
    /// Whether the stopping criterion was met before the cap
    pub converged: bool,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, residual: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            residual,
            converged,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), 0, 0.0, true)
    }

    pub(crate) fn apply_rounding(mut self, round: bool) -> Self {
        if round {
            self.scores = round_to(&self.scores, ROUND_DIGITS);
        }
        self
    }

    /// Sum of all scores
    pub fn total_mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Run the power method on the graph view
pub fn power_iteration(view: &GraphView, config: &PageRankConfig) -> AlgoResult<PageRankResult> {
    config.validate()?;
    let n = view.node_count;
    let v = config.teleportation.resolve(n)?;
    let dangling = config.dangling.resolve(n)?;

    if n == 0 {
        return Ok(PageRankResult::empty());
    }

    let p = TransitionMatrix::from_view(view);
    Ok(iterate(&p, &v, &dangling, config).apply_rounding(config.round))
}

/// Fixed-point loop over an already built transition matrix
pub(crate) fn iterate(
    p: &TransitionMatrix,
    v: &Array1<f64>,
    dangling: &Array1<f64>,
    config: &PageRankConfig,
) -> PageRankResult {
    let n = p.len();
    let alpha = config.damping_factor;
    info!(
        "Power method: {} nodes, {} sinks, damping {}, cap {}",
        n,
        p.sink_count(),
        alpha,
        config.max_iterations
    );

    let mut x = Array1::from_elem(n, 1.0 / n as f64);
    let mut error = f64::INFINITY;
    let mut iterations = 0;

    while iterations < config.max_iterations {
        iterations += 1;
        let parked = p.dangling_mass(&x);
        let mut next = p.apply(&x);
        next.scaled_add(parked, dangling);
        next *= alpha;
        next.scaled_add(1.0 - alpha, v);

        error = l1_distance(&next, &x);
        x = next;
        if error < config.tolerance {
            break;
        }
    }

    let converged = error < config.tolerance;
    if converged {
        debug!("Power method converged after {} iterations", iterations);
    } else {
        warn!(
            "Power method hit the cap of {} iterations, last L1 step {:e}",
            config.max_iterations, error
        );
    }

    PageRankResult::new(x.to_vec(), iterations, error, converged)
}
