//! Exact PageRank by direct linear solve
//!
//! Completes every sink column of `P` with the dangling distribution `u`, giving
//! `P' = P + outer(u, c)`, then solves `(I - αP')x = (1-α)v`. For `α` in (0, 1) the
//! system matrix is non-singular because `P'` is column-stochastic; a singular pivot
//! is reported as [`AlgoError::SingularMatrix`], never approximated.
//!
//! Costs O(N²) memory and O(N³) time, so this is only meant for graphs small enough
//! to hold a dense N×N matrix.
//!
//! [`AlgoError::SingularMatrix`]: super::error::AlgoError::SingularMatrix

use super::common::GraphView;
use super::error::AlgoResult;
use super::linalg;
use super::pagerank::{PageRankConfig, PageRankResult};
use super::transition::TransitionMatrix;
use ndarray::{Array1, Array2};
use tracing::{debug, info};

/// Solve for the exact stationary vector of the graph view
pub fn solve_exact(view: &GraphView, config: &PageRankConfig) -> AlgoResult<PageRankResult> {
    config.validate()?;
    let n = view.node_count;
    let v = config.teleportation.resolve(n)?;
    let u = config.dangling.resolve(n)?;

    if n == 0 {
        return Ok(PageRankResult::empty());
    }

    let p = TransitionMatrix::from_view(view);
    info!(
        "Exact solve: {} nodes, {} sinks, damping {}",
        n,
        p.sink_count(),
        config.damping_factor
    );
    Ok(solve_completed(&p, &v, &u, config.damping_factor)?.apply_rounding(config.round))
}

pub(crate) fn solve_completed(
    p: &TransitionMatrix,
    v: &Array1<f64>,
    u: &Array1<f64>,
    alpha: f64,
) -> AlgoResult<PageRankResult> {
    let completed = p.completed(u);
    let system = system_matrix(&completed, alpha);
    let rhs = v * (1.0 - alpha);

    let x = linalg::solve(system.clone(), rhs.clone())?;
    let residual: f64 = (system.dot(&x) - &rhs).iter().map(|r| r.abs()).sum();
    debug!("Exact solve residual {:e}", residual);

    Ok(PageRankResult::new(x.to_vec(), 0, residual, true))
}

/// `I - α·P'`
fn system_matrix(completed: &Array2<f64>, alpha: f64) -> Array2<f64> {
    let n = completed.nrows();
    Array2::eye(n) - completed * alpha
}
