//! Dense linear algebra
//!
//! Gaussian elimination with partial pivoting, enough to solve the N×N PageRank
//! system directly. O(N³) time and O(N²) memory.

use super::error::{AlgoError, AlgoResult};
use ndarray::{Array1, Array2};

/// Relative pivot threshold below which the matrix is treated as singular
const SINGULAR_EPSILON: f64 = 1e-12;

/// Solve `a · x = b` for `x`.
///
/// Consumes both operands; the elimination happens in place.
pub fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> AlgoResult<Array1<f64>> {
    let (rows, cols) = a.dim();
    if rows != cols || rows != b.len() {
        return Err(AlgoError::DimensionMismatch {
            rows,
            cols,
            rhs: b.len(),
        });
    }
    let n = rows;
    if n == 0 {
        return Ok(b);
    }

    let scale = a.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let threshold = if scale > 0.0 { scale * SINGULAR_EPSILON } else { f64::MIN_POSITIVE };

    // Forward elimination
    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_abs = a[[k, k]].abs();
        for r in (k + 1)..n {
            let candidate = a[[r, k]].abs();
            if candidate > pivot_abs {
                pivot_abs = candidate;
                pivot_row = r;
            }
        }
        if !(pivot_abs > threshold) {
            return Err(AlgoError::SingularMatrix { pivot_index: k });
        }

        if pivot_row != k {
            for c in k..n {
                a.swap([k, c], [pivot_row, c]);
            }
            b.swap(k, pivot_row);
        }

        let pivot = a[[k, k]];
        for r in (k + 1)..n {
            let factor = a[[r, k]] / pivot;
            if factor == 0.0 {
                continue;
            }
            a[[r, k]] = 0.0;
            for c in (k + 1)..n {
                a[[r, c]] -= factor * a[[k, c]];
            }
            b[r] -= factor * b[k];
        }
    }

    // Back substitution
    let mut x = Array1::<f64>::zeros(n);
    for k in (0..n).rev() {
        let mut acc = b[k];
        for c in (k + 1)..n {
            acc -= a[[k, c]] * x[c];
        }
        x[k] = acc / a[[k, k]];
    }

    Ok(x)
}
