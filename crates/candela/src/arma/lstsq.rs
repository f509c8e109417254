//! Dense least-squares kernel for regression-based model estimation.
//!
//! This module solves `argmin ||X·b - y||²` through the normal equations,
//! which is the right tool at the small column counts model estimation
//! produces (a handful of lag coefficients).
//!
//! # Algorithm
//!
//! 1. Accumulate the Gram matrix `X'X` and moment vector `X'y`
//! 2. Add a small ridge term to the Gram diagonal so that constant or
//!    collinear regressor columns keep the system solvable
//! 3. Solve with Gaussian elimination using partial pivoting
//!
//! # Complexity
//!
//! - Time: O(rows · cols²) to form the normal equations, O(cols³) to solve
//! - Space: O(cols²) for the Gram matrix

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Relative scale of the ridge term added to the Gram diagonal.
const RIDGE_SCALE: f64 = 1e-8;

/// Solves the least-squares problem `argmin ||X·b - y||²`.
///
/// `design` holds the regressor matrix X in row-major order with `rows`
/// observations of `cols` regressors each, and `target` holds the `rows`
/// response values.
///
/// The Gram diagonal is regularized with a ridge term proportional to its
/// average magnitude, so a design matrix with an exactly collinear or
/// all-zero column still yields a finite solution (with the redundant
/// coefficient shrunk to zero) instead of a singular system.
///
/// # Errors
///
/// Returns `Error::EstimationFailed` if:
/// - There are fewer observations than coefficients
/// - The system is singular even after regularization
/// - The solution contains non-finite coefficients
pub fn solve_least_squares<T: SeriesElement>(
    design: &[T],
    target: &[T],
    rows: usize,
    cols: usize,
) -> Result<Vec<T>> {
    debug_assert_eq!(design.len(), rows * cols);
    debug_assert_eq!(target.len(), rows);

    if rows < cols {
        return Err(Error::EstimationFailed {
            reason: format!("{rows} observations cannot identify {cols} coefficients"),
        });
    }

    // Accumulate the upper triangle of X'X and the full X'y
    let mut gram = vec![T::zero(); cols * cols];
    let mut moment = vec![T::zero(); cols];

    for r in 0..rows {
        let row = &design[r * cols..(r + 1) * cols];
        let y = target[r];
        for i in 0..cols {
            moment[i] = moment[i] + row[i] * y;
            for j in i..cols {
                gram[i * cols + j] = gram[i * cols + j] + row[i] * row[j];
            }
        }
    }

    // Mirror the upper triangle into the lower half
    for i in 0..cols {
        for j in 0..i {
            gram[i * cols + j] = gram[j * cols + i];
        }
    }

    // Ridge term scaled by the average diagonal magnitude, with a floor of
    // the bare scale so all-zero columns are still lifted off singularity
    let mut trace = T::zero();
    for i in 0..cols {
        trace = trace + gram[i * cols + i];
    }
    let cols_t = T::from_usize(cols)?;
    let ridge = T::from_f64(RIDGE_SCALE)? * (trace / cols_t + T::one());
    for i in 0..cols {
        gram[i * cols + i] = gram[i * cols + i] + ridge;
    }

    let solution = solve_linear_system(&mut gram, &mut moment, cols)?;

    if solution.iter().any(|b| !b.is_finite()) {
        return Err(Error::EstimationFailed {
            reason: "least squares produced non-finite coefficients".to_string(),
        });
    }

    Ok(solution)
}

/// Solves the n-by-n system `matrix · x = rhs` in place.
///
/// Gaussian elimination with partial pivoting; both `matrix` (row-major)
/// and `rhs` are consumed as scratch space.
fn solve_linear_system<T: SeriesElement>(
    matrix: &mut [T],
    rhs: &mut [T],
    n: usize,
) -> Result<Vec<T>> {
    for col in 0..n {
        // Find the pivot row
        let mut pivot_row = col;
        let mut pivot_mag = matrix[col * n + col].abs();
        for row in (col + 1)..n {
            let mag = matrix[row * n + col].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }

        if pivot_mag == T::zero() || !pivot_mag.is_finite() {
            return Err(Error::EstimationFailed {
                reason: "normal equations are singular".to_string(),
            });
        }

        if pivot_row != col {
            for k in col..n {
                matrix.swap(pivot_row * n + k, col * n + k);
            }
            rhs.swap(pivot_row, col);
        }

        // Eliminate entries below the pivot
        let pivot = matrix[col * n + col];
        for row in (col + 1)..n {
            let factor = matrix[row * n + col] / pivot;
            if factor == T::zero() {
                continue;
            }
            matrix[row * n + col] = T::zero();
            for k in (col + 1)..n {
                matrix[row * n + k] = matrix[row * n + k] - factor * matrix[col * n + k];
            }
            rhs[row] = rhs[row] - factor * rhs[col];
        }
    }

    // Back substitution
    let mut solution = vec![T::zero(); n];
    for col in (0..n).rev() {
        let mut acc = rhs[col];
        for k in (col + 1)..n {
            acc = acc - matrix[col * n + k] * solution[k];
        }
        solution[col] = acc / matrix[col * n + col];
    }

    Ok(solution)
}
