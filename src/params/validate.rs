//! Shared validation and tolerance-comparison helpers.

use crate::constants::{PARAM_EQ_TOLERANCE, SYMMETRY_TOLERANCE};
use crate::error::{ParamError, Result};
use crate::{Matrix, Vector};

/// Convert a general matrix into a mean vector, checking orientation.
pub(crate) fn mean_from_matrix(mean: Matrix) -> Result<Vector> {
    if mean.nrows() == 0 || mean.ncols() == 0 {
        return Err(ParamError::EmptyMean);
    }
    if mean.ncols() != 1 {
        return Err(ParamError::MeanNotColumn {
            rows: mean.nrows(),
            cols: mean.ncols(),
        });
    }
    Ok(mean.column(0).into_owned())
}

/// Mean must be non-empty with finite entries.
pub(crate) fn check_means(means: &Vector) -> Result<()> {
    if means.is_empty() {
        return Err(ParamError::EmptyMean);
    }
    if let Some(index) = means.iter().position(|m| !m.is_finite()) {
        return Err(ParamError::NonFinite {
            field: "mean",
            index,
        });
    }
    Ok(())
}

/// Covariance must be `dims × dims`, finite and symmetric.
pub(crate) fn check_covariance(covariance: &Matrix, dims: usize) -> Result<()> {
    if covariance.nrows() != dims {
        return Err(ParamError::CovarianceDims {
            rows: covariance.nrows(),
            dims,
        });
    }
    if !covariance.is_square() {
        return Err(ParamError::CovarianceNotSquare {
            rows: covariance.nrows(),
            cols: covariance.ncols(),
        });
    }
    if let Some(index) = covariance.iter().position(|c| !c.is_finite()) {
        return Err(ParamError::NonFinite {
            field: "covariance",
            index,
        });
    }
    for col in 0..dims {
        for row in (col + 1)..dims {
            let a = covariance[(row, col)];
            let b = covariance[(col, row)];
            let scale = 1.0_f64.max(a.abs()).max(b.abs());
            if (a - b).abs() > SYMMETRY_TOLERANCE * scale {
                return Err(ParamError::CovarianceNotSymmetric { row, col });
            }
        }
    }
    Ok(())
}

/// Bound vectors must match `dims` and describe non-empty intervals.
///
/// Infinite bounds are allowed on the open side only: a lower bound of
/// `+inf` or an upper bound of `-inf` leaves nothing to sample.
pub(crate) fn check_bounds(lowers: &Vector, uppers: &Vector, dims: usize) -> Result<()> {
    if lowers.len() != dims {
        return Err(ParamError::BoundsDims {
            which: "lower",
            len: lowers.len(),
            dims,
        });
    }
    if uppers.len() != dims {
        return Err(ParamError::BoundsDims {
            which: "upper",
            len: uppers.len(),
            dims,
        });
    }
    for (index, (&lower, &upper)) in lowers.iter().zip(uppers.iter()).enumerate() {
        check_interval(index, lower, upper)?;
    }
    Ok(())
}

/// A single truncation interval `[lower, upper]`.
pub(crate) fn check_interval(index: usize, lower: f64, upper: f64) -> Result<()> {
    let valid = !lower.is_nan()
        && !upper.is_nan()
        && lower <= upper
        && lower != f64::INFINITY
        && upper != f64::NEG_INFINITY;
    if !valid {
        return Err(ParamError::InvertedBounds {
            index,
            lower,
            upper,
        });
    }
    Ok(())
}

/// Scalar location must be finite.
pub(crate) fn check_scalar_mean(mean: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(ParamError::NonFinite {
            field: "mean",
            index: 0,
        });
    }
    Ok(())
}

/// Scalar scale must be finite and strictly positive.
pub(crate) fn check_stddev(stddev: f64) -> Result<()> {
    if stddev.is_infinite() {
        return Err(ParamError::NonFinite {
            field: "stddev",
            index: 0,
        });
    }
    if stddev.is_nan() || stddev <= 0.0 {
        return Err(ParamError::NonPositiveStdDev { stddev });
    }
    Ok(())
}

/// Build a matrix from row-major nested rows.
pub(crate) fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(ragged) = rows.iter().find(|r| r.len() != ncols) {
        return Err(ParamError::CovarianceNotSquare {
            rows: nrows,
            cols: ragged.len(),
        });
    }
    Ok(Matrix::from_fn(nrows, ncols, |i, j| rows[i][j]))
}

/// Row-major nested rows of a matrix.
pub(crate) fn matrix_to_rows(matrix: &Matrix) -> Vec<Vec<f64>> {
    matrix
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// `a` and `b` agree within [`PARAM_EQ_TOLERANCE`].
///
/// Equal infinities compare equal.
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < PARAM_EQ_TOLERANCE
}

pub(crate) fn approx_eq_vector(a: &Vector, b: &Vector) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| approx_eq(x, y))
}

pub(crate) fn approx_eq_matrix(a: &Matrix, b: &Matrix) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(&x, &y)| approx_eq(x, y))
}
