//! Numerical failure modes of the core kernels.

use core::fmt;

/// Error returned when a required decomposition does not exist.
///
/// These failures depend only on the covariance matrix, so they surface once
/// when a parameter set is built and never during sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericalError {
    /// The matrix handed to the factorizer is not square.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Cholesky decomposition failed: the matrix is not positive-definite.
    NotPositiveDefinite,

    /// The covariance with row and column `index` removed is not
    /// positive-definite, so coordinate `index` cannot be conditioned on
    /// the others.
    SingularConditional {
        /// Coordinate being conditioned.
        index: usize,
    },

    /// The conditional variance of coordinate `index` given all others is
    /// zero or negative (the coordinate is a deterministic function of the
    /// rest, up to rounding).
    NonPositiveConditionalVariance {
        /// Coordinate being conditioned.
        index: usize,
    },
}

impl fmt::Display for NumericalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "cannot factorize a non-square {rows}x{cols} matrix")
            }
            Self::NotPositiveDefinite => write!(
                f,
                "Cholesky decomposition does not exist: covariance is not positive-definite"
            ),
            Self::SingularConditional { index } => write!(
                f,
                "covariance with coordinate {index} removed is singular; cannot condition on it"
            ),
            Self::NonPositiveConditionalVariance { index } => write!(
                f,
                "conditional variance of coordinate {index} is not positive"
            ),
        }
    }
}

impl core::error::Error for NumericalError {}
