//! Cholesky factorization of covariance matrices.
//!
//! Every Gaussian-family sampler maps independent standard normal draws into
//! the target covariance structure through the lower Cholesky factor `L`
//! (`L Lᵀ = Σ`). The factorization also yields `L⁻¹` and `Σ⁻¹ = L⁻ᵀ L⁻¹`,
//! both computed by triangular solves rather than a general inverse.

use nalgebra::Cholesky;

use crate::error::NumericalError;
use crate::types::{Matrix, Vector};

/// Lower Cholesky factor of a covariance matrix with its derived inverses.
#[derive(Debug, Clone, PartialEq)]
pub struct CovarianceFactor {
    /// L such that L Lᵀ = Σ.
    lower: Matrix,

    /// L⁻¹ (also lower-triangular).
    inverse_lower: Matrix,

    /// Σ⁻¹ = L⁻ᵀ L⁻¹.
    inverse_covariance: Matrix,
}

impl CovarianceFactor {
    /// Dimension of the factorized matrix.
    pub fn dims(&self) -> usize {
        self.lower.nrows()
    }

    /// Lower-triangular factor L with L Lᵀ = Σ.
    pub fn lower(&self) -> &Matrix {
        &self.lower
    }

    /// Inverse of the lower factor.
    pub fn inverse_lower(&self) -> &Matrix {
        &self.inverse_lower
    }

    /// Inverse covariance (precision) matrix.
    pub fn inverse_covariance(&self) -> &Matrix {
        &self.inverse_covariance
    }

    /// Map a vector of independent standard normals to `L z`.
    ///
    /// The result has covariance Σ when `z ~ N(0, I)`.
    pub fn correlate(&self, z: &Vector) -> Vector {
        &self.lower * z
    }
}

/// Factorize a symmetric positive-definite matrix.
///
/// Only the lower triangle of `covariance` is read by the decomposition;
/// symmetry is the caller's responsibility (parameter sets check it before
/// factorizing).
///
/// # Errors
///
/// - [`NumericalError::NotSquare`] if the matrix is not square.
/// - [`NumericalError::NotPositiveDefinite`] if the decomposition does not exist.
pub fn factorize(covariance: &Matrix) -> Result<CovarianceFactor, NumericalError> {
    if !covariance.is_square() {
        return Err(NumericalError::NotSquare {
            rows: covariance.nrows(),
            cols: covariance.ncols(),
        });
    }

    let chol = Cholesky::new(covariance.clone()).ok_or(NumericalError::NotPositiveDefinite)?;
    let lower = chol.l();

    // Solve L X = I column by column (forward substitution).
    let n = lower.nrows();
    let inverse_lower = lower
        .solve_lower_triangular(&Matrix::identity(n, n))
        .ok_or(NumericalError::NotPositiveDefinite)?;
    let inverse_covariance = inverse_lower.transpose() * &inverse_lower;

    Ok(CovarianceFactor {
        lower,
        inverse_lower,
        inverse_covariance,
    })
}
