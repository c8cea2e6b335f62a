//! Multivariate normal parameters.

use mvdist_core::{factorize, CovarianceFactor};
use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::{ParamError, Result};
use crate::sampler::MultivariateParams;
use crate::{Matrix, Vector};

/// Validated mean vector and covariance of a multivariate normal, with the
/// covariance factorized once.
///
/// # Example
///
/// ```
/// use mvdist::{Matrix, MvNormalParams, Vector};
///
/// let params = MvNormalParams::new(
///     Vector::from_row_slice(&[0.0, 1.0]),
///     Matrix::from_row_slice(2, 2, &[1.0, 0.3, 0.3, 2.0]),
/// )
/// .unwrap();
/// assert_eq!(params.dims(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MvNormalRepr", into = "MvNormalRepr")]
pub struct MvNormalParams {
    means: Vector,
    covariance: Matrix,
    factor: CovarianceFactor,
}

impl MvNormalParams {
    /// Validate and factorize.
    ///
    /// # Errors
    ///
    /// Fails if the mean is empty or non-finite, the covariance does not
    /// match the mean's length or is not square, finite and symmetric, or
    /// the covariance is not positive-definite.
    pub fn new(means: Vector, covariance: Matrix) -> Result<Self> {
        validate::check_means(&means)?;
        validate::check_covariance(&covariance, means.len())?;
        let factor = factorize(&covariance)?;

        tracing::debug!(dims = means.len(), "Built multivariate normal parameters");

        Ok(Self {
            means,
            covariance,
            factor,
        })
    }

    /// Validate a mean given as a general matrix, then call [`Self::new`].
    ///
    /// The mean must be a single column.
    pub fn from_matrices(mean: Matrix, covariance: Matrix) -> Result<Self> {
        Self::new(validate::mean_from_matrix(mean)?, covariance)
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.means.len()
    }

    /// Mean vector.
    pub fn means(&self) -> &Vector {
        &self.means
    }

    /// Covariance matrix.
    pub fn covariance(&self) -> &Matrix {
        &self.covariance
    }

    /// Cached Cholesky factor of the covariance.
    pub fn factor(&self) -> &CovarianceFactor {
        &self.factor
    }
}

impl MultivariateParams for MvNormalParams {
    fn dims(&self) -> usize {
        self.means.len()
    }
}

impl PartialEq for MvNormalParams {
    fn eq(&self, other: &Self) -> bool {
        validate::approx_eq_vector(&self.means, &other.means)
            && validate::approx_eq_matrix(&self.covariance, &other.covariance)
    }
}

#[derive(Serialize, Deserialize)]
struct MvNormalRepr {
    means: Vec<f64>,
    covariance: Vec<Vec<f64>>,
}

impl From<MvNormalParams> for MvNormalRepr {
    fn from(p: MvNormalParams) -> Self {
        Self {
            means: p.means.iter().copied().collect(),
            covariance: validate::matrix_to_rows(&p.covariance),
        }
    }
}

impl TryFrom<MvNormalRepr> for MvNormalParams {
    type Error = ParamError;

    fn try_from(r: MvNormalRepr) -> Result<Self> {
        let covariance = validate::matrix_from_rows(&r.covariance)?;
        Self::new(Vector::from_vec(r.means), covariance)
    }
}
