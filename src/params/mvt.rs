//! Multivariate Student-t parameters.

use mvdist_core::{factorize, CovarianceFactor};
use rand_distr::ChiSquared;
use serde::{Deserialize, Serialize};

use super::validate;
use crate::constants::DEFAULT_STUDENT_T_DOF;
use crate::error::{ParamError, Result};
use crate::sampler::MultivariateParams;
use crate::{Matrix, Vector};

/// Degrees of freedom, location and scale matrix of a multivariate
/// Student-t.
///
/// The default is the one-dimensional standard t with two degrees of
/// freedom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MvStudentTRepr", into = "MvStudentTRepr")]
pub struct MvStudentTParams {
    dof: f64,
    means: Vector,
    covariance: Matrix,
    factor: CovarianceFactor,
    chi_squared: ChiSquared<f64>,
}

impl MvStudentTParams {
    /// Validate and factorize.
    ///
    /// Checks run in the same order as [`MvNormalParams::new`], with the
    /// degrees of freedom checked before factorization.
    ///
    /// [`MvNormalParams::new`]: crate::MvNormalParams::new
    pub fn new(means: Vector, covariance: Matrix, dof: f64) -> Result<Self> {
        validate::check_means(&means)?;
        validate::check_covariance(&covariance, means.len())?;
        if !dof.is_finite() || dof <= 0.0 {
            return Err(ParamError::NonPositiveDof { dof });
        }
        let chi_squared = ChiSquared::new(dof).map_err(|_| ParamError::NonPositiveDof { dof })?;
        let factor = factorize(&covariance)?;

        tracing::debug!(dims = means.len(), dof, "Built multivariate Student-t parameters");

        Ok(Self {
            dof,
            means,
            covariance,
            factor,
            chi_squared,
        })
    }

    /// Validate a mean given as a general matrix, then call [`Self::new`].
    pub fn from_matrices(mean: Matrix, covariance: Matrix, dof: f64) -> Result<Self> {
        Self::new(validate::mean_from_matrix(mean)?, covariance, dof)
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.means.len()
    }

    /// Degrees of freedom.
    pub fn dof(&self) -> f64 {
        self.dof
    }

    /// Location vector.
    pub fn means(&self) -> &Vector {
        &self.means
    }

    /// Scale matrix.
    pub fn covariance(&self) -> &Matrix {
        &self.covariance
    }

    /// Cached Cholesky factor of the scale matrix.
    pub fn factor(&self) -> &CovarianceFactor {
        &self.factor
    }

    pub(crate) fn chi_squared(&self) -> &ChiSquared<f64> {
        &self.chi_squared
    }
}

impl Default for MvStudentTParams {
    fn default() -> Self {
        Self::new(Vector::zeros(1), Matrix::identity(1, 1), DEFAULT_STUDENT_T_DOF)
            .expect("standard Student-t parameters are valid")
    }
}

impl MultivariateParams for MvStudentTParams {
    fn dims(&self) -> usize {
        self.means.len()
    }
}

impl PartialEq for MvStudentTParams {
    fn eq(&self, other: &Self) -> bool {
        validate::approx_eq(self.dof, other.dof)
            && validate::approx_eq_vector(&self.means, &other.means)
            && validate::approx_eq_matrix(&self.covariance, &other.covariance)
    }
}

#[derive(Serialize, Deserialize)]
struct MvStudentTRepr {
    dof: f64,
    means: Vec<f64>,
    covariance: Vec<Vec<f64>>,
}

impl From<MvStudentTParams> for MvStudentTRepr {
    fn from(p: MvStudentTParams) -> Self {
        Self {
            dof: p.dof,
            means: p.means.iter().copied().collect(),
            covariance: validate::matrix_to_rows(&p.covariance),
        }
    }
}

impl TryFrom<MvStudentTRepr> for MvStudentTParams {
    type Error = ParamError;

    fn try_from(r: MvStudentTRepr) -> Result<Self> {
        let covariance = validate::matrix_from_rows(&r.covariance)?;
        Self::new(Vector::from_vec(r.means), covariance, r.dof)
    }
}
