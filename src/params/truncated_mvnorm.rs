//! Truncated multivariate normal parameters.

use mvdist_core::{conditioning, factorize, ConditionalCoefficients, CovarianceFactor};
use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::{ParamError, Result};
use crate::sampler::MultivariateParams;
use crate::{Matrix, Vector};

/// Mean, covariance and per-coordinate truncation box `[lowers, uppers]`
/// of a truncated multivariate normal.
///
/// Besides the Cholesky factor, construction precomputes the conditioning
/// coefficients used by every Gibbs sweep; they depend only on the
/// covariance.
///
/// Bounds may be infinite on the open side. Equal bounds pin a coordinate.
///
/// In the text form, infinite bounds are written as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TruncatedMvNormalRepr", into = "TruncatedMvNormalRepr")]
pub struct TruncatedMvNormalParams {
    means: Vector,
    covariance: Matrix,
    lowers: Vector,
    uppers: Vector,
    factor: CovarianceFactor,
    conditioning: ConditionalCoefficients,
}

impl TruncatedMvNormalParams {
    /// Validate, factorize and precompute conditioning coefficients.
    ///
    /// # Errors
    ///
    /// Besides the checks of [`MvNormalParams::new`], fails with
    /// [`ParamError::BoundsDims`] when a bound vector has the wrong length
    /// and [`ParamError::InvertedBounds`] when some `lower_i > upper_i`, a
    /// bound is NaN, or an interval is empty at infinity. Conditioning
    /// failures surface as [`ParamError::Numerical`].
    ///
    /// [`MvNormalParams::new`]: crate::MvNormalParams::new
    pub fn new(means: Vector, covariance: Matrix, lowers: Vector, uppers: Vector) -> Result<Self> {
        validate::check_means(&means)?;
        validate::check_covariance(&covariance, means.len())?;
        validate::check_bounds(&lowers, &uppers, means.len())?;
        let factor = factorize(&covariance)?;
        let conditioning = conditioning(&covariance)?;

        tracing::debug!(
            dims = means.len(),
            "Built truncated multivariate normal parameters"
        );

        Ok(Self {
            means,
            covariance,
            lowers,
            uppers,
            factor,
            conditioning,
        })
    }

    /// Validate a mean given as a general matrix, then call [`Self::new`].
    pub fn from_matrices(
        mean: Matrix,
        covariance: Matrix,
        lowers: Vector,
        uppers: Vector,
    ) -> Result<Self> {
        Self::new(validate::mean_from_matrix(mean)?, covariance, lowers, uppers)
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.means.len()
    }

    /// Mean vector of the untruncated normal.
    pub fn means(&self) -> &Vector {
        &self.means
    }

    /// Covariance of the untruncated normal.
    pub fn covariance(&self) -> &Matrix {
        &self.covariance
    }

    /// Lower truncation bounds.
    pub fn lowers(&self) -> &Vector {
        &self.lowers
    }

    /// Upper truncation bounds.
    pub fn uppers(&self) -> &Vector {
        &self.uppers
    }

    /// Cached Cholesky factor of the covariance.
    pub fn factor(&self) -> &CovarianceFactor {
        &self.factor
    }

    /// Cached per-coordinate conditioning coefficients.
    pub fn conditioning(&self) -> &ConditionalCoefficients {
        &self.conditioning
    }
}

impl MultivariateParams for TruncatedMvNormalParams {
    fn dims(&self) -> usize {
        self.means.len()
    }
}

impl PartialEq for TruncatedMvNormalParams {
    fn eq(&self, other: &Self) -> bool {
        validate::approx_eq_vector(&self.means, &other.means)
            && validate::approx_eq_matrix(&self.covariance, &other.covariance)
            && validate::approx_eq_vector(&self.lowers, &other.lowers)
            && validate::approx_eq_vector(&self.uppers, &other.uppers)
    }
}

#[derive(Serialize, Deserialize)]
struct TruncatedMvNormalRepr {
    means: Vec<f64>,
    covariance: Vec<Vec<f64>>,
    lowers: Vec<Option<f64>>,
    uppers: Vec<Option<f64>>,
}

fn bound_to_text(b: f64) -> Option<f64> {
    b.is_finite().then_some(b)
}

impl From<TruncatedMvNormalParams> for TruncatedMvNormalRepr {
    fn from(p: TruncatedMvNormalParams) -> Self {
        Self {
            means: p.means.iter().copied().collect(),
            covariance: validate::matrix_to_rows(&p.covariance),
            lowers: p.lowers.iter().copied().map(bound_to_text).collect(),
            uppers: p.uppers.iter().copied().map(bound_to_text).collect(),
        }
    }
}

impl TryFrom<TruncatedMvNormalRepr> for TruncatedMvNormalParams {
    type Error = ParamError;

    fn try_from(r: TruncatedMvNormalRepr) -> Result<Self> {
        let covariance = validate::matrix_from_rows(&r.covariance)?;
        let lowers = r.lowers.iter().map(|b| b.unwrap_or(f64::NEG_INFINITY));
        let uppers = r.uppers.iter().map(|b| b.unwrap_or(f64::INFINITY));
        Self::new(
            Vector::from_vec(r.means),
            covariance,
            Vector::from_iterator(r.lowers.len(), lowers),
            Vector::from_iterator(r.uppers.len(), uppers),
        )
    }
}
