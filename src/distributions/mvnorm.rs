//! Multivariate normal sampler.

use rand::distr::Distribution;
use rand::Rng;
use rand_distr::StandardNormal;

use super::unbounded;
use crate::error::Result;
use crate::params::MvNormalParams;
use crate::sampler::{MultivariateSampler, Sampler};
use crate::{Matrix, Vector};

/// Multivariate normal `N(means, Σ)`.
///
/// Each draw maps `dims` independent standard normals `z` (drawn in index
/// order) to `means + L z`, where `L` is the cached Cholesky factor of Σ.
///
/// # Example
///
/// ```
/// use mvdist::{create_rng, Matrix, MvNormal, Vector, DEFAULT_SEED};
/// use rand::distr::Distribution;
///
/// let mvn = MvNormal::new(Vector::from_row_slice(&[1.0, -1.0]), Matrix::identity(2, 2)).unwrap();
/// let mut rng = create_rng(DEFAULT_SEED);
/// let x = mvn.sample(&mut rng);
/// assert_eq!(x.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MvNormal {
    params: MvNormalParams,
}

impl MvNormal {
    /// Build from raw components; see [`MvNormalParams::new`].
    pub fn new(means: Vector, covariance: Matrix) -> Result<Self> {
        Ok(Self::from_params(MvNormalParams::new(means, covariance)?))
    }

    /// Wrap an already validated parameter set.
    pub fn from_params(params: MvNormalParams) -> Self {
        Self { params }
    }
}

impl Distribution<Vector> for MvNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
        self.sample_with(rng, &self.params)
    }
}

impl Sampler<Vector> for MvNormal {
    type Params = MvNormalParams;
    type Support = (Vector, Vector);

    fn params(&self) -> &MvNormalParams {
        &self.params
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, params: &MvNormalParams) -> Vector {
        let z = Vector::from_fn(params.dims(), |_, _| rng.sample(StandardNormal));
        params.means() + params.factor().correlate(&z)
    }

    fn set_params(&mut self, params: MvNormalParams) {
        self.params = params;
    }

    fn support(&self) -> (Vector, Vector) {
        unbounded(self.params.dims())
    }
}

impl MultivariateSampler for MvNormal {}
