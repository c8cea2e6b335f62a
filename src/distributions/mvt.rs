//! Multivariate Student-t sampler.

use rand::distr::Distribution;
use rand::Rng;
use rand_distr::StandardNormal;

use super::unbounded;
use crate::error::Result;
use crate::params::MvStudentTParams;
use crate::sampler::{MultivariateSampler, Sampler};
use crate::{Matrix, Vector};

/// Multivariate Student-t with `dof` degrees of freedom, location `means`
/// and scale matrix Σ.
///
/// Drawn as a scale mixture of normals: `dims` standard normals `z`, then
/// one `W ~ χ²(dof)` shared by every coordinate, giving
/// `means + sqrt(dof / W) · L z`. For `dof > 2` the covariance of the
/// output is `Σ · dof / (dof − 2)`.
///
/// `W` is floored at `f64::MIN_POSITIVE`. Very small `dof` puts most of the
/// χ² mass below that, so such draws are huge but stay finite.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MvStudentT {
    params: MvStudentTParams,
}

impl MvStudentT {
    /// Build from raw components; see [`MvStudentTParams::new`].
    pub fn new(means: Vector, covariance: Matrix, dof: f64) -> Result<Self> {
        Ok(Self::from_params(MvStudentTParams::new(means, covariance, dof)?))
    }

    /// Wrap an already validated parameter set.
    pub fn from_params(params: MvStudentTParams) -> Self {
        Self { params }
    }
}

impl Distribution<Vector> for MvStudentT {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
        self.sample_with(rng, &self.params)
    }
}

impl Sampler<Vector> for MvStudentT {
    type Params = MvStudentTParams;
    type Support = (Vector, Vector);

    fn params(&self) -> &MvStudentTParams {
        &self.params
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, params: &MvStudentTParams) -> Vector {
        let z = Vector::from_fn(params.dims(), |_, _| rng.sample(StandardNormal));
        // χ²(dof) underflows to 0 for small dof
        let w: f64 = rng.sample(params.chi_squared());
        let scale = (params.dof() / w.max(f64::MIN_POSITIVE)).sqrt();
        params.means() + params.factor().correlate(&z) * scale
    }

    fn set_params(&mut self, params: MvStudentTParams) {
        self.params = params;
    }

    fn support(&self) -> (Vector, Vector) {
        unbounded(self.params.dims())
    }
}

impl MultivariateSampler for MvStudentT {}
