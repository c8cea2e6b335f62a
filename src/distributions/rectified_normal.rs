//! Rectified normal sampler.

use rand::distr::Distribution;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::Result;
use crate::params::RectifiedNormalParams;
use crate::sampler::Sampler;

/// `max(0, X)` for `X ~ N(mean, stddev²)`.
///
/// The output has a point mass of `Φ(-mean / stddev)` at zero and follows
/// the normal density above it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectifiedNormal {
    params: RectifiedNormalParams,
}

impl RectifiedNormal {
    /// Build from raw components; see [`RectifiedNormalParams::new`].
    pub fn new(mean: f64, stddev: f64) -> Result<Self> {
        Ok(Self::from_params(RectifiedNormalParams::new(mean, stddev)?))
    }

    /// Wrap an already validated parameter set.
    pub fn from_params(params: RectifiedNormalParams) -> Self {
        Self { params }
    }
}

impl Distribution<f64> for RectifiedNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sample_with(rng, &self.params)
    }
}

impl Sampler<f64> for RectifiedNormal {
    type Params = RectifiedNormalParams;
    type Support = (f64, f64);

    fn params(&self) -> &RectifiedNormalParams {
        &self.params
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, params: &RectifiedNormalParams) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        (params.mean() + params.stddev() * z).max(0.0)
    }

    fn set_params(&mut self, params: RectifiedNormalParams) {
        self.params = params;
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }
}
