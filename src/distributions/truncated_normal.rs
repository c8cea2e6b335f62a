//! Scalar truncated normal sampler.

use mvdist_core::{sample_truncated, StandardNormalCdf};
use rand::distr::{Distribution, Open01};
use rand::Rng;

use crate::error::Result;
use crate::params::TruncatedNormalParams;
use crate::sampler::Sampler;

/// Normal `N(mean, stddev²)` restricted to `[lower, upper]`, drawn by
/// inverting the CDF at one uniform.
///
/// Defaults to the standard normal on `[-4, 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TruncatedNormal {
    params: TruncatedNormalParams,
}

impl TruncatedNormal {
    /// Build from raw components; see [`TruncatedNormalParams::new`].
    pub fn new(mean: f64, stddev: f64, lower: f64, upper: f64) -> Result<Self> {
        Ok(Self::from_params(TruncatedNormalParams::new(
            mean, stddev, lower, upper,
        )?))
    }

    /// Wrap an already validated parameter set.
    pub fn from_params(params: TruncatedNormalParams) -> Self {
        Self { params }
    }
}

impl Distribution<f64> for TruncatedNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sample_with(rng, &self.params)
    }
}

impl Sampler<f64> for TruncatedNormal {
    type Params = TruncatedNormalParams;
    type Support = (f64, f64);

    fn params(&self) -> &TruncatedNormalParams {
        &self.params
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, p: &TruncatedNormalParams) -> f64 {
        let u: f64 = rng.sample(Open01);
        let draw = sample_truncated(
            &StandardNormalCdf,
            p.mean(),
            p.stddev(),
            p.lower(),
            p.upper(),
            u,
        );
        if draw.mass_vanished {
            tracing::debug!(
                mean = p.mean(),
                lower = p.lower(),
                upper = p.upper(),
                "Truncated normal mass vanished; drawing from the local density"
            );
        }
        draw.value
    }

    fn set_params(&mut self, params: TruncatedNormalParams) {
        self.params = params;
    }

    fn support(&self) -> (f64, f64) {
        (self.params.lower(), self.params.upper())
    }
}
