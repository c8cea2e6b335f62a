//! Truncated multivariate normal sampler.

use mvdist_core::{GibbsChain, TruncatedGibbs};
use rand::distr::Distribution;
use rand::Rng;

use crate::config::GibbsConfig;
use crate::error::Result;
use crate::params::TruncatedMvNormalParams;
use crate::sampler::{MultivariateSampler, Sampler};
use crate::{Matrix, Vector};

/// Multivariate normal `N(means, Σ)` restricted to the box
/// `[lowers, uppers]`, sampled by a fixed-length Gibbs chain.
///
/// Each chain starts at `means` and runs [`GibbsConfig::sweeps`] sweeps;
/// every sweep replaces each coordinate in ascending order with an
/// inverse-CDF draw from its truncated conditional. A single draw returns
/// the state after the last sweep and consumes exactly
/// `dims × sweeps` uniforms.
///
/// The chain is not burned in. Successive states are correlated, and with
/// few sweeps the output still remembers the starting point; pick the
/// chain length to suit the covariance.
///
/// # Example
///
/// ```
/// use mvdist::{create_rng, GibbsConfig, Matrix, TruncatedMvNormal, Vector};
/// use rand::distr::Distribution;
///
/// let tmvn = TruncatedMvNormal::new(
///     Vector::zeros(2),
///     Matrix::from_row_slice(2, 2, &[1.0, 0.7, 0.7, 1.0]),
///     Vector::from_row_slice(&[0.0, -1.0]),
///     Vector::from_row_slice(&[f64::INFINITY, 1.0]),
/// )
/// .unwrap()
/// .with_config(GibbsConfig::new().sweeps(10));
///
/// let mut rng = create_rng(7);
/// let x = tmvn.sample(&mut rng);
/// assert!(x[0] >= 0.0 && x[1] >= -1.0 && x[1] <= 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TruncatedMvNormal {
    params: TruncatedMvNormalParams,
    config: GibbsConfig,
}

impl TruncatedMvNormal {
    /// Build from raw components; see [`TruncatedMvNormalParams::new`].
    pub fn new(means: Vector, covariance: Matrix, lowers: Vector, uppers: Vector) -> Result<Self> {
        let params = TruncatedMvNormalParams::new(means, covariance, lowers, uppers)?;
        Ok(Self::from_params(params))
    }

    /// Wrap an already validated parameter set with the default config.
    pub fn from_params(params: TruncatedMvNormalParams) -> Self {
        Self {
            params,
            config: GibbsConfig::default(),
        }
    }

    /// Replace the chain configuration.
    pub fn with_config(mut self, config: GibbsConfig) -> Self {
        self.config = config;
        self
    }

    /// Current chain configuration.
    pub fn config(&self) -> &GibbsConfig {
        &self.config
    }

    /// Run one chain of `sweeps` sweeps and return its `dims × sweeps`
    /// trace; column `j` is the state after sweep `j`.
    pub fn sample_chain<R: Rng + ?Sized>(&self, rng: &mut R, sweeps: usize) -> Matrix {
        run(rng, &self.params, sweeps).into_trace()
    }
}

/// One logged chain of `sweeps` sweeps under `p`.
fn run<R: Rng + ?Sized>(rng: &mut R, p: &TruncatedMvNormalParams, sweeps: usize) -> GibbsChain {
    let engine = TruncatedGibbs::new(p.means(), p.lowers(), p.uppers(), p.conditioning());
    let chain = engine.run(rng, sweeps);

    tracing::trace!(dims = p.dims(), sweeps, "Ran truncated normal Gibbs chain");
    if chain.vanished() > 0 {
        tracing::debug!(
            vanished = chain.vanished(),
            sweeps,
            "Conditional mass vanished; coordinates drawn from the local density"
        );
    }

    chain
}

impl Distribution<Vector> for TruncatedMvNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
        self.sample_with(rng, &self.params)
    }
}

impl Sampler<Vector> for TruncatedMvNormal {
    type Params = TruncatedMvNormalParams;
    type Support = (Vector, Vector);

    fn params(&self) -> &TruncatedMvNormalParams {
        &self.params
    }

    fn sample_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        params: &TruncatedMvNormalParams,
    ) -> Vector {
        run(rng, params, self.config.sweeps)
            .final_state()
            .unwrap_or_else(|| params.means().clone())
    }

    fn set_params(&mut self, params: TruncatedMvNormalParams) {
        self.params = params;
    }

    fn support(&self) -> (Vector, Vector) {
        (self.params.lowers().clone(), self.params.uppers().clone())
    }
}

impl MultivariateSampler for TruncatedMvNormal {}
