//! Configuration for the truncated multivariate normal sampler.

use crate::constants::DEFAULT_SWEEPS;

/// Gibbs chain settings.
///
/// Chain length is fixed and caller-controlled: there is no burn-in,
/// adaptation or convergence check.
///
/// # Example
///
/// ```
/// use mvdist::GibbsConfig;
///
/// let config = GibbsConfig::new().sweeps(20);
/// assert_eq!(config.sweeps, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GibbsConfig {
    /// Number of full sweeps run for each single draw.
    ///
    /// Each sweep updates every coordinate once in ascending order and
    /// consumes one uniform per coordinate. The draw returned by
    /// `sample` is the state after the last sweep. Default: 1.
    pub sweeps: usize,
}

impl Default for GibbsConfig {
    fn default() -> Self {
        Self {
            sweeps: DEFAULT_SWEEPS,
        }
    }
}

impl GibbsConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chain length used by single draws.
    ///
    /// # Panics
    ///
    /// Panics if `sweeps` is zero.
    pub fn sweeps(mut self, sweeps: usize) -> Self {
        assert!(sweeps > 0, "sweeps must be > 0");
        self.sweeps = sweeps;
        self
    }
}
