//! Gibbs sweep engine for the truncated multivariate normal.
//!
//! A single chain starts at the mean vector and repeatedly replaces each
//! coordinate, in ascending order, with an inverse-CDF draw from its
//! conditional normal restricted to `[lower_i, upper_i]`:
//!
//! ```text
//! μ_i = means_i + P_i (x_{-i} − means_{-i})
//! x_i = μ_i + sd_i Φ⁻¹(u (Fb − Fa) + Fa),  Fa = F(lower_i), Fb = F(upper_i)
//! ```
//!
//! Each coordinate conditions on the values already updated earlier in the
//! same sweep. Every uniform is accepted; there is no rejection step.
//!
//! All `dims × sweeps` uniforms are drawn from the generator before the
//! first sweep, in sweep-major, coordinate-minor order, so a recorded
//! uniform stream maps to exactly one chain.

extern crate alloc;

use alloc::vec::Vec;

use rand::distr::Open01;
use rand::Rng;

use crate::conditional::ConditionalCoefficients;
use crate::normal::{sample_truncated, NormalCdf, StandardNormalCdf};
use crate::types::{Matrix, Vector};

/// Trace of one Gibbs chain.
#[derive(Debug, Clone, PartialEq)]
pub struct GibbsChain {
    /// `dims × sweeps`; column `j` is the state after sweep `j`.
    trace: Matrix,

    /// Number of coordinate updates whose truncation interval had no
    /// representable mass under the conditional normal.
    vanished: usize,
}

impl GibbsChain {
    /// Full chain trace, one column per sweep.
    pub fn trace(&self) -> &Matrix {
        &self.trace
    }

    /// Consume the chain and return its trace.
    pub fn into_trace(self) -> Matrix {
        self.trace
    }

    /// Number of completed sweeps.
    pub fn sweeps(&self) -> usize {
        self.trace.ncols()
    }

    /// State after the last sweep, or `None` for an empty chain.
    pub fn final_state(&self) -> Option<Vector> {
        let n = self.trace.ncols();
        if n == 0 {
            return None;
        }
        Some(self.trace.column(n - 1).into_owned())
    }

    /// Count of coordinate updates whose conditional mass over the interval
    /// was too small to invert, and which used the local density instead.
    pub fn vanished(&self) -> usize {
        self.vanished
    }
}

/// Single-chain Gibbs sampler over a truncation box.
///
/// Borrows the validated means, bounds and precomputed conditioning
/// coefficients; holds no mutable state, so one engine may run any number
/// of chains.
#[derive(Debug, Clone, Copy)]
pub struct TruncatedGibbs<'a, N = StandardNormalCdf> {
    means: &'a Vector,
    lowers: &'a Vector,
    uppers: &'a Vector,
    coefficients: &'a ConditionalCoefficients,
    normal: N,
}

impl<'a> TruncatedGibbs<'a> {
    /// Create an engine using the built-in normal CDF/quantile.
    ///
    /// # Arguments
    /// * `means` - Mean vector (also the chain's starting state)
    /// * `lowers` - Lower truncation bounds
    /// * `uppers` - Upper truncation bounds
    /// * `coefficients` - Conditioning coefficients of the covariance
    pub fn new(
        means: &'a Vector,
        lowers: &'a Vector,
        uppers: &'a Vector,
        coefficients: &'a ConditionalCoefficients,
    ) -> Self {
        let d = coefficients.dims();
        assert_eq!(means.len(), d, "means length must match covariance dims");
        assert_eq!(lowers.len(), d, "lower bounds length must match covariance dims");
        assert_eq!(uppers.len(), d, "upper bounds length must match covariance dims");

        Self {
            means,
            lowers,
            uppers,
            coefficients,
            normal: StandardNormalCdf,
        }
    }
}

impl<'a, N: NormalCdf> TruncatedGibbs<'a, N> {
    /// Swap in a different scalar normal CDF/quantile implementation.
    pub fn with_normal<M: NormalCdf>(self, normal: M) -> TruncatedGibbs<'a, M> {
        TruncatedGibbs {
            means: self.means,
            lowers: self.lowers,
            uppers: self.uppers,
            coefficients: self.coefficients,
            normal,
        }
    }

    /// Dimensionality of the chain state.
    pub fn dims(&self) -> usize {
        self.means.len()
    }

    /// Run `sweeps` Gibbs sweeps, drawing `dims × sweeps` uniforms from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R, sweeps: usize) -> GibbsChain {
        let uniforms: Vec<f64> = (0..sweeps * self.dims())
            .map(|_| rng.sample::<f64, _>(Open01))
            .collect();
        self.run_with_uniforms(&uniforms, sweeps)
    }

    /// Run `sweeps` Gibbs sweeps driven by an explicit uniform stream.
    ///
    /// `uniforms[j * dims + i]` drives coordinate `i` of sweep `j`.
    ///
    /// # Panics
    ///
    /// Panics if `uniforms.len() != dims * sweeps`.
    pub fn run_with_uniforms(&self, uniforms: &[f64], sweeps: usize) -> GibbsChain {
        let d = self.dims();
        assert_eq!(
            uniforms.len(),
            d * sweeps,
            "need exactly dims * sweeps uniforms"
        );

        let mut x = self.means.clone();
        let mut trace = Matrix::zeros(d, sweeps);
        let mut vanished = 0;

        for (j, sweep_uniforms) in uniforms.chunks_exact(d.max(1)).take(sweeps).enumerate() {
            for (i, &u) in sweep_uniforms.iter().enumerate() {
                let mu = self.coefficients.conditional_mean(i, self.means, &x);
                let draw = sample_truncated(
                    &self.normal,
                    mu,
                    self.coefficients.stddev(i),
                    self.lowers[i],
                    self.uppers[i],
                    u,
                );
                if draw.mass_vanished {
                    vanished += 1;
                }
                x[i] = draw.value;
            }
            trace.set_column(j, &x);
        }

        GibbsChain { trace, vanished }
    }
}
