//! Gaussian conditioning coefficients for single-coordinate updates.
//!
//! For a joint normal with covariance Σ, coordinate `i` conditioned on all
//! the others is univariate normal:
//!
//! ```text
//! x_i | x_{-i} ~ N(μ_i + P_i (x_{-i} − μ_{-i}), sd_i²)
//! P_i   = Σ_{i,-i} Σ_{-i,-i}⁻¹
//! sd_i² = Σ_ii − P_i Σ_{i,-i}ᵀ
//! ```
//!
//! Neither `P_i` nor `sd_i` depends on the current state, so they are
//! computed once per covariance and reused by every Gibbs sweep.

extern crate alloc;

use alloc::vec::Vec;

use nalgebra::Cholesky;

use crate::error::NumericalError;
use crate::math;
use crate::types::{Matrix, Vector};

/// Precomputed regression weights and conditional standard deviations.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalCoefficients {
    /// `P_iᵀ` for each coordinate (length dims − 1, coordinate `i` skipped).
    weights: Vec<Vector>,

    /// Conditional standard deviation of each coordinate.
    stddevs: Vector,
}

impl ConditionalCoefficients {
    /// Number of coordinates.
    pub fn dims(&self) -> usize {
        self.stddevs.len()
    }

    /// Regression weights of coordinate `i` on the other coordinates, in
    /// ascending index order with `i` skipped.
    pub fn weights(&self, i: usize) -> &Vector {
        &self.weights[i]
    }

    /// Conditional standard deviation of coordinate `i`.
    pub fn stddev(&self, i: usize) -> f64 {
        self.stddevs[i]
    }

    /// All conditional standard deviations.
    pub fn stddevs(&self) -> &Vector {
        &self.stddevs
    }

    /// Conditional mean `μ_i + P_i (x_{-i} − μ_{-i})` of coordinate `i`.
    ///
    /// Reads `x` in place; no slice of `x` is allocated.
    pub fn conditional_mean(&self, i: usize, means: &Vector, x: &Vector) -> f64 {
        debug_assert_eq!(means.len(), self.dims(), "means length must match dims");
        debug_assert_eq!(x.len(), self.dims(), "state length must match dims");

        let w = &self.weights[i];
        let mut adjustment = 0.0;
        let mut slot = 0;
        for k in 0..x.len() {
            if k == i {
                continue;
            }
            adjustment += w[slot] * (x[k] - means[k]);
            slot += 1;
        }
        means[i] + adjustment
    }
}

/// Compute conditioning coefficients for every coordinate of Σ.
///
/// `P_i` is obtained by a Cholesky solve against `Σ_{-i,-i}` rather than an
/// explicit inverse.
///
/// # Errors
///
/// - [`NumericalError::NotSquare`] if Σ is not square.
/// - [`NumericalError::SingularConditional`] if some `Σ_{-i,-i}` is not
///   positive-definite.
/// - [`NumericalError::NonPositiveConditionalVariance`] if some conditional
///   variance is zero, negative or NaN.
pub fn conditioning(covariance: &Matrix) -> Result<ConditionalCoefficients, NumericalError> {
    if !covariance.is_square() {
        return Err(NumericalError::NotSquare {
            rows: covariance.nrows(),
            cols: covariance.ncols(),
        });
    }

    let d = covariance.nrows();
    let mut weights = Vec::with_capacity(d);
    let mut stddevs = Vector::zeros(d);

    for i in 0..d {
        let sigma_ii = covariance[(i, i)];

        let (w, explained) = if d == 1 {
            (Vector::zeros(0), 0.0)
        } else {
            // Partition: Σ_{-i,-i} and the cross covariance Σ_{-i,i}
            let sub = covariance.clone().remove_row(i).remove_column(i);
            let cross = covariance.column(i).clone_owned().remove_row(i);

            let chol = Cholesky::new(sub).ok_or(NumericalError::SingularConditional { index: i })?;
            let w = chol.solve(&cross);
            let explained = w.dot(&cross);
            (w, explained)
        };

        let variance = sigma_ii - explained;
        if variance.is_nan() || variance <= 0.0 {
            return Err(NumericalError::NonPositiveConditionalVariance { index: i });
        }

        stddevs[i] = math::sqrt(variance);
        weights.push(w);
    }

    Ok(ConditionalCoefficients { weights, stddevs })
}
