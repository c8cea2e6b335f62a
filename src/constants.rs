//! Numeric constants shared across the crate.

/// Default deterministic seed for [`create_rng`](crate::rng::create_rng).
///
/// The value `0x6D7664697374` is "mvdist" encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x6D7664697374;

/// Absolute tolerance used when comparing parameter sets for equality.
///
/// Every defining field (means, covariance entries, bounds, dof) must agree
/// within this amount. Derived fields are not compared.
pub const PARAM_EQ_TOLERANCE: f64 = 1e-3;

/// Relative-absolute tolerance for covariance symmetry.
///
/// Entries `a = Σ[i,j]` and `b = Σ[j,i]` are considered equal when
/// `|a - b| <= SYMMETRY_TOLERANCE * max(1, |a|, |b|)`.
pub const SYMMETRY_TOLERANCE: f64 = 1e-10;

/// Default Gibbs chain length used by single draws.
pub const DEFAULT_SWEEPS: usize = 1;

/// Degrees of freedom of the default Student-t parameter set.
pub const DEFAULT_STUDENT_T_DOF: f64 = 2.0;

/// Default scalar truncation interval `[lower, upper]` for the standard
/// truncated normal.
pub const DEFAULT_TRUNCATION: (f64, f64) = (-4.0, 4.0);
