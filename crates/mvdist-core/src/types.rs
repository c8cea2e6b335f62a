//! Type aliases for the dynamically sized linear algebra used throughout.

use nalgebra::{DMatrix, DVector};

/// Dense column-major matrix (covariances, factors, chain traces).
pub type Matrix = DMatrix<f64>;

/// Dense column vector (means, bounds, samples).
pub type Vector = DVector<f64>;
