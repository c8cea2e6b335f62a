//! Sampler types, one per distribution family.

mod mvnorm;
mod mvt;
mod rectified_normal;
mod truncated_mvnorm;
mod truncated_normal;

pub use mvnorm::MvNormal;
pub use mvt::MvStudentT;
pub use rectified_normal::RectifiedNormal;
pub use truncated_mvnorm::TruncatedMvNormal;
pub use truncated_normal::TruncatedNormal;

use crate::Vector;

/// Unbounded support `(-inf, +inf)` in every coordinate.
fn unbounded(dims: usize) -> (Vector, Vector) {
    (
        Vector::from_element(dims, f64::NEG_INFINITY),
        Vector::from_element(dims, f64::INFINITY),
    )
}
