//! Validated parameter sets.
//!
//! Each distribution family has one immutable parameter type. All shape,
//! domain and numerical checks run once in the constructor, and the
//! expensive derived quantities (Cholesky factor, conditioning
//! coefficients) are cached alongside the defining fields.
//!
//! Parameter sets compare equal when their dimensions match and every
//! defining field agrees within [`PARAM_EQ_TOLERANCE`]; derived fields are
//! not compared.
//!
//! [`PARAM_EQ_TOLERANCE`]: crate::PARAM_EQ_TOLERANCE

mod mvnorm;
mod mvt;
mod scalar;
mod truncated_mvnorm;
mod validate;

pub use mvnorm::MvNormalParams;
pub use mvt::MvStudentTParams;
pub use scalar::{RectifiedNormalParams, TruncatedNormalParams};
pub use truncated_mvnorm::TruncatedMvNormalParams;
