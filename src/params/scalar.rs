//! Scalar normal-family parameters.

use serde::{Deserialize, Serialize};

use super::validate;
use crate::constants::DEFAULT_TRUNCATION;
use crate::error::{ParamError, Result};

/// Location, scale and interval `[lower, upper]` of a scalar truncated
/// normal.
///
/// Defaults to the standard normal truncated to `[-4, 4]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "TruncatedNormalRepr", into = "TruncatedNormalRepr")]
pub struct TruncatedNormalParams {
    mean: f64,
    stddev: f64,
    lower: f64,
    upper: f64,
}

impl TruncatedNormalParams {
    /// Validate the location, scale and interval.
    pub fn new(mean: f64, stddev: f64, lower: f64, upper: f64) -> Result<Self> {
        validate::check_scalar_mean(mean)?;
        validate::check_stddev(stddev)?;
        validate::check_interval(0, lower, upper)?;
        Ok(Self {
            mean,
            stddev,
            lower,
            upper,
        })
    }

    /// Location of the untruncated normal.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Scale of the untruncated normal.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl Default for TruncatedNormalParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            stddev: 1.0,
            lower: DEFAULT_TRUNCATION.0,
            upper: DEFAULT_TRUNCATION.1,
        }
    }
}

impl PartialEq for TruncatedNormalParams {
    fn eq(&self, other: &Self) -> bool {
        validate::approx_eq(self.mean, other.mean)
            && validate::approx_eq(self.stddev, other.stddev)
            && validate::approx_eq(self.lower, other.lower)
            && validate::approx_eq(self.upper, other.upper)
    }
}

#[derive(Serialize, Deserialize)]
struct TruncatedNormalRepr {
    mean: f64,
    stddev: f64,
    lower: Option<f64>,
    upper: Option<f64>,
}

impl From<TruncatedNormalParams> for TruncatedNormalRepr {
    fn from(p: TruncatedNormalParams) -> Self {
        Self {
            mean: p.mean,
            stddev: p.stddev,
            lower: p.lower.is_finite().then_some(p.lower),
            upper: p.upper.is_finite().then_some(p.upper),
        }
    }
}

impl TryFrom<TruncatedNormalRepr> for TruncatedNormalParams {
    type Error = ParamError;

    fn try_from(r: TruncatedNormalRepr) -> Result<Self> {
        Self::new(
            r.mean,
            r.stddev,
            r.lower.unwrap_or(f64::NEG_INFINITY),
            r.upper.unwrap_or(f64::INFINITY),
        )
    }
}

/// Location and scale of a rectified normal `max(0, N(mean, stddev²))`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RectifiedNormalRepr", into = "RectifiedNormalRepr")]
pub struct RectifiedNormalParams {
    mean: f64,
    stddev: f64,
}

impl RectifiedNormalParams {
    /// Validate the location and scale.
    pub fn new(mean: f64, stddev: f64) -> Result<Self> {
        validate::check_scalar_mean(mean)?;
        validate::check_stddev(stddev)?;
        Ok(Self { mean, stddev })
    }

    /// Location of the underlying normal.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Scale of the underlying normal.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

impl Default for RectifiedNormalParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            stddev: 1.0,
        }
    }
}

impl PartialEq for RectifiedNormalParams {
    fn eq(&self, other: &Self) -> bool {
        validate::approx_eq(self.mean, other.mean) && validate::approx_eq(self.stddev, other.stddev)
    }
}

#[derive(Serialize, Deserialize)]
struct RectifiedNormalRepr {
    mean: f64,
    stddev: f64,
}

impl From<RectifiedNormalParams> for RectifiedNormalRepr {
    fn from(p: RectifiedNormalParams) -> Self {
        Self {
            mean: p.mean,
            stddev: p.stddev,
        }
    }
}

impl TryFrom<RectifiedNormalRepr> for RectifiedNormalParams {
    type Error = ParamError;

    fn try_from(r: RectifiedNormalRepr) -> Result<Self> {
        Self::new(r.mean, r.stddev)
    }
}
