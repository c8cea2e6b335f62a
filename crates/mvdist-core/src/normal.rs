//! Scalar normal CDF/quantile and the truncated inverse-CDF draw.
//!
//! The Gibbs engine only needs two scalar operations from the normal
//! distribution, captured by [`NormalCdf`]. [`StandardNormalCdf`] is the
//! built-in implementation:
//!
//! - CDF: `Φ(z) = erfc(−z/√2) / 2`, accurate far into both tails.
//! - Quantile: Acklam's rational approximation (relative error ~1.15e-9)
//!   followed by one Halley step against the CDF, giving close to full
//!   double precision.

use core::f64::consts::FRAC_1_SQRT_2;

use crate::math;

/// √(2π), used by the Halley refinement of the quantile.
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

// Acklam's rational approximation coefficients.
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Break-point between the tail and central regions.
const P_LOW: f64 = 0.02425;

/// Largest double below 1.
const P_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Scalar normal distribution functions consumed by the truncated samplers.
///
/// Implementations must be monotone non-decreasing in `x` for `cdf`, and
/// `quantile` must invert `cdf` on `(0, 1)`.
pub trait NormalCdf {
    /// P(X ≤ x) for X ~ N(mean, stddev²).
    fn cdf(&self, mean: f64, stddev: f64, x: f64) -> f64;

    /// x such that P(X ≤ x) = p for X ~ N(mean, stddev²).
    fn quantile(&self, mean: f64, stddev: f64, p: f64) -> f64;
}

/// Built-in [`NormalCdf`] backed by libm's `erfc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNormalCdf;

impl NormalCdf for StandardNormalCdf {
    #[inline]
    fn cdf(&self, mean: f64, stddev: f64, x: f64) -> f64 {
        standard_cdf((x - mean) / stddev)
    }

    #[inline]
    fn quantile(&self, mean: f64, stddev: f64, p: f64) -> f64 {
        mean + stddev * standard_quantile(p)
    }
}

/// Standard normal CDF Φ(z).
///
/// Returns 0 at −∞, 1 at +∞, NaN for NaN.
pub fn standard_cdf(z: f64) -> f64 {
    0.5 * math::erfc(-z * FRAC_1_SQRT_2)
}

/// Standard normal quantile Φ⁻¹(p).
///
/// # Returns
/// - `f64::NEG_INFINITY` if `p == 0.0`.
/// - `f64::INFINITY` if `p == 1.0`.
/// - `f64::NAN` if `p` is outside `[0, 1]` or NaN.
pub fn standard_quantile(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let x = if p < P_LOW {
        // Lower tail
        let q = math::sqrt(-2.0 * math::ln(p));
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        // Upper tail
        let q = math::sqrt(-2.0 * math::ln(1.0 - p));
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    // One Halley step on f(x) = Φ(x) − p
    let e = standard_cdf(x) - p;
    let u = e * SQRT_2PI * math::exp(0.5 * x * x);
    let refined = x - u / (1.0 + 0.5 * x * u);

    if refined.is_finite() {
        refined
    } else {
        x
    }
}

/// Smallest interval mass, relative to the larger CDF value, that the
/// inverse CDF can still resolve.
const MIN_RELATIVE_MASS: f64 = 1e-7;

/// Outcome of a single truncated inverse-CDF draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedDraw {
    /// Sampled value, always inside `[lower, upper]`.
    pub value: f64,

    /// True when `Fb − Fa` was too small next to the CDF values to invert,
    /// and `value` came from the local approximation of the density.
    pub mass_vanished: bool,
}

/// Draw from N(mean, stddev²) restricted to `[lower, upper]` by inverse CDF.
///
/// With `Fa = F(lower)` and `Fb = F(upper)`, returns
/// `F⁻¹(Fa + u (Fb − Fa))`. When the whole interval lies above the mean the
/// same mapping is evaluated on the mirrored distribution, where the CDF
/// values are small and keep their precision.
///
/// Edge cases:
/// - `lower == upper`: returns `lower` exactly.
/// - vanishing mass (`Fb − Fa` lost to cancellation or underflow, even in
///   the mirrored form): the density is replaced by its local form over the
///   interval and `mass_vanished` is set. An interval containing the mean
///   is drawn uniformly. Otherwise the density decays exponentially away
///   from the bound nearest the mean, with rate `|bound − mean| / stddev²`,
///   and `u` is mapped through that truncated exponential. Narrow intervals
///   come out uniform and far tails hug the nearest bound.
///
/// The result is clamped into `[lower, upper]` to absorb rounding.
/// `u` is expected in the open interval (0, 1).
pub fn sample_truncated<N: NormalCdf>(
    normal: &N,
    mean: f64,
    stddev: f64,
    lower: f64,
    upper: f64,
    u: f64,
) -> TruncatedDraw {
    debug_assert!(lower <= upper, "lower bound must not exceed upper bound");

    if lower == upper {
        return TruncatedDraw {
            value: lower,
            mass_vanished: false,
        };
    }

    let mirrored = lower > mean;
    let (fa, fb) = if mirrored {
        (
            normal.cdf(-mean, stddev, -upper),
            normal.cdf(-mean, stddev, -lower),
        )
    } else {
        (normal.cdf(mean, stddev, lower), normal.cdf(mean, stddev, upper))
    };

    let mass = fb - fa;
    let value = if mass > fb * MIN_RELATIVE_MASS {
        // Rounding must not push p onto 0 or 1, where the quantile is infinite
        if mirrored {
            // Fa + (1 − u)(Fb − Fa) on the mirror image
            let p = (fb - u * mass).clamp(f64::MIN_POSITIVE, P_MAX);
            -normal.quantile(-mean, stddev, p)
        } else {
            let p = (fa + u * mass).clamp(f64::MIN_POSITIVE, P_MAX);
            normal.quantile(mean, stddev, p)
        }
    } else {
        f64::NAN
    };

    if value.is_nan() {
        return TruncatedDraw {
            value: local_draw(mean, stddev, lower, upper, u).clamp(lower, upper),
            mass_vanished: true,
        };
    }

    TruncatedDraw {
        value: value.clamp(lower, upper),
        mass_vanished: false,
    }
}

/// Inverse CDF of the normal density linearized in the exponent at the
/// bound nearest `mean`.
fn local_draw(mean: f64, stddev: f64, lower: f64, upper: f64, u: f64) -> f64 {
    let (bound, width, toward_upper) = if mean <= lower {
        (lower, upper - lower, true)
    } else if mean >= upper {
        (upper, upper - lower, false)
    } else if lower.is_finite() && upper.is_finite() {
        return lower + u * (upper - lower);
    } else {
        return mean;
    };

    // Measured from the bound, so the value stays increasing in u
    let v = if toward_upper { u } else { 1.0 - u };
    let distance = (bound - mean).abs() / stddev;
    let t = distance * (width / stddev);
    let offset = if t > 0.0 {
        -math::log1p(v * math::expm1(-t)) * (stddev / distance)
    } else {
        v * width
    };

    if toward_upper {
        bound + offset
    } else {
        bound - offset
    }
}
