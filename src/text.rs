//! Text form of parameter sets.
//!
//! Parameter sets are written as JSON. Reading a parameter set back runs
//! the same validation as its constructor, so `from_text(&to_text(&p)?)`
//! reproduces a parameter set equal to `p`.
//!
//! Every parameter set also implements [`Display`](core::fmt::Display) and
//! [`FromStr`](core::str::FromStr) with this format:
//!
//! ```
//! use mvdist::{Matrix, MvNormalParams, Vector};
//!
//! let p = MvNormalParams::new(Vector::from_row_slice(&[1.0, 2.0]), Matrix::identity(2, 2))
//!     .unwrap();
//! let text = p.to_string();
//! let q: MvNormalParams = text.parse().unwrap();
//! assert_eq!(p, q);
//! ```

use core::fmt;
use core::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::params::{
    MvNormalParams, MvStudentTParams, RectifiedNormalParams, TruncatedMvNormalParams,
    TruncatedNormalParams,
};

/// Serialize a parameter set to its JSON text form.
pub fn to_text<T: Serialize>(params: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(params)
}

/// Parse and validate a parameter set from its JSON text form.
///
/// Validation failures are reported as JSON data errors carrying the
/// validation message.
pub fn from_text<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}

macro_rules! impl_text_form {
    ($($ty:ty),* $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let text = to_text(self).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }

        impl FromStr for $ty {
            type Err = serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                from_text(s)
            }
        }
    )*};
}

impl_text_form!(
    MvNormalParams,
    MvStudentTParams,
    TruncatedMvNormalParams,
    TruncatedNormalParams,
    RectifiedNormalParams,
);
