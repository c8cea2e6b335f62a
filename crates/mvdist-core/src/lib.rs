//! Numerical core for correlated random variate generation.
//!
//! This crate provides the linear-algebra and sampling kernels behind the
//! `mvdist` samplers, designed to work in `no_std` environments with only
//! an allocator.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support for convenience
//!
//! # Usage
//!
//! This crate is typically used through the main `mvdist` crate, which
//! provides validated parameter sets, sampler types and serialization.
//! It can be used directly when only the kernels are needed.
//!
//! ```ignore
//! use mvdist_core::{
//!     conditional::conditioning,
//!     factor::factorize,
//!     gibbs::TruncatedGibbs,
//! };
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod conditional;
pub mod error;
pub mod factor;
pub mod gibbs;
pub mod math;
pub mod normal;
pub mod types;

// Re-export commonly used items at crate root
pub use conditional::{conditioning, ConditionalCoefficients};
pub use error::NumericalError;
pub use factor::{factorize, CovarianceFactor};
pub use gibbs::{GibbsChain, TruncatedGibbs};
pub use normal::{sample_truncated, NormalCdf, StandardNormalCdf, TruncatedDraw};
pub use types::{Matrix, Vector};
