//! Parameter validation errors.

use mvdist_core::NumericalError;

/// Result alias for fallible constructors in this crate.
pub type Result<T> = std::result::Result<T, ParamError>;

/// Coarse classification of a [`ParamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vector or matrix has the wrong orientation or is not square/symmetric.
    Shape,
    /// Two components disagree about the number of dimensions.
    DimensionMismatch,
    /// A value lies outside its mathematical domain.
    Domain,
    /// A numerical decomposition failed.
    Numerical,
}

/// Errors raised while building a parameter set.
///
/// All validation happens at construction; drawing from a sampler never
/// fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// The mean was given as a matrix with more than one column.
    #[error("mean must be a column vector, got {rows}x{cols}")]
    MeanNotColumn {
        /// Rows of the supplied mean.
        rows: usize,
        /// Columns of the supplied mean.
        cols: usize,
    },

    /// The mean has no entries.
    #[error("mean must have at least one entry")]
    EmptyMean,

    /// Covariance row count does not match the mean length.
    #[error("covariance has {rows} rows but the mean has {dims} entries")]
    CovarianceDims {
        /// Rows of the covariance.
        rows: usize,
        /// Length of the mean.
        dims: usize,
    },

    /// Covariance is not square.
    #[error("covariance must be square, got {rows}x{cols}")]
    CovarianceNotSquare {
        /// Rows of the covariance.
        rows: usize,
        /// Columns of the covariance.
        cols: usize,
    },

    /// Covariance differs from its transpose.
    #[error("covariance is not symmetric at ({row}, {col})")]
    CovarianceNotSymmetric {
        /// Row of the first mismatching entry.
        row: usize,
        /// Column of the first mismatching entry.
        col: usize,
    },

    /// Degrees of freedom not strictly positive and finite.
    #[error("degrees of freedom must be positive and finite, got {dof}")]
    NonPositiveDof {
        /// The rejected value.
        dof: f64,
    },

    /// A bound vector has the wrong length.
    #[error("{which} bounds have {len} entries but the mean has {dims}")]
    BoundsDims {
        /// `"lower"` or `"upper"`.
        which: &'static str,
        /// Length of the bound vector.
        len: usize,
        /// Length of the mean.
        dims: usize,
    },

    /// A truncation interval is empty or unordered.
    #[error("invalid truncation interval at index {index}: [{lower}, {upper}]")]
    InvertedBounds {
        /// Coordinate of the interval (0 for scalar families).
        index: usize,
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// A mean or covariance entry is NaN or infinite.
    #[error("{field} has a non-finite entry at index {index}")]
    NonFinite {
        /// `"mean"`, `"covariance"` or `"stddev"`.
        field: &'static str,
        /// Flat (column-major) index of the entry.
        index: usize,
    },

    /// Standard deviation of a scalar family is not strictly positive.
    #[error("standard deviation must be positive, got {stddev}")]
    NonPositiveStdDev {
        /// The rejected value.
        stddev: f64,
    },

    /// Factorization or conditioning of the covariance failed.
    #[error(transparent)]
    Numerical(#[from] NumericalError),
}

impl ParamError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParamError::MeanNotColumn { .. }
            | ParamError::EmptyMean
            | ParamError::CovarianceNotSquare { .. }
            | ParamError::CovarianceNotSymmetric { .. } => ErrorKind::Shape,
            ParamError::CovarianceDims { .. } | ParamError::BoundsDims { .. } => {
                ErrorKind::DimensionMismatch
            }
            ParamError::NonPositiveDof { .. }
            | ParamError::InvertedBounds { .. }
            | ParamError::NonFinite { .. }
            | ParamError::NonPositiveStdDev { .. } => ErrorKind::Domain,
            ParamError::Numerical(_) => ErrorKind::Numerical,
        }
    }
}
