//! Tests for parameter validation and equality.
//!
//! Every family runs the same checks from both entry points, reports a
//! classified error, and compares equal under the field tolerance.

use mvdist::{
    ErrorKind, Matrix, MvNormal, MvNormalParams, MvStudentT, MvStudentTParams, NumericalError,
    ParamError, RectifiedNormal, TruncatedMvNormal, TruncatedMvNormalParams, TruncatedNormal,
    Vector,
};

fn sigma_3x3() -> Matrix {
    Matrix::from_row_slice(3, 3, &[4.0, 1.2, -0.6, 1.2, 2.0, 0.3, -0.6, 0.3, 1.5])
}

// =============================================================================
// SHAPE AND DIMENSION CHECKS
// =============================================================================

#[test]
fn covariance_rows_must_match_mean() {
    let err = MvNormal::new(Vector::zeros(2), sigma_3x3()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);

    let err = MvStudentT::new(Vector::zeros(4), sigma_3x3(), 3.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
}

#[test]
fn covariance_must_be_square() {
    let err = MvNormalParams::new(Vector::zeros(3), Matrix::zeros(3, 2)).unwrap_err();
    assert_eq!(err, ParamError::CovarianceNotSquare { rows: 3, cols: 2 });
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn covariance_must_be_symmetric() {
    let sigma = Matrix::from_row_slice(2, 2, &[1.0, 0.2, 0.3, 1.0]);
    let err = MvNormalParams::new(Vector::zeros(2), sigma).unwrap_err();
    assert_eq!(err, ParamError::CovarianceNotSymmetric { row: 1, col: 0 });
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn mean_must_be_column() {
    let mean = Matrix::from_row_slice(1, 3, &[0.0, 0.0, 0.0]);
    let err = TruncatedMvNormalParams::from_matrices(
        mean,
        sigma_3x3(),
        Vector::from_element(3, -1.0),
        Vector::from_element(3, 1.0),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn mean_must_be_non_empty() {
    let err = MvNormalParams::new(Vector::zeros(0), Matrix::zeros(0, 0)).unwrap_err();
    assert_eq!(err, ParamError::EmptyMean);
}

#[test]
fn from_matrices_matches_new() {
    let mean = Matrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
    let a = MvStudentTParams::from_matrices(mean, sigma_3x3(), 4.0).unwrap();
    let b = MvStudentTParams::new(Vector::from_row_slice(&[1.0, 2.0, 3.0]), sigma_3x3(), 4.0)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn bound_length_must_match() {
    let err = TruncatedMvNormal::new(
        Vector::zeros(3),
        sigma_3x3(),
        Vector::from_element(3, -1.0),
        Vector::from_element(2, 1.0),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParamError::BoundsDims {
            which: "upper",
            len: 2,
            dims: 3,
        }
    );
}

// =============================================================================
// DOMAIN CHECKS
// =============================================================================

#[test]
fn dof_must_be_positive() {
    for dof in [0.0, -2.0] {
        let err = MvStudentT::new(Vector::zeros(3), sigma_3x3(), dof).unwrap_err();
        assert_eq!(err, ParamError::NonPositiveDof { dof });
        assert_eq!(err.kind(), ErrorKind::Domain);
    }
}

#[test]
fn inverted_bounds_rejected() {
    let err = TruncatedMvNormal::new(
        Vector::zeros(3),
        sigma_3x3(),
        Vector::from_row_slice(&[-1.0, 1.0, -1.0]),
        Vector::from_row_slice(&[1.0, 0.0, 1.0]),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert!(matches!(err, ParamError::InvertedBounds { index: 1, .. }));
}

#[test]
fn non_finite_mean_rejected() {
    let err = MvNormal::new(Vector::from_row_slice(&[0.0, f64::INFINITY]), Matrix::identity(2, 2))
        .unwrap_err();
    assert_eq!(
        err,
        ParamError::NonFinite {
            field: "mean",
            index: 1,
        }
    );
}

#[test]
fn scalar_domains() {
    assert_eq!(
        TruncatedNormal::new(0.0, -1.0, -1.0, 1.0).unwrap_err().kind(),
        ErrorKind::Domain
    );
    assert_eq!(
        RectifiedNormal::new(0.0, 0.0).unwrap_err().kind(),
        ErrorKind::Domain
    );
}

// =============================================================================
// NUMERICAL CHECKS
// =============================================================================

#[test]
fn non_positive_definite_rejected() {
    let sigma = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 1.0]);
    let err = MvNormalParams::new(Vector::zeros(2), sigma).unwrap_err();
    assert_eq!(err, ParamError::Numerical(NumericalError::NotPositiveDefinite));
    assert_eq!(err.kind(), ErrorKind::Numerical);
}

#[test]
fn singular_covariance_rejected_for_truncated() {
    let sigma = Matrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
    let err = TruncatedMvNormalParams::new(
        Vector::zeros(2),
        sigma,
        Vector::from_element(2, -1.0),
        Vector::from_element(2, 1.0),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Numerical);
}

// =============================================================================
// EQUALITY
// =============================================================================

#[test]
fn equality_is_reflexive() {
    let p = MvStudentTParams::new(Vector::zeros(3), sigma_3x3(), 5.0).unwrap();
    assert_eq!(p, p);
}

#[test]
fn equality_within_tolerance() {
    let a = MvNormalParams::new(Vector::from_row_slice(&[1.0, 2.0, 3.0]), sigma_3x3()).unwrap();
    let b =
        MvNormalParams::new(Vector::from_row_slice(&[1.0009, 1.9991, 3.0]), sigma_3x3()).unwrap();
    let c = MvNormalParams::new(Vector::from_row_slice(&[1.002, 2.0, 3.0]), sigma_3x3()).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn samplers_compare_by_params() {
    let a = MvNormal::new(Vector::zeros(3), sigma_3x3()).unwrap();
    let b = MvNormal::from_params(MvNormalParams::new(Vector::zeros(3), sigma_3x3()).unwrap());
    assert_eq!(a, b);
}
