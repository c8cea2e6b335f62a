//! Moment checks against known targets.

use mvdist::{
    create_rng, GibbsConfig, Matrix, MultivariateSampler, MvNormal, MvStudentT, RectifiedNormal,
    TruncatedMvNormal, Vector, DEFAULT_SEED,
};
use rand::distr::Distribution;

const N: usize = 10_000;

fn row_mean(m: &Matrix, i: usize) -> f64 {
    m.row(i).sum() / m.ncols() as f64
}

fn row_stddev(m: &Matrix, i: usize) -> f64 {
    let mean = row_mean(m, i);
    let ss: f64 = m.row(i).iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (m.ncols() - 1) as f64).sqrt()
}

fn correlation(m: &Matrix, i: usize, j: usize) -> f64 {
    let (mi, mj) = (row_mean(m, i), row_mean(m, j));
    let cov: f64 = m
        .column_iter()
        .map(|c| (c[i] - mi) * (c[j] - mj))
        .sum::<f64>()
        / (m.ncols() - 1) as f64;
    cov / (row_stddev(m, i) * row_stddev(m, j))
}

fn standard_normal_cdf(z: f64) -> f64 {
    use mvdist::{NormalCdf, StandardNormalCdf};
    StandardNormalCdf.cdf(0.0, 1.0, z)
}

// =============================================================================
// MULTIVARIATE NORMAL
// =============================================================================

#[test]
fn mvnorm_means_and_stddevs() {
    let target = Vector::from_row_slice(&[1.0, 1.0, 1.0]);
    let mvn = MvNormal::new(target.clone(), Matrix::identity(3, 3)).unwrap();
    let mut rng = create_rng(42);
    let sample = mvn.sample_batch(&mut rng, N);

    for i in 0..3 {
        let mean = row_mean(&sample, i);
        let sd = row_stddev(&sample, i);
        assert!((mean - target[i]).abs() < 0.05, "mean[{i}] = {mean}");
        assert!((sd - 1.0).abs() < 0.05, "stddev[{i}] = {sd}");
    }
}

#[test]
fn mvnorm_correlation() {
    let sigma = Matrix::from_row_slice(2, 2, &[1.0, -0.6, -0.6, 1.0]);
    let mvn = MvNormal::new(Vector::zeros(2), sigma).unwrap();
    let mut rng = create_rng(DEFAULT_SEED);
    let sample = mvn.sample_batch(&mut rng, N);

    let r = correlation(&sample, 0, 1);
    assert!((r + 0.6).abs() < 0.05, "correlation = {r}");
}

// =============================================================================
// STUDENT-T
// =============================================================================

#[test]
fn student_t_mean_near_location() {
    let location = Vector::from_row_slice(&[2.0, -1.0]);
    let t = MvStudentT::new(location.clone(), Matrix::identity(2, 2), 5.0).unwrap();
    let mut rng = create_rng(42);
    let sample = t.sample_batch(&mut rng, N);

    for i in 0..2 {
        let mean = row_mean(&sample, i);
        assert!((mean - location[i]).abs() < 0.05, "mean[{i}] = {mean}");
    }
}

#[test]
fn student_t_has_heavier_tails_than_normal() {
    let mvn = MvNormal::new(Vector::zeros(1), Matrix::identity(1, 1)).unwrap();
    let t = MvStudentT::new(Vector::zeros(1), Matrix::identity(1, 1), 3.0).unwrap();
    let mut rng = create_rng(7);

    let beyond = |sample: &Matrix| {
        sample.iter().filter(|v| v.abs() > 3.0).count() as f64 / N as f64
    };

    // P(|Z| > 3) ≈ 0.0027 for the normal and ≈ 0.058 for t with 3 dof
    let normal_tail = beyond(&mvn.sample_batch(&mut rng, N));
    let t_tail = beyond(&t.sample_batch(&mut rng, N));
    assert!(normal_tail < 0.01, "normal tail = {normal_tail}");
    assert!(t_tail > 0.03, "t tail = {t_tail}");
}

#[test]
fn student_t_covariance_scaling() {
    // Cov = Σ · dof / (dof − 2) = 0.625 for Σ = 0.5, dof = 10
    let t = MvStudentT::new(Vector::zeros(1), Matrix::identity(1, 1) * 0.5, 10.0).unwrap();
    let mut rng = create_rng(11);
    let sample = t.sample_batch(&mut rng, 50_000);
    let var = row_stddev(&sample, 0).powi(2);
    assert!((var - 0.625).abs() < 0.05, "variance = {var}");
}

// =============================================================================
// TRUNCATED MULTIVARIATE NORMAL
// =============================================================================

#[test]
fn truncated_independent_half_normal() {
    // Diagonal covariance: one sweep already draws exactly from the marginals
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(2),
        Matrix::from_diagonal(&Vector::from_row_slice(&[1.0, 4.0])),
        Vector::from_row_slice(&[0.0, f64::NEG_INFINITY]),
        Vector::from_row_slice(&[f64::INFINITY, f64::INFINITY]),
    )
    .unwrap();
    let mut rng = create_rng(42);
    let sample = tmvn.sample_batch(&mut rng, N);

    let half_normal_mean = (2.0 / std::f64::consts::PI).sqrt();
    assert!((row_mean(&sample, 0) - half_normal_mean).abs() < 0.05);
    assert!(row_mean(&sample, 1).abs() < 0.1);
    assert!((row_stddev(&sample, 1) - 2.0).abs() < 0.1);
}

#[test]
fn truncated_wide_box_recovers_correlation() {
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(2),
        Matrix::from_row_slice(2, 2, &[1.0, 0.8, 0.8, 1.0]),
        Vector::from_element(2, -50.0),
        Vector::from_element(2, 50.0),
    )
    .unwrap()
    .with_config(GibbsConfig::new().sweeps(30));
    let mut rng = create_rng(DEFAULT_SEED);
    let sample = tmvn.sample_batch(&mut rng, 4000);

    let r = correlation(&sample, 0, 1);
    assert!((r - 0.8).abs() < 0.05, "correlation = {r}");
    for i in 0..2 {
        assert!((row_stddev(&sample, i) - 1.0).abs() < 0.06);
    }
}

#[test]
fn truncated_chain_correlation_is_positive() {
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(2),
        Matrix::from_row_slice(2, 2, &[1.0, 0.9, 0.9, 1.0]),
        Vector::from_element(2, -1.0),
        Vector::from_element(2, 1.0),
    )
    .unwrap();
    let mut rng = create_rng(3);
    let trace = tmvn.sample_chain(&mut rng, N);

    assert!(correlation(&trace, 0, 1) > 0.3);
}

// =============================================================================
// RECTIFIED NORMAL
// =============================================================================

#[test]
fn rectified_point_mass_at_zero() {
    let rn = RectifiedNormal::new(0.5, 1.0).unwrap();
    let mut rng = create_rng(42);
    let zeros = (0..N).filter(|_| rn.sample(&mut rng) == 0.0).count() as f64 / N as f64;

    let expected = standard_normal_cdf(-0.5);
    assert!((zeros - expected).abs() < 0.02, "zeros = {zeros}, expected {expected}");
}
