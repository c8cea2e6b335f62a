//! Support checks for the truncated samplers.

use mvdist::{
    create_rng, GibbsConfig, Matrix, MultivariateSampler, Sampler, TruncatedMvNormal,
    TruncatedNormal, Vector, DEFAULT_SEED,
};
use rand::distr::Distribution;

fn correlated_3x3() -> Matrix {
    Matrix::from_row_slice(3, 3, &[1.0, 0.6, 0.3, 0.6, 1.0, 0.5, 0.3, 0.5, 1.0])
}

fn assert_inside(sample: &Matrix, lowers: &Vector, uppers: &Vector) {
    for (j, col) in sample.column_iter().enumerate() {
        for i in 0..col.len() {
            assert!(
                col[i] >= lowers[i] && col[i] <= uppers[i],
                "draw {j} coordinate {i} = {} outside [{}, {}]",
                col[i],
                lowers[i],
                uppers[i]
            );
        }
    }
}

// =============================================================================
// CONTAINMENT
// =============================================================================

#[test]
fn all_draws_inside_box() {
    let lowers = Vector::from_row_slice(&[-0.5, 0.0, f64::NEG_INFINITY]);
    let uppers = Vector::from_row_slice(&[1.0, f64::INFINITY, -0.25]);
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(3),
        correlated_3x3(),
        lowers.clone(),
        uppers.clone(),
    )
    .unwrap();
    let mut rng = create_rng(DEFAULT_SEED);

    let sample = tmvn.sample_batch(&mut rng, 10_000);
    assert_inside(&sample, &lowers, &uppers);
}

#[test]
fn chain_states_inside_box() {
    let lowers = Vector::from_row_slice(&[0.2, -0.1, -2.0]);
    let uppers = Vector::from_row_slice(&[0.3, 0.1, 2.0]);
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(3),
        correlated_3x3(),
        lowers.clone(),
        uppers.clone(),
    )
    .unwrap();
    let mut rng = create_rng(42);

    let trace = tmvn.sample_chain(&mut rng, 10_000);
    assert_inside(&trace, &lowers, &uppers);
}

#[test]
fn box_far_in_tail() {
    // Box several standard deviations from the mean in both directions
    let lowers = Vector::from_row_slice(&[6.0, -9.0]);
    let uppers = Vector::from_row_slice(&[7.0, -8.0]);
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(2),
        Matrix::from_row_slice(2, 2, &[1.0, 0.3, 0.3, 1.0]),
        lowers.clone(),
        uppers.clone(),
    )
    .unwrap()
    .with_config(GibbsConfig::new().sweeps(5));
    let mut rng = create_rng(9);

    let sample = tmvn.sample_batch(&mut rng, 2_000);
    assert_inside(&sample, &lowers, &uppers);
}

#[test]
fn support_reports_box() {
    let lowers = Vector::from_row_slice(&[-1.0, -2.0, -3.0]);
    let uppers = Vector::from_row_slice(&[1.0, 2.0, 3.0]);
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(3),
        correlated_3x3(),
        lowers.clone(),
        uppers.clone(),
    )
    .unwrap();
    assert_eq!(tmvn.support(), (lowers, uppers));
}

// =============================================================================
// DEGENERATE BOUNDS
// =============================================================================

#[test]
fn equal_bounds_pin_coordinate() {
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(3),
        correlated_3x3(),
        Vector::from_row_slice(&[-1.0, 0.75, -1.0]),
        Vector::from_row_slice(&[1.0, 0.75, 1.0]),
    )
    .unwrap()
    .with_config(GibbsConfig::new().sweeps(3));
    let mut rng = create_rng(5);

    for _ in 0..1_000 {
        let x = tmvn.sample(&mut rng);
        assert_eq!(x[1], 0.75);
    }
}

#[test]
fn vanishing_mass_hugs_nearest_bound() {
    // Exponential tail with rate 100: almost all mass within 0.05 of the bound
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(1),
        Matrix::identity(1, 1),
        Vector::from_element(1, 100.0),
        Vector::from_element(1, 101.0),
    )
    .unwrap();
    let mut rng = create_rng(1);
    for _ in 0..1_000 {
        let x = tmvn.sample(&mut rng)[0];
        assert!((100.0..100.5).contains(&x), "{x}");
    }
}

#[test]
fn wide_coordinate_fills_narrow_box() {
    // sd 1e17 on [-1, 1]: Φ(b) − Φ(a) cancels, the conditional is uniform
    let lowers = Vector::from_element(2, -1.0);
    let uppers = Vector::from_element(2, 1.0);
    let tmvn = TruncatedMvNormal::new(
        Vector::zeros(2),
        Matrix::from_row_slice(2, 2, &[1e34, 0.0, 0.0, 1.0]),
        lowers.clone(),
        uppers.clone(),
    )
    .unwrap();
    let mut rng = create_rng(DEFAULT_SEED);

    let sample = tmvn.sample_batch(&mut rng, 10_000);
    assert_inside(&sample, &lowers, &uppers);

    let row = sample.row(0);
    let mean = row.sum() / row.len() as f64;
    let var = row.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (row.len() - 1) as f64;
    assert!((var - 1.0 / 3.0).abs() < 0.02, "variance = {var}");
}

// =============================================================================
// SCALAR TRUNCATED NORMAL
// =============================================================================

#[test]
fn scalar_draws_inside_interval() {
    let tn = TruncatedNormal::new(2.0, 0.5, -1.0, 1.5).unwrap();
    let mut rng = create_rng(DEFAULT_SEED);
    for _ in 0..10_000 {
        let x = tn.sample(&mut rng);
        assert!((-1.0..=1.5).contains(&x), "{x}");
    }
}

#[test]
fn scalar_default_interval() {
    let tn = TruncatedNormal::default();
    let mut rng = create_rng(DEFAULT_SEED);
    for _ in 0..10_000 {
        let x = tn.sample(&mut rng);
        assert!((-4.0..=4.0).contains(&x));
    }
}

#[test]
fn scalar_wide_stddev_on_narrow_interval() {
    let tn = TruncatedNormal::new(0.0, 1e17, -1.0, 1.0).unwrap();
    let mut rng = create_rng(DEFAULT_SEED);
    let xs: Vec<f64> = (0..10_000).map(|_| tn.sample(&mut rng)).collect();

    let mean = xs.iter().sum::<f64>() / xs.len() as f64;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (xs.len() - 1) as f64;
    assert!((var - 1.0 / 3.0).abs() < 0.02, "variance = {var}");

    let mut sorted = xs.clone();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    assert!(sorted.len() > 9_000, "only {} distinct values", sorted.len());
}

#[test]
fn scalar_equal_bounds() {
    let tn = TruncatedNormal::new(0.0, 1.0, 0.3, 0.3).unwrap();
    let mut rng = create_rng(2);
    assert_eq!(tn.sample(&mut rng), 0.3);
}
