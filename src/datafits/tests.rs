use approx::assert_relative_eq;
use ndarray::{array, Array1};

use crate::datafits::*;
use crate::datasets::DatasetBase;
use crate::error::GdError;
use crate::helpers::helpers::least_squares;
use crate::helpers::test_helpers::*;

#[test]
fn test_value_quadratic() {
    let dataset = DatasetBase::new(array![3.0, 1.0, -2.0], array![1.0, 2.0, 0.5]).unwrap();
    let df = Quadratic::new();
    let val = df.value(&dataset, 0.5, -1.);
    assert_relative_eq!(val, 2.125, epsilon = 1e-12);
}

#[test]
fn test_gradient_quadratic() {
    let dataset = DatasetBase::new(array![3.0, 1.0, -2.0], array![1.0, 2.0, 0.5]).unwrap();
    let df = Quadratic::new();
    let (dw, db) = df.gradient(&dataset, 0.5, -1.);
    assert_relative_eq!(dw, 1. / 3., epsilon = 1e-12);
    assert_relative_eq!(db, -5.5 / 3., epsilon = 1e-12);
}

#[test]
fn test_compute_cost_at_origin() {
    let x = array![1., 2.];
    let y = array![300., 500.];
    assert_eq!(compute_cost(x.view(), y.view(), 0., 0.).unwrap(), 85000.);
}

#[test]
fn test_compute_gradient_at_origin() {
    let x = array![1., 2.];
    let y = array![300., 500.];
    assert_eq!(
        compute_gradient(x.view(), y.view(), 0., 0.).unwrap(),
        (-650., -400.)
    );
}

#[test]
fn test_compute_cost_exact_fit() {
    let x = array![1., 2.];
    let y = array![300., 500.];
    assert_eq!(compute_cost(x.view(), y.view(), 200., 100.).unwrap(), 0.);
}

#[test]
fn test_compute_gradient_exact_fit() {
    let x = array![1., 2.];
    let y = array![300., 500.];
    assert_eq!(
        compute_gradient(x.view(), y.view(), 200., 100.).unwrap(),
        (0., 0.)
    );
}

#[test]
fn test_compute_cost_single_precision() {
    let x = array![1.0f32, 2.0];
    let y = array![300.0f32, 500.0];
    assert_eq!(compute_cost(x.view(), y.view(), 200., 100.).unwrap(), 0.);
}

#[test]
fn test_cost_is_non_negative() {
    let (x, y) = generate_random_data(100, 1.7, -0.3, 0.5);
    for &(w, b) in &[(0., 0.), (1.7, -0.3), (-4., 12.), (1e3, -1e3)] {
        assert!(compute_cost(x.view(), y.view(), w, b).unwrap() >= 0.);
    }
}

#[test]
fn test_cost_is_zero_iff_exact_fit() {
    let (x, y) = generate_random_data(100, 2., -1., 0.);
    assert_eq!(compute_cost(x.view(), y.view(), 2., -1.).unwrap(), 0.);
    assert!(compute_cost(x.view(), y.view(), 2., -0.999).unwrap() > 0.);
    assert!(compute_cost(x.view(), y.view(), 2.001, -1.).unwrap() > 0.);
}

#[test]
fn test_gradient_vanishes_at_minimizer() {
    let (x, y) = generate_random_data(100, 0.8, 3., 0.5);
    let (w_star, b_star) = least_squares(x.view(), y.view());
    let (dw, db) = compute_gradient(x.view(), y.view(), w_star, b_star).unwrap();
    assert_relative_eq!(dw, 0., epsilon = 1e-10);
    assert_relative_eq!(db, 0., epsilon = 1e-10);
}

#[test]
fn test_empty_input_is_rejected() {
    let x = Array1::<f64>::zeros(0);
    let y = Array1::<f64>::zeros(0);
    assert_eq!(
        compute_cost(x.view(), y.view(), 1., 1.),
        Err(GdError::EmptyDataset)
    );
    assert_eq!(
        compute_gradient(x.view(), y.view(), 1., 1.),
        Err(GdError::EmptyDataset)
    );
}

#[test]
fn test_mismatched_input_is_rejected() {
    let x = array![1., 2., 3.];
    let y = array![1., 2.];
    let expected = GdError::ShapeMismatch {
        features: 3,
        targets: 2,
    };
    assert_eq!(compute_cost(x.view(), y.view(), 1., 1.), Err(expected.clone()));
    assert_eq!(compute_gradient(x.view(), y.view(), 1., 1.), Err(expected));
}

#[test]
fn test_fn_datafit_matches_quadratic() {
    let (x, y) = generate_random_data(30, -1.2, 0.7, 0.3);
    let dataset = DatasetBase::new(x, y).unwrap();
    let df = FnDatafit::<f64, _, _>::new(
        |x, y, w, b| compute_cost(x, y, w, b).unwrap(),
        |x, y, w, b| compute_gradient(x, y, w, b).unwrap(),
    );
    let quadratic = Quadratic::new();
    assert_eq!(
        df.value(&dataset, 0.3, -0.2),
        quadratic.value(&dataset, 0.3, -0.2)
    );
    assert_eq!(
        df.gradient(&dataset, 0.3, -0.2),
        quadratic.gradient(&dataset, 0.3, -0.2)
    );
}

#[test]
fn test_fn_datafit_with_custom_loss() {
    // Mean absolute error and its subgradient.
    let df = FnDatafit::<f64, _, _>::new(
        |x, y, w, b| {
            (x.mapv(|xi| w * xi + b) - &y).mapv(f64::abs).sum() / x.len() as f64
        },
        |x, y, w, b| {
            let s = (x.mapv(|xi| w * xi + b) - &y).mapv(f64::signum);
            (s.dot(&x) / x.len() as f64, s.sum() / x.len() as f64)
        },
    );
    let dataset = DatasetBase::new(array![1., 2.], array![3., 1.]).unwrap();
    assert_eq!(df.value(&dataset, 1., 0.), 1.5);
    assert_eq!(df.gradient(&dataset, 1., 0.), (0.5, 0.));
}
