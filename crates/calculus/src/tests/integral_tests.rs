// Integral Tests

use crate::{derivative, integral, ComputationError};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::PI;

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

#[test]
fn test_starts_at_zero() {
    let x = linspace(1.0, 4.0, 10);
    let y = vec![7.0; 10];
    let total = integral(&x, &y).unwrap();
    assert_eq!(total[0], 0.0);
    assert_eq!(total.len(), 10);
}

#[test]
fn test_constant() {
    let x = linspace(0.0, 2.0, 5);
    let total = integral(&x, &[3.0; 5]).unwrap();
    assert_eq!(total, vec![0.0, 1.5, 3.0, 4.5, 6.0]);
}

#[test]
fn test_identity_over_unit_interval() {
    let x = linspace(0.0, 1.0, 500);
    let total = integral(&x, &x).unwrap();
    assert_relative_eq!(total[499], 0.5, epsilon = 1e-12);
}

#[test]
fn test_sin_over_full_period() {
    let x = linspace(0.0, 2.0 * PI, 500);
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let total = integral(&x, &y).unwrap();
    assert_abs_diff_eq!(total[499], 0.0, epsilon = 1e-9);

    // running integral is 1 - cos(x)
    let step = x[1] - x[0];
    for (t, xv) in total.iter().zip(&x) {
        assert_abs_diff_eq!(*t, 1.0 - xv.cos(), epsilon = step * step);
    }
}

#[test]
fn test_derivative_of_integral_recovers_function() {
    let x = linspace(-1.0, 1.0, 201);
    let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
    let d = derivative(&x, &integral(&x, &y).unwrap()).unwrap();
    for i in 1..x.len() - 1 {
        assert_abs_diff_eq!(d[i], y[i], epsilon = 1e-3);
    }
}

#[test]
fn test_uneven_spacing() {
    let x = vec![0.0, 0.5, 2.0];
    let y = vec![0.0, 1.0, 1.0];
    assert_eq!(integral(&x, &y).unwrap(), vec![0.0, 0.25, 1.75]);
}

#[test]
fn test_nan_carries_forward() {
    let x = linspace(0.0, 4.0, 5);
    let y = vec![1.0, 1.0, f64::NAN, 1.0, 1.0];
    let total = integral(&x, &y).unwrap();
    assert_eq!(total[1], 1.0);
    assert!(total[2..].iter().all(|v| v.is_nan()));
}

#[test]
fn test_zero_length_intervals_with_finite_values() {
    let x = vec![1.0; 4];
    let total = integral(&x, &[5.0; 4]).unwrap();
    assert_eq!(total, vec![0.0; 4]);
}

#[test]
fn test_zero_length_interval_with_infinite_value_is_nan() {
    let total = integral(&[0.0, 0.0, 1.0], &[f64::INFINITY, 1.0, 1.0]).unwrap();
    assert_eq!(total[0], 0.0);
    assert!(total[1].is_nan());
    assert!(total[2].is_nan());
}

#[test]
fn test_errors() {
    assert_eq!(
        integral(&[0.0, 1.0], &[1.0]),
        Err(ComputationError::LengthMismatch { x: 2, y: 1 })
    );
    assert_eq!(
        integral(&[0.0], &[1.0]),
        Err(ComputationError::TooFewPoints { found: 1, min: 2 })
    );
}
