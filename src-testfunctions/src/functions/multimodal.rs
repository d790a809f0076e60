//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Gaussian peak/well: f(x) = x0 * exp(-(x0^2 + x1^2))
/// Global minimum: f(x) = -1/sqrt(2e) ~ -0.42888 at x = (-1/sqrt(2), 0)
/// Bounds: x_i in [-2, 2]
pub fn gaussian_peak(x: &Array1<f64>) -> f64 {
    x[0] * (-(x[0] * x[0] + x[1] * x[1])).exp()
}

/// Rastrigin function - highly multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n + x.iter().map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos()).sum::<f64>()
}

/// Ackley function - multimodal with a nearly flat outer region
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq = x.iter().map(|&xi| xi * xi).sum::<f64>();
    let sum_cos = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum::<f64>();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

/// Himmelblau function - four global minima
/// Global minimum: f(x) = 0 at (3, 2), (-2.805118, 3.131312), (-3.779310, -3.283186), (3.584428, -1.848126)
/// Bounds: x_i in [-5, 5]
pub fn himmelblau(x: &Array1<f64>) -> f64 {
    (x[0] * x[0] + x[1] - 11.0).powi(2) + (x[0] + x[1] * x[1] - 7.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_peak_minimum() {
        let x = Array1::from(vec![-std::f64::consts::FRAC_1_SQRT_2, 0.0]);
        assert!((gaussian_peak(&x) + 0.42888).abs() < 1e-5);
        // symmetric maximum
        let y = Array1::from(vec![std::f64::consts::FRAC_1_SQRT_2, 0.0]);
        assert!((gaussian_peak(&y) - 0.42888).abs() < 1e-5);
    }

    #[test]
    fn test_multimodal_zeros() {
        let zero = Array1::zeros(3);
        assert!(rastrigin(&zero).abs() < 1e-12);
        assert!(ackley(&zero).abs() < 1e-12);
        assert!(himmelblau(&Array1::from(vec![3.0, 2.0])).abs() < 1e-12);
        assert!(rastrigin(&Array1::from(vec![1.0, 0.0])) > 0.9);
    }
}
