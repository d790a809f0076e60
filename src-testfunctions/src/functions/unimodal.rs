//! Unimodal test functions
//!
//! A single global minimum; these check that an optimizer converges at all.

use ndarray::Array1;

/// Sphere function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Alias of `sphere` kept for callers that name it by its shape
pub fn quadratic(x: &Array1<f64>) -> f64 {
    sphere(x)
}

/// Rosenbrock function - narrow curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Booth function
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: &Array1<f64>) -> f64 {
    (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unimodal_values() {
        assert_eq!(sphere(&Array1::from(vec![3.0, -4.0])), 25.0);
        assert_eq!(quadratic(&Array1::from(vec![1.0, 1.0, 1.0])), 3.0);
        assert_eq!(rosenbrock(&Array1::from(vec![1.0, 1.0, 1.0])), 0.0);
        assert_eq!(rosenbrock(&Array1::from(vec![0.0, 0.0])), 1.0);
        assert_eq!(booth(&Array1::from(vec![1.0, 3.0])), 0.0);
    }
}
