//! Scalar functions with closed-form first and second derivatives
//!
//! Used by Newton's method to locate extrema: the roots of `f'` are the
//! critical points and the sign of `f''` classifies them.

/// f(x) = sin(2x)
pub fn sin_2x(x: f64) -> f64 {
    (2.0 * x).sin()
}

/// f'(x) = 2 cos(2x)
pub fn sin_2x_prime(x: f64) -> f64 {
    2.0 * (2.0 * x).cos()
}

/// f''(x) = -4 sin(2x)
pub fn sin_2x_second(x: f64) -> f64 {
    -4.0 * (2.0 * x).sin()
}

/// f(x) = sin(x) + x cos(x)
pub fn sin_plus_x_cos(x: f64) -> f64 {
    x.sin() + x * x.cos()
}

/// f'(x) = 2 cos(x) - x sin(x)
pub fn sin_plus_x_cos_prime(x: f64) -> f64 {
    2.0 * x.cos() - x * x.sin()
}

/// f''(x) = -3 sin(x) - x cos(x)
pub fn sin_plus_x_cos_second(x: f64) -> f64 {
    -3.0 * x.sin() - x * x.cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central_diff(f: fn(f64) -> f64, x: f64) -> f64 {
        let h = 1e-6;
        (f(x + h) - f(x - h)) / (2.0 * h)
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        for &x in &[-3.7, -1.0, 0.0, 0.4, 2.2, 4.9] {
            assert!((central_diff(sin_2x, x) - sin_2x_prime(x)).abs() < 1e-6);
            assert!((central_diff(sin_2x_prime, x) - sin_2x_second(x)).abs() < 1e-6);
            assert!((central_diff(sin_plus_x_cos, x) - sin_plus_x_cos_prime(x)).abs() < 1e-6);
            assert!(
                (central_diff(sin_plus_x_cos_prime, x) - sin_plus_x_cos_second(x)).abs() < 1e-6
            );
        }
    }
}
