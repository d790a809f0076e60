use log::debug;

use crate::NewtonError;

/// Outcome of one Newton run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// Last iterate
    pub x: f64,
    /// Number of updates applied
    pub iterations: usize,
    /// True when the step fell below the tolerance
    pub converged: bool,
}

/// Newton iteration on a derivative `f1` with its own derivative `f2`
#[derive(Debug, Clone, Copy)]
pub struct NewtonSolver {
    tol: f64,
    max_iter: usize,
}

impl Default for NewtonSolver {
    fn default() -> Self {
        Self { tol: 1e-6, max_iter: 100 }
    }
}

impl NewtonSolver {
    pub fn new(tol: f64, max_iter: usize) -> Result<Self, NewtonError> {
        if !(tol.is_finite() && tol > 0.0) {
            return Err(NewtonError::InvalidTolerance(tol));
        }
        Ok(Self { tol, max_iter })
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Iterate from `x0` until the step is below `tol`, `f2` vanishes, or
    /// `max_iter` updates have been applied
    pub fn solve<F1, F2>(&self, f1: F1, f2: F2, x0: f64) -> NewtonResult
    where
        F1: Fn(f64) -> f64,
        F2: Fn(f64) -> f64,
    {
        let mut xi = x0;
        for it in 0..self.max_iter {
            let curvature = f2(xi);
            if curvature == 0.0 {
                debug!("newton: zero second derivative at x={} after {} steps", xi, it);
                return NewtonResult { x: xi, iterations: it, converged: false };
            }
            let next = xi - f1(xi) / curvature;
            if (next - xi).abs() < self.tol {
                return NewtonResult { x: next, iterations: it + 1, converged: true };
            }
            xi = next;
        }
        debug!("newton: no convergence from x0={} in {} steps", x0, self.max_iter);
        NewtonResult { x: xi, iterations: self.max_iter, converged: false }
    }
}

/// Root of `f1` near `x0`; returns the last iterate when not converged
pub fn newton_method<F1, F2>(f1: F1, f2: F2, x0: f64, tol: f64, max_iter: usize) -> f64
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    NewtonSolver { tol, max_iter }.solve(f1, f2, x0).x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_converges_in_one_step() {
        // f = (x - 3)^2: f' = 2(x - 3), f'' = 2
        let res = NewtonSolver::default().solve(|x| 2.0 * (x - 3.0), |_| 2.0, -10.0);
        assert!(res.converged);
        assert!((res.x - 3.0).abs() < 1e-12);
        assert_eq!(res.iterations, 2);
    }

    #[test]
    fn test_zero_curvature_stops_at_start() {
        let res = NewtonSolver::default().solve(|x| x, |_| 0.0, 1.5);
        assert!(!res.converged);
        assert_eq!(res.x, 1.5);
        assert_eq!(res.iterations, 0);
    }

    #[test]
    fn test_max_iter_exhausted() {
        // f' = cbrt(x) has a root at 0 but Newton doubles the distance each step
        let f1 = |x: f64| x.cbrt();
        let f2 = |x: f64| 1.0 / (3.0 * x.abs().powf(2.0 / 3.0));
        let res = NewtonSolver::new(1e-6, 10).unwrap().solve(f1, f2, 0.1);
        assert!(!res.converged);
        assert_eq!(res.iterations, 10);
        assert!(res.x.abs() > 0.1);
    }

    #[test]
    fn test_free_function_matches_solver() {
        let x = newton_method(|x: f64| x.cos(), |x: f64| -x.sin(), 1.0, 1e-6, 100);
        assert!((x - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_tolerance() {
        assert_eq!(
            NewtonSolver::new(0.0, 10).unwrap_err(),
            NewtonError::InvalidTolerance(0.0)
        );
        assert!(NewtonSolver::new(f64::NAN, 10).is_err());
    }
}
