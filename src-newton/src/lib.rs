//! Newton's method for extrema of scalar functions
//!
//! Critical points are the roots of `f'`. Each root is found with the update
//! `x <- x - f'(x) / f''(x)` and classified by the sign of `f''`.
//!
//! ```rust
//! use evopt_newton::{find_extrema, ExtremumKind};
//! use evopt_testfunctions::{sin_2x, sin_2x_prime, sin_2x_second};
//!
//! let extrema = find_extrema(sin_2x, sin_2x_prime, sin_2x_second, (-4.0, 4.0), 20).unwrap();
//! let max = extrema.iter().find(|e| (e.x - 0.7854).abs() < 1e-9).unwrap();
//! assert_eq!(max.kind, ExtremumKind::Maximum);
//! ```

pub mod extrema;
pub mod solver;

pub use extrema::{Extremum, ExtremumKind, find_extrema};
pub use solver::{NewtonResult, NewtonSolver, newton_method};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NewtonError {
    #[error("interval [{low}, {high}] is empty or not finite")]
    InvalidInterval { low: f64, high: f64 },
    #[error("at least one starting point is required")]
    NoStartingPoints,
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}
