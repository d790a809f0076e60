use log::debug;
use serde::Serialize;

use crate::NewtonError;
use crate::solver::NewtonSolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremumKind {
    Minimum,
    Maximum,
}

impl std::fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtremumKind::Minimum => write!(f, "minimum"),
            ExtremumKind::Maximum => write!(f, "maximum"),
        }
    }
}

/// A critical point of `f`, rounded to 4 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extremum {
    pub x: f64,
    pub value: f64,
    pub kind: ExtremumKind,
}

fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

/// Locate the extrema of `f` on `interval`
///
/// Newton is started from `n` evenly spaced points (endpoints included).
/// Roots that land outside the interval are dropped, the rest are rounded to
/// 4 decimals and deduplicated. A point is a minimum when `f'' > 0` there,
/// otherwise a maximum. Results are sorted by `x`.
pub fn find_extrema<F, F1, F2>(
    f: F,
    f1: F1,
    f2: F2,
    interval: (f64, f64),
    n: usize,
) -> Result<Vec<Extremum>, NewtonError>
where
    F: Fn(f64) -> f64,
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    let (low, high) = interval;
    if !(low.is_finite() && high.is_finite() && low <= high) {
        return Err(NewtonError::InvalidInterval { low, high });
    }
    if n == 0 {
        return Err(NewtonError::NoStartingPoints);
    }

    let solver = NewtonSolver::default();
    let step = if n > 1 { (high - low) / (n - 1) as f64 } else { 0.0 };
    let mut found: Vec<Extremum> = Vec::new();

    for i in 0..n {
        let guess = low + step * i as f64;
        let root = solver.solve(&f1, &f2, guess).x;
        if !(low..=high).contains(&root) {
            continue;
        }
        let x = round4(root);
        if found.iter().any(|e| e.x == x) {
            continue;
        }
        let kind = if f2(x) > 0.0 { ExtremumKind::Minimum } else { ExtremumKind::Maximum };
        debug!("critical point from x0={:.4}: x={} ({})", guess, x, kind);
        found.push(Extremum { x, value: f(x), kind });
    }

    found.sort_by(|a, b| a.x.total_cmp(&b.x));
    Ok(found)
}
