//! Box constraints shared by every individual of a run

use ndarray::Array1;
use rand::Rng;

use crate::error::EvoError;

/// Per-dimension `[lower, upper]` feasible region
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
	lower: Array1<f64>,
	upper: Array1<f64>,
}

impl Bounds {
	/// Build bounds from `(lower, upper)` pairs, one per dimension
	pub fn new(pairs: &[(f64, f64)]) -> Result<Self, EvoError> {
		if pairs.is_empty() {
			return Err(EvoError::invalid("bounds must have at least one dimension"));
		}
		let n = pairs.len();
		let mut lower = Array1::<f64>::zeros(n);
		let mut upper = Array1::<f64>::zeros(n);
		for (i, &(lo, hi)) in pairs.iter().enumerate() {
			if !lo.is_finite() || !hi.is_finite() {
				return Err(EvoError::NonFiniteBound { index: i });
			}
			if hi < lo {
				return Err(EvoError::InvertedBound { index: i, low: lo, high: hi });
			}
			lower[i] = lo;
			upper[i] = hi;
		}
		Ok(Self { lower, upper })
	}

	/// Same `(low, high)` interval applied to all `dim` dimensions
	pub fn uniform(low: f64, high: f64, dim: usize) -> Result<Self, EvoError> {
		if dim == 0 {
			return Err(EvoError::invalid("dimension must be positive"));
		}
		Self::new(&vec![(low, high); dim])
	}

	pub fn dim(&self) -> usize {
		self.lower.len()
	}

	pub fn lower(&self) -> &Array1<f64> {
		&self.lower
	}

	pub fn upper(&self) -> &Array1<f64> {
		&self.upper
	}

	/// Clamp a single coordinate into `[lower_i, upper_i]`
	pub fn clamp_coord(&self, i: usize, v: f64) -> f64 {
		v.clamp(self.lower[i], self.upper[i])
	}

	/// Clamp every coordinate of `x` in place
	pub fn clip_inplace(&self, x: &mut Array1<f64>) {
		for i in 0..x.len() {
			x[i] = self.clamp_coord(i, x[i]);
		}
	}

	pub fn contains(&self, x: &Array1<f64>) -> bool {
		x.len() == self.dim()
			&& x.iter().enumerate().all(|(i, &v)| v >= self.lower[i] && v <= self.upper[i])
	}

	/// Draw a point uniformly from `[lower_i, upper_i)`; a degenerate bound yields `lower_i`
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
		Array1::from_shape_fn(self.dim(), |i| {
			let span = self.upper[i] - self.lower[i];
			(self.lower[i] + span * rng.random::<f64>()).min(self.upper[i])
		})
	}
}
