use ndarray::Array1;
use rand::Rng;

use crate::bounds::Bounds;

/// Pull of a brighter firefly plus a shrinking uniform random walk
#[derive(Debug, Clone)]
pub(crate) struct Attraction {
	pub beta0: f64,
	pub gamma: f64,
	/// Current walk amplitude, decays every generation
	pub alpha: f64,
	/// Per-dimension walk width
	pub walk: Array1<f64>,
}

impl Attraction {
	/// `beta0 * exp(-gamma * r^2)`
	pub(crate) fn beta(&self, r2: f64) -> f64 {
		self.beta0 * (-self.gamma * r2).exp()
	}

	/// Move `xi` toward `xj`, one uniform draw per coordinate
	pub(crate) fn step<R: Rng + ?Sized>(
		&self,
		xi: &Array1<f64>,
		xj: &Array1<f64>,
		bounds: &Bounds,
		rng: &mut R,
	) -> Array1<f64> {
		let draws = Array1::from_shape_fn(xi.len(), |_| rng.random::<f64>());
		self.step_with_draws(xi, xj, &draws, bounds)
	}

	/// `x_k + beta (y_k - x_k) + alpha (u_k - 1/2) walk_k`, clamped
	pub(crate) fn step_with_draws(
		&self,
		xi: &Array1<f64>,
		xj: &Array1<f64>,
		draws: &Array1<f64>,
		bounds: &Bounds,
	) -> Array1<f64> {
		let r2 = (xj - xi).mapv(|d| d * d).sum();
		let beta = self.beta(r2);
		Array1::from_shape_fn(xi.len(), |k| {
			let v = xi[k] + beta * (xj[k] - xi[k]) + self.alpha * (draws[k] - 0.5) * self.walk[k];
			bounds.clamp_coord(k, v)
		})
	}
}
