use ndarray::Array1;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::bounds::Bounds;

/// Per coordinate, with probability `rate`, add `N(0, sigma^2)` and clamp that
/// coordinate to its bound. Untouched coordinates are not clamped.
pub(crate) fn gaussian_mutation<R: Rng + ?Sized>(
	x: &Array1<f64>,
	rate: f64,
	sigma: f64,
	bounds: &Bounds,
	rng: &mut R,
) -> Array1<f64> {
	let mut out = x.clone();
	for i in 0..out.len() {
		if rng.random::<f64>() < rate {
			let z: f64 = rng.sample(StandardNormal);
			out[i] = bounds.clamp_coord(i, out[i] + sigma * z);
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_rate_zero_is_identity() {
		let bounds = Bounds::uniform(-1.0, 1.0, 3).unwrap();
		let x = Array1::from(vec![0.1, -0.2, 0.9]);
		let mut rng = StdRng::seed_from_u64(4);
		assert_eq!(gaussian_mutation(&x, 0.0, 0.5, &bounds, &mut rng), x);
	}

	#[test]
	fn test_rate_one_moves_and_clamps() {
		let bounds = Bounds::uniform(-0.1, 0.1, 50).unwrap();
		let x = Array1::zeros(50);
		let mut rng = StdRng::seed_from_u64(8);
		let y = gaussian_mutation(&x, 1.0, 0.5, &bounds, &mut rng);
		assert!(bounds.contains(&y));
		// with sigma far larger than the box most coordinates end up on a face
		let on_face = y.iter().filter(|&&v| v.abs() == 0.1).count();
		assert!(on_face > 25, "only {} coordinates clamped", on_face);
	}
}
