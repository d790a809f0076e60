use ndarray::Array1;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::bounds::Bounds;

/// Self-adaptive mutation: log-normal update of every step size first,
/// then a Gaussian step on the position scaled by the new step sizes.
/// Positions are clamped to `bounds`, step sizes never are.
pub(crate) fn self_adaptive_mutation<R: Rng + ?Sized>(
	x: &Array1<f64>,
	sigma: &Array1<f64>,
	bounds: &Bounds,
	rng: &mut R,
) -> (Array1<f64>, Array1<f64>) {
	let n = x.len();
	let z_sigma = Array1::from_shape_fn(n, |_| rng.sample::<f64, _>(StandardNormal));
	let z_x = Array1::from_shape_fn(n, |_| rng.sample::<f64, _>(StandardNormal));
	mutate_with_draws(x, sigma, &z_sigma, &z_x, bounds)
}

/// Deterministic core: `sigma' = sigma * exp(z_sigma / sqrt(n))`, `x' = clip(x + sigma' * z_x)`
pub(crate) fn mutate_with_draws(
	x: &Array1<f64>,
	sigma: &Array1<f64>,
	z_sigma: &Array1<f64>,
	z_x: &Array1<f64>,
	bounds: &Bounds,
) -> (Array1<f64>, Array1<f64>) {
	let tau = 1.0 / (x.len() as f64).sqrt();
	let new_sigma = sigma * &z_sigma.mapv(|z| (z * tau).exp());
	let mut new_x = x + &(&new_sigma * z_x);
	bounds.clip_inplace(&mut new_x);
	(new_x, new_sigma)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_zero_draws_do_not_drift() {
		let bounds = Bounds::uniform(-5.0, 5.0, 3).unwrap();
		let x = Array1::from(vec![1.0, -2.5, 4.0]);
		let sigma = Array1::from(vec![0.3, 0.01, 0.49]);
		let zeros = Array1::zeros(3);
		let (x2, s2) = mutate_with_draws(&x, &sigma, &zeros, &zeros, &bounds);
		assert_eq!(x2, x);
		assert_eq!(s2, sigma);
	}

	#[test]
	fn test_step_update_uses_sqrt_dim() {
		let bounds = Bounds::uniform(-100.0, 100.0, 4).unwrap();
		let x = Array1::zeros(4);
		let sigma = Array1::from(vec![1.0; 4]);
		let z_sigma = Array1::from(vec![2.0, 0.0, -2.0, 4.0]);
		let z_x = Array1::from(vec![1.0; 4]);
		let (x2, s2) = mutate_with_draws(&x, &sigma, &z_sigma, &z_x, &bounds);
		let expected = [1.0f64.exp(), 1.0, (-1.0f64).exp(), 2.0f64.exp()];
		for i in 0..4 {
			assert!((s2[i] - expected[i]).abs() < 1e-12);
			// position moved by exactly the new step size
			assert!((x2[i] - s2[i]).abs() < 1e-12);
		}
	}

	#[test]
	fn test_position_clamped_steps_unclamped() {
		let bounds = Bounds::uniform(-1.0, 1.0, 2).unwrap();
		let x = Array1::from(vec![0.9, -0.9]);
		let sigma = Array1::from(vec![5.0, 5.0]);
		let z_sigma = Array1::from(vec![1.0, 1.0]);
		let z_x = Array1::from(vec![1.0, -1.0]);
		let (x2, s2) = mutate_with_draws(&x, &sigma, &z_sigma, &z_x, &bounds);
		assert_eq!(x2.to_vec(), vec![1.0, -1.0]);
		assert!(s2.iter().all(|&s| s > 5.0));
	}

	#[test]
	fn test_random_mutation_keeps_bounds_and_positive_steps() {
		let bounds = Bounds::uniform(-5.12, 5.12, 2).unwrap();
		let mut rng = StdRng::seed_from_u64(17);
		let mut x = Array1::from(vec![5.0, -5.0]);
		let mut sigma = Array1::from(vec![0.4, 0.2]);
		for _ in 0..200 {
			let (nx, ns) = self_adaptive_mutation(&x, &sigma, &bounds, &mut rng);
			assert!(bounds.contains(&nx));
			assert!(ns.iter().all(|&s| s > 0.0));
			x = nx;
			sigma = ns;
		}
	}
}
