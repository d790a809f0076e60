use ndarray::Array1;
use rand::Rng;

use crate::bounds::Bounds;
use crate::individual::Individual;

/// `size` individuals drawn uniformly inside `bounds`
pub(crate) fn init_random<R: Rng + ?Sized>(
	size: usize,
	bounds: &Bounds,
	rng: &mut R,
) -> Vec<Individual> {
	(0..size).map(|_| Individual::new(bounds.sample(rng))).collect()
}

/// Like [`init_random`], with step sizes drawn as `initial_sigma * U[0, 1)` per dimension.
/// The step scale does not depend on the width of `bounds`.
pub(crate) fn init_random_with_strategy<R: Rng + ?Sized>(
	size: usize,
	bounds: &Bounds,
	initial_sigma: f64,
	rng: &mut R,
) -> Vec<Individual> {
	(0..size)
		.map(|_| {
			let position = bounds.sample(rng);
			let sigma = Array1::from_shape_fn(bounds.dim(), |_| rng.random::<f64>() * initial_sigma);
			Individual::with_strategy(position, sigma)
		})
		.collect()
}
