use ndarray::Array1;
use rand::Rng;

use crate::bounds::Bounds;

/// Arithmetic crossover: with probability `rate` blend the parents with one
/// weight `alpha ~ U[0, 1)` shared by all coordinates, else copy them.
///
/// Blended children are clipped: two parents on the same face can round to a
/// value just past it.
pub(crate) fn arithmetic_crossover<R: Rng + ?Sized>(
	p1: &Array1<f64>,
	p2: &Array1<f64>,
	rate: f64,
	bounds: &Bounds,
	rng: &mut R,
) -> (Array1<f64>, Array1<f64>) {
	if rng.random::<f64>() < rate {
		let alpha = rng.random::<f64>();
		let (mut c1, mut c2) = arithmetic_blend(p1, p2, alpha);
		bounds.clip_inplace(&mut c1);
		bounds.clip_inplace(&mut c2);
		(c1, c2)
	} else {
		(p1.clone(), p2.clone())
	}
}

/// `(alpha*p1 + (1-alpha)*p2, (1-alpha)*p1 + alpha*p2)`
pub(crate) fn arithmetic_blend(
	p1: &Array1<f64>,
	p2: &Array1<f64>,
	alpha: f64,
) -> (Array1<f64>, Array1<f64>) {
	let c1 = p1 * alpha + p2 * (1.0 - alpha);
	let c2 = p1 * (1.0 - alpha) + p2 * alpha;
	(c1, c2)
}
