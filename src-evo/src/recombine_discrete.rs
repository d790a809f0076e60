use ndarray::Array1;
use rand::Rng;

/// A parent as seen by ES recombination: `(position, step sizes)`
pub(crate) type Parent<'a> = (&'a Array1<f64>, &'a Array1<f64>);

/// Discrete recombination: per coordinate a fair coin picks the parent that
/// supplies both the position and the step size at that index.
pub(crate) fn discrete_recombination<R: Rng + ?Sized>(
	p1: Parent<'_>,
	p2: Parent<'_>,
	rng: &mut R,
) -> (Array1<f64>, Array1<f64>) {
	let coins: Vec<bool> = (0..p1.0.len()).map(|_| rng.random::<f64>() < 0.5).collect();
	recombine_with_coins(p1, p2, &coins)
}

/// `coins[i] == true` takes coordinate `i` from `p1`, otherwise from `p2`
pub(crate) fn recombine_with_coins(
	p1: Parent<'_>,
	p2: Parent<'_>,
	coins: &[bool],
) -> (Array1<f64>, Array1<f64>) {
	let n = coins.len();
	let mut x = Array1::<f64>::zeros(n);
	let mut sigma = Array1::<f64>::zeros(n);
	for (i, &take_first) in coins.iter().enumerate() {
		let (px, ps) = if take_first { p1 } else { p2 };
		x[i] = px[i];
		sigma[i] = ps[i];
	}
	(x, sigma)
}
