use rand::Rng;

/// Two different indices drawn uniformly from `0..n` (without replacement)
pub(crate) fn distinct_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
	debug_assert!(n >= 2, "need at least two candidates");
	let a = rng.random_range(0..n);
	let mut b = rng.random_range(0..n - 1);
	if b >= a {
		b += 1;
	}
	(a, b)
}
