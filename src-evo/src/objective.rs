use ndarray::Array1;

use crate::individual::Individual;

/// Wraps the caller's objective and counts evaluations
pub struct Objective<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	nfev: usize,
}

impl<'a, F> Objective<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	pub fn new(func: &'a F) -> Self {
		Self { func, nfev: 0 }
	}

	pub fn eval(&mut self, x: &Array1<f64>) -> f64 {
		self.nfev += 1;
		(self.func)(x)
	}

	/// Fill the cached objective if it is missing; returns the cached value
	pub fn evaluate(&mut self, ind: &mut Individual) -> f64 {
		match ind.objective() {
			Some(v) => v,
			None => {
				let v = self.eval(&ind.position);
				ind.set_objective(v);
				v
			}
		}
	}

	pub fn nfev(&self) -> usize {
		self.nfev
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_counts_and_caches() {
		let f = |x: &Array1<f64>| x.sum();
		let mut obj = Objective::new(&f);
		let mut ind = Individual::new(Array1::from(vec![1.0, 2.0]));
		assert_eq!(obj.evaluate(&mut ind), 3.0);
		assert_eq!(obj.evaluate(&mut ind), 3.0);
		assert_eq!(obj.nfev(), 1);
		assert_eq!(obj.eval(&Array1::from(vec![0.5])), 0.5);
		assert_eq!(obj.nfev(), 2);
	}
}
