//! Sign convention between objective values and selection fitness
//!
//! The engines minimize an objective. Selection reasons in terms of fitness to
//! maximize, with `fitness = -objective`. Every comparison goes through
//! [`Fitness::better_than`] so the convention is written down exactly once.

use std::cmp::Ordering;

/// Fitness to maximize, derived from an objective value to minimize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fitness(f64);

impl Fitness {
	pub fn from_objective(value: f64) -> Self {
		Fitness(-value)
	}

	pub fn objective(self) -> f64 {
		-self.0
	}

	pub fn value(self) -> f64 {
		self.0
	}

	/// Worst possible fitness; anything finite is better
	pub fn worst() -> Self {
		Fitness(f64::NEG_INFINITY)
	}

	/// Strictly better; equal fitness is not an improvement. Any number beats NaN.
	pub fn better_than(self, other: Fitness) -> bool {
		self.0 > other.0 || (other.0.is_nan() && !self.0.is_nan())
	}

	/// Order best first, NaN sorted last
	pub fn rank(self, other: Fitness) -> Ordering {
		match (self.0.is_nan(), other.0.is_nan()) {
			(true, true) => Ordering::Equal,
			(true, false) => Ordering::Greater,
			(false, true) => Ordering::Less,
			(false, false) => other.0.total_cmp(&self.0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lower_objective_is_better() {
		let a = Fitness::from_objective(1.0);
		let b = Fitness::from_objective(2.0);
		assert!(a.better_than(b));
		assert!(!b.better_than(a));
		assert!(!a.better_than(a));
		assert_eq!(a.objective(), 1.0);
		assert_eq!(a.value(), -1.0);
	}

	#[test]
	fn test_worst_and_nan() {
		assert!(Fitness::from_objective(1e300).better_than(Fitness::worst()));
		assert!(!Fitness::from_objective(f64::NAN).better_than(Fitness::worst()));
		assert!(Fitness::worst().better_than(Fitness::from_objective(f64::NAN)));

		let mut v = vec![
			Fitness::from_objective(f64::NAN),
			Fitness::from_objective(3.0),
			Fitness::from_objective(-1.0),
		];
		v.sort_by(|a, b| a.rank(*b));
		assert_eq!(v[0].objective(), -1.0);
		assert_eq!(v[1].objective(), 3.0);
		assert!(v[2].objective().is_nan());
	}
}
