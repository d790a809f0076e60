use ndarray::Array1;

use crate::fitness::Fitness;

/// A candidate solution: position, optional ES step sizes, cached objective value
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
	pub position: Array1<f64>,
	/// Per-dimension mutation step sizes, only used by the evolution strategy
	pub strategy: Option<Array1<f64>>,
	objective: Option<f64>,
}

impl Individual {
	pub fn new(position: Array1<f64>) -> Self {
		Self { position, strategy: None, objective: None }
	}

	pub fn with_strategy(position: Array1<f64>, strategy: Array1<f64>) -> Self {
		debug_assert_eq!(position.len(), strategy.len());
		Self { position, strategy: Some(strategy), objective: None }
	}

	pub fn dim(&self) -> usize {
		self.position.len()
	}

	/// Cached objective value, `None` until evaluated
	pub fn objective(&self) -> Option<f64> {
		self.objective
	}

	/// Selection fitness; unevaluated individuals rank worst
	pub fn fitness(&self) -> Fitness {
		self.objective.map(Fitness::from_objective).unwrap_or_else(Fitness::worst)
	}

	pub fn is_evaluated(&self) -> bool {
		self.objective.is_some()
	}

	pub(crate) fn set_objective(&mut self, value: f64) {
		self.objective = Some(value);
	}
}
