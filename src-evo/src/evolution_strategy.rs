//! Self-adaptive evolution strategy with a (mu + lambda) survivor pool

use std::fmt;

use log::{debug, info};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{EvoError, check_positive};
use crate::fitness::Fitness;
use crate::individual::Individual;
use crate::objective::Objective;
use crate::population::Population;
use crate::{Callback, Generation, make_rng};

/// Configuration for the evolution strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ESConfig {
	/// Survivors per generation
	pub mu: usize,
	/// Offspring per generation
	pub lambda: usize,
	pub generations: usize,
	/// Initial step sizes are drawn from `[0, initial_sigma)`
	pub initial_sigma: f64,
	pub seed: Option<u64>,
	/// Log progress every N generations (0 disables)
	pub report_every: usize,
}

impl Default for ESConfig {
	fn default() -> Self {
		Self {
			mu: 20,
			lambda: 100,
			generations: 100,
			initial_sigma: 0.5,
			seed: None,
			report_every: 10,
		}
	}
}

impl ESConfig {
	pub fn validate(&self) -> Result<(), EvoError> {
		check_positive("generations", self.generations)?;
		check_positive("mu", self.mu)?;
		check_positive("lambda", self.lambda)?;
		if self.mu < 2 {
			return Err(EvoError::invalid("mu must be at least 2 to draw two distinct parents"));
		}
		if self.lambda < 2 {
			return Err(EvoError::invalid("lambda must be at least 2"));
		}
		if !(self.initial_sigma.is_finite() && self.initial_sigma > 0.0) {
			return Err(EvoError::invalid(format!(
				"initial_sigma must be finite and positive, got {}",
				self.initial_sigma
			)));
		}
		Ok(())
	}
}

/// Fluent builder for `ESConfig`
#[derive(Debug, Default)]
pub struct ESConfigBuilder {
	cfg: ESConfig,
}

impl ESConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: ESConfig::default() }
	}
	pub fn mu(mut self, v: usize) -> Self {
		self.cfg.mu = v;
		self
	}
	pub fn lambda(mut self, v: usize) -> Self {
		self.cfg.lambda = v;
		self
	}
	pub fn generations(mut self, v: usize) -> Self {
		self.cfg.generations = v;
		self
	}
	pub fn initial_sigma(mut self, v: f64) -> Self {
		self.cfg.initial_sigma = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn report_every(mut self, v: usize) -> Self {
		self.cfg.report_every = v;
		self
	}
	pub fn build(self) -> ESConfig {
		self.cfg
	}
}

/// Result of an ES run
#[derive(Clone)]
pub struct ESReport {
	pub x: Array1<f64>,
	/// Objective re-evaluated at `x`
	pub fun: f64,
	/// Best objective so far after each generation, length = generations
	pub history: Vec<f64>,
	pub nit: usize,
	pub nfev: usize,
	/// Final survivors, best first
	pub population: Vec<Individual>,
}

impl fmt::Debug for ESReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ESReport")
			.field("x", &self.x.to_vec())
			.field("fun", &self.fun)
			.field("history", &format!("len={}", self.history.len()))
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("population", &format!("len={}", self.population.len()))
			.finish()
	}
}

/// Evolution strategy optimizer
pub struct EvolutionStrategy<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	bounds: Bounds,
	config: ESConfig,
	callback: Option<Callback<'a>>,
}

impl<'a, F> EvolutionStrategy<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	pub fn new(func: &'a F, bounds: Bounds) -> Self {
		Self { func, bounds, config: ESConfig::default(), callback: None }
	}

	pub fn with_config(mut self, config: ESConfig) -> Self {
		self.config = config;
		self
	}

	/// Observe every generation after survivor selection; cannot stop the run
	pub fn with_callback(mut self, cb: Callback<'a>) -> Self {
		self.callback = Some(cb);
		self
	}

	pub fn config_mut(&mut self) -> &mut ESConfig {
		&mut self.config
	}

	pub fn solve(&mut self) -> Result<ESReport, EvoError> {
		self.config.validate()?;
		let cfg = &self.config;
		let bounds = &self.bounds;

		debug!(
			"ES init: {} dimensions, mu={}, lambda={}, generations={}, initial_sigma={:.3}",
			bounds.dim(),
			cfg.mu,
			cfg.lambda,
			cfg.generations,
			cfg.initial_sigma
		);

		let mut rng = make_rng(cfg.seed);
		let mut objective = Objective::new(self.func);
		let mut population =
			Population::random_with_strategy(cfg.mu, bounds, cfg.initial_sigma, &mut rng);
		population.evaluate(&mut objective);

		let mut best_x: Option<Array1<f64>> = None;
		let mut best_fitness = Fitness::worst();
		let mut history = Vec::with_capacity(cfg.generations);

		for iter in 1..=cfg.generations {
			let offspring = population.spawn_self_adaptive(cfg.lambda, bounds, &mut rng)?;
			population = population.plus_selection(offspring, cfg.mu, &mut objective);

			let Some(leader) = population.individuals().first() else {
				return Err(EvoError::invalid("empty population"));
			};
			if best_x.is_none() || leader.fitness().better_than(best_fitness) {
				best_fitness = leader.fitness();
				best_x = Some(leader.position.clone());
			}
			let best_fun = best_fitness.objective();
			history.push(best_fun);

			if cfg.report_every > 0 && iter % cfg.report_every == 0 {
				info!("ES gen {}/{} | best_f={:.5}", iter, cfg.generations, best_fun);
			}

			if let (Some(cb), Some(x)) = (self.callback.as_mut(), best_x.as_ref()) {
				cb(&Generation { iter, population: population.individuals(), best_x: x, best_fun });
			}
		}

		let x = best_x.ok_or_else(|| EvoError::invalid("no generation was run"))?;
		let fun = objective.eval(&x);
		debug!("ES finished: {} generations, {} evaluations", cfg.generations, objective.nfev());

		Ok(ESReport {
			x,
			fun,
			history,
			nit: cfg.generations,
			nfev: objective.nfev(),
			population: population.into_individuals(),
		})
	}
}

/// Minimize `func` over `[low, high]^dim` with the evolution strategy
pub fn evolution_strategy<F>(
	func: &F,
	bounds: (f64, f64),
	dim: usize,
	config: ESConfig,
) -> Result<ESReport, EvoError>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let bounds = Bounds::uniform(bounds.0, bounds.1, dim)?;
	EvolutionStrategy::new(func, bounds).with_config(config).solve()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sphere(x: &Array1<f64>) -> f64 {
		x.iter().map(|v| v * v).sum()
	}

	#[test]
	fn test_rejects_invalid_config() {
		for cfg in [
			ESConfigBuilder::new().mu(0).build(),
			ESConfigBuilder::new().mu(1).build(),
			ESConfigBuilder::new().lambda(1).build(),
			ESConfigBuilder::new().generations(0).build(),
			ESConfigBuilder::new().initial_sigma(0.0).build(),
		] {
			assert!(matches!(
				evolution_strategy(&sphere, (-1.0, 1.0), 2, cfg),
				Err(EvoError::InvalidArgument(_))
			));
		}
		assert!(evolution_strategy(&sphere, (-1.0, 1.0), 0, ESConfig::default()).is_err());
		assert!(matches!(
			evolution_strategy(&sphere, (1.0, -1.0), 2, ESConfig::default()),
			Err(EvoError::InvertedBound { .. })
		));
	}

	#[test]
	fn test_report_shape_and_counts() {
		let cfg = ESConfigBuilder::new().seed(3).mu(4).lambda(10).generations(12).build();
		let r = evolution_strategy(&sphere, (-5.12, 5.12), 3, cfg).unwrap();
		assert_eq!(r.history.len(), 12);
		assert_eq!(r.population.len(), 4);
		// initial mu, lambda per generation, final re-evaluation
		assert_eq!(r.nfev, 4 + 12 * 10 + 1);
		assert_eq!(r.fun, *r.history.last().unwrap());
		// survivors sorted best first
		let objs: Vec<f64> = r.population.iter().map(|i| i.objective().unwrap()).collect();
		assert!(objs.windows(2).all(|w| w[0] <= w[1]));
	}

	#[test]
	fn test_same_seed_same_run() {
		let cfg = ESConfigBuilder::new().seed(77).mu(5).lambda(20).generations(15).build();
		let r1 = evolution_strategy(&sphere, (-5.12, 5.12), 2, cfg.clone()).unwrap();
		let r2 = evolution_strategy(&sphere, (-5.12, 5.12), 2, cfg).unwrap();
		assert_eq!(r1.x, r2.x);
		assert_eq!(r1.history, r2.history);
	}
}
