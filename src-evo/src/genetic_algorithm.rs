//! Generational genetic algorithm: tournament selection, arithmetic crossover,
//! Gaussian mutation, full replacement every generation.

use std::fmt;

use log::{debug, info};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{EvoError, check_positive, check_rate};
use crate::individual::Individual;
use crate::objective::Objective;
use crate::population::Population;
use crate::{Callback, Generation, make_rng};

/// Configuration for the genetic algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GAConfig {
	pub generations: usize,
	/// Ideally even; offspring come in pairs
	pub population_size: usize,
	/// Probability that a parent pair is blended, in [0,1]
	pub crossover_rate: f64,
	/// Per-coordinate mutation probability, in [0,1]
	pub mutation_rate: f64,
	/// Standard deviation of the Gaussian mutation noise
	pub mutation_sigma: f64,
	pub tournament_size: usize,
	pub seed: Option<u64>,
	/// Log progress every N generations (0 disables)
	pub report_every: usize,
}

impl Default for GAConfig {
	fn default() -> Self {
		Self {
			generations: 50,
			population_size: 50,
			crossover_rate: 0.8,
			mutation_rate: 0.02,
			mutation_sigma: 0.5,
			tournament_size: 3,
			seed: None,
			report_every: 25,
		}
	}
}

impl GAConfig {
	pub fn validate(&self) -> Result<(), EvoError> {
		check_positive("generations", self.generations)?;
		check_positive("population_size", self.population_size)?;
		check_positive("tournament_size", self.tournament_size)?;
		check_rate("crossover_rate", self.crossover_rate)?;
		check_rate("mutation_rate", self.mutation_rate)?;
		if !(self.mutation_sigma.is_finite() && self.mutation_sigma >= 0.0) {
			return Err(EvoError::invalid(format!(
				"mutation_sigma must be finite and non-negative, got {}",
				self.mutation_sigma
			)));
		}
		Ok(())
	}
}

/// Fluent builder for `GAConfig`
#[derive(Debug, Default)]
pub struct GAConfigBuilder {
	cfg: GAConfig,
}

impl GAConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: GAConfig::default() }
	}
	pub fn generations(mut self, v: usize) -> Self {
		self.cfg.generations = v;
		self
	}
	pub fn population_size(mut self, v: usize) -> Self {
		self.cfg.population_size = v;
		self
	}
	pub fn crossover_rate(mut self, v: f64) -> Self {
		self.cfg.crossover_rate = v;
		self
	}
	pub fn mutation_rate(mut self, v: f64) -> Self {
		self.cfg.mutation_rate = v;
		self
	}
	pub fn mutation_sigma(mut self, v: f64) -> Self {
		self.cfg.mutation_sigma = v;
		self
	}
	pub fn tournament_size(mut self, v: usize) -> Self {
		self.cfg.tournament_size = v;
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
	pub fn build(self) -> GAConfig {
		self.cfg
	}
}

/// Result of a GA run
#[derive(Clone)]
pub struct GAReport {
	/// Best position found over the whole run
	pub x: Array1<f64>,
	/// Objective re-evaluated at `x`
	pub fun: f64,
	/// Best objective so far after each generation
	pub history: Vec<f64>,
	pub nit: usize,
	pub nfev: usize,
	/// Last generation produced (not evaluated)
	pub population: Vec<Individual>,
}

impl fmt::Debug for GAReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GAReport")
			.field("x", &self.x.to_vec())
			.field("fun", &self.fun)
			.field("history", &format!("len={}", self.history.len()))
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("population", &format!("len={}", self.population.len()))
			.finish()
	}
}

/// Genetic algorithm optimizer
pub struct GeneticAlgorithm<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	bounds: Bounds,
	config: GAConfig,
	callback: Option<Callback<'a>>,
}

impl<'a, F> GeneticAlgorithm<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	pub fn new(func: &'a F, bounds: Bounds) -> Self {
		Self { func, bounds, config: GAConfig::default(), callback: None }
	}

	pub fn with_config(mut self, config: GAConfig) -> Self {
		self.config = config;
		self
	}

	/// Observe every generation after evaluation; cannot stop the run
	pub fn with_callback(mut self, cb: Callback<'a>) -> Self {
		self.callback = Some(cb);
		self
	}

	pub fn config_mut(&mut self) -> &mut GAConfig {
		&mut self.config
	}

	pub fn solve(&mut self) -> Result<GAReport, EvoError> {
		self.config.validate()?;
		let cfg = &self.config;
		let bounds = &self.bounds;

		debug!(
			"GA init: {} dimensions, population={}, generations={}, crossover_rate={:.3}, mutation_rate={:.3}, tournament={}",
			bounds.dim(),
			cfg.population_size,
			cfg.generations,
			cfg.crossover_rate,
			cfg.mutation_rate,
			cfg.tournament_size
		);

		let mut rng = make_rng(cfg.seed);
		let mut objective = Objective::new(self.func);
		let mut population = Population::random(cfg.population_size, bounds, &mut rng);

		let mut best: Option<Individual> = None;
		let mut history = Vec::with_capacity(cfg.generations);

		for iter in 1..=cfg.generations {
			population.evaluate(&mut objective);

			for ind in population.iter() {
				let improved = match &best {
					Some(b) => ind.fitness().better_than(b.fitness()),
					None => true,
				};
				if improved {
					best = Some(ind.clone());
				}
			}
			let Some(current_best) = best.as_ref() else {
				return Err(EvoError::invalid("empty population"));
			};
			let best_fun = current_best.fitness().objective();
			history.push(best_fun);

			if cfg.report_every > 0 && iter % cfg.report_every == 0 {
				info!("GA gen {:4}  best_f={:.5}", iter, best_fun);
			}

			if let Some(cb) = self.callback.as_mut() {
				cb(&Generation {
					iter,
					population: population.individuals(),
					best_x: &current_best.position,
					best_fun,
				});
			}

			population = population.next_generation(cfg, bounds, &mut rng);
		}

		let best = best.ok_or_else(|| EvoError::invalid("no generation was run"))?;
		let fun = objective.eval(&best.position);
		debug!("GA finished: {} generations, {} evaluations", cfg.generations, objective.nfev());

		Ok(GAReport {
			x: best.position,
			fun,
			history,
			nit: cfg.generations,
			nfev: objective.nfev(),
			population: population.into_individuals(),
		})
	}
}

/// Minimize `func` over `bounds` with a genetic algorithm
pub fn genetic_algorithm<F>(
	func: &F,
	bounds: &[(f64, f64)],
	config: GAConfig,
) -> Result<GAReport, EvoError>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let bounds = Bounds::new(bounds)?;
	GeneticAlgorithm::new(func, bounds).with_config(config).solve()
}
