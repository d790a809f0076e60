//! Firefly algorithm: every firefly drifts toward the brighter ones, with a
//! random walk that shrinks each generation.
//!
//! Brightness is `1 / (1 + f)`; comparisons go through `Fitness`, which orders
//! points the same way wherever `f > -1` and stays well defined below it.

use std::fmt;

use log::{debug, info};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{EvoError, check_non_negative, check_positive, check_rate};
use crate::fitness::Fitness;
use crate::individual::Individual;
use crate::move_firefly::Attraction;
use crate::objective::Objective;
use crate::population::Population;
use crate::{Callback, Generation, make_rng};

/// Configuration for the firefly algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FAConfig {
	pub n_fireflies: usize,
	pub generations: usize,
	/// Initial random walk amplitude
	pub alpha: f64,
	/// `alpha` is multiplied by this after every generation
	pub alpha_decay: f64,
	/// Attraction at zero distance
	pub beta0: f64,
	/// Light absorption
	pub gamma: f64,
	/// Walk width as a fraction of each dimension's range
	pub walk_scale: f64,
	pub seed: Option<u64>,
	/// Log progress every N generations (0 disables)
	pub report_every: usize,
}

impl Default for FAConfig {
	fn default() -> Self {
		Self {
			n_fireflies: 20,
			generations: 100,
			alpha: 0.2,
			alpha_decay: 0.98,
			beta0: 1.0,
			gamma: 0.01,
			walk_scale: 0.05,
			seed: None,
			report_every: 10,
		}
	}
}

impl FAConfig {
	pub fn validate(&self) -> Result<(), EvoError> {
		check_positive("n_fireflies", self.n_fireflies)?;
		check_positive("generations", self.generations)?;
		check_non_negative("alpha", self.alpha)?;
		check_rate("alpha_decay", self.alpha_decay)?;
		check_non_negative("beta0", self.beta0)?;
		check_non_negative("gamma", self.gamma)?;
		check_non_negative("walk_scale", self.walk_scale)?;
		Ok(())
	}
}

/// Fluent builder for `FAConfig`
#[derive(Debug, Default)]
pub struct FAConfigBuilder {
	cfg: FAConfig,
}

impl FAConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: FAConfig::default() }
	}
	pub fn n_fireflies(mut self, v: usize) -> Self {
		self.cfg.n_fireflies = v;
		self
	}
	pub fn generations(mut self, v: usize) -> Self {
		self.cfg.generations = v;
		self
	}
	pub fn alpha(mut self, v: f64) -> Self {
		self.cfg.alpha = v;
		self
	}
	pub fn alpha_decay(mut self, v: f64) -> Self {
		self.cfg.alpha_decay = v;
		self
	}
	pub fn beta0(mut self, v: f64) -> Self {
		self.cfg.beta0 = v;
		self
	}
	pub fn gamma(mut self, v: f64) -> Self {
		self.cfg.gamma = v;
		self
	}
	pub fn walk_scale(mut self, v: f64) -> Self {
		self.cfg.walk_scale = v;
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
	pub fn build(self) -> FAConfig {
		self.cfg
	}
}

/// Result of a firefly run
#[derive(Clone)]
pub struct FAReport {
	pub x: Array1<f64>,
	/// Objective re-evaluated at `x`
	pub fun: f64,
	/// Best objective so far after each generation
	pub history: Vec<f64>,
	pub nit: usize,
	pub nfev: usize,
	/// Final swarm, evaluated
	pub population: Vec<Individual>,
}

impl fmt::Debug for FAReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FAReport")
			.field("x", &self.x.to_vec())
			.field("fun", &self.fun)
			.field("history", &format!("len={}", self.history.len()))
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("population", &format!("len={}", self.population.len()))
			.finish()
	}
}

/// Firefly optimizer
pub struct Firefly<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	bounds: Bounds,
	config: FAConfig,
	callback: Option<Callback<'a>>,
}

impl<'a, F> Firefly<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	pub fn new(func: &'a F, bounds: Bounds) -> Self {
		Self { func, bounds, config: FAConfig::default(), callback: None }
	}

	pub fn with_config(mut self, config: FAConfig) -> Self {
		self.config = config;
		self
	}

	/// Observe every generation after the sweep; cannot stop the run
	pub fn with_callback(mut self, cb: Callback<'a>) -> Self {
		self.callback = Some(cb);
		self
	}

	pub fn config_mut(&mut self) -> &mut FAConfig {
		&mut self.config
	}

	pub fn solve(&mut self) -> Result<FAReport, EvoError> {
		self.config.validate()?;
		let cfg = &self.config;
		let bounds = &self.bounds;

		debug!(
			"FA init: {} dimensions, fireflies={}, generations={}, alpha={:.3}, beta0={:.3}, gamma={:.4}",
			bounds.dim(),
			cfg.n_fireflies,
			cfg.generations,
			cfg.alpha,
			cfg.beta0,
			cfg.gamma
		);

		let mut rng = make_rng(cfg.seed);
		let mut objective = Objective::new(self.func);
		let mut swarm = Population::random(cfg.n_fireflies, bounds, &mut rng);
		swarm.evaluate(&mut objective);

		let mut attraction = Attraction {
			beta0: cfg.beta0,
			gamma: cfg.gamma,
			alpha: cfg.alpha,
			walk: (bounds.upper() - bounds.lower()) * cfg.walk_scale,
		};

		let mut best_x: Option<Array1<f64>> = None;
		let mut best_fitness = Fitness::worst();
		let mut history = Vec::with_capacity(cfg.generations);

		for iter in 1..=cfg.generations {
			swarm.fly(&attraction, bounds, &mut objective, &mut rng);

			let Some(leader) = swarm.best() else {
				return Err(EvoError::invalid("empty swarm"));
			};
			if best_x.is_none() || leader.fitness().better_than(best_fitness) {
				best_fitness = leader.fitness();
				best_x = Some(leader.position.clone());
			}
			let best_fun = best_fitness.objective();
			history.push(best_fun);

			if cfg.report_every > 0 && iter % cfg.report_every == 0 {
				info!(
					"FA gen {}/{} | best_f={:.5} alpha={:.4}",
					iter, cfg.generations, best_fun, attraction.alpha
				);
			}

			if let (Some(cb), Some(x)) = (self.callback.as_mut(), best_x.as_ref()) {
				cb(&Generation { iter, population: swarm.individuals(), best_x: x, best_fun });
			}

			attraction.alpha *= cfg.alpha_decay;
		}

		let x = best_x.ok_or_else(|| EvoError::invalid("no generation was run"))?;
		let fun = objective.eval(&x);
		debug!("FA finished: {} generations, {} evaluations", cfg.generations, objective.nfev());

		Ok(FAReport {
			x,
			fun,
			history,
			nit: cfg.generations,
			nfev: objective.nfev(),
			population: swarm.into_individuals(),
		})
	}
}

/// Minimize `func` over `bounds` with the firefly algorithm
pub fn firefly_algorithm<F>(
	func: &F,
	bounds: &[(f64, f64)],
	config: FAConfig,
) -> Result<FAReport, EvoError>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let bounds = Bounds::new(bounds)?;
	Firefly::new(func, bounds).with_config(config).solve()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sphere(x: &Array1<f64>) -> f64 {
		x.iter().map(|v| v * v).sum()
	}

	#[test]
	fn test_rejects_invalid_config() {
		let b = [(-1.0, 1.0)];
		for cfg in [
			FAConfigBuilder::new().n_fireflies(0).build(),
			FAConfigBuilder::new().generations(0).build(),
			FAConfigBuilder::new().alpha(-0.1).build(),
			FAConfigBuilder::new().alpha_decay(1.5).build(),
			FAConfigBuilder::new().gamma(f64::NAN).build(),
		] {
			assert!(matches!(firefly_algorithm(&sphere, &b, cfg), Err(EvoError::InvalidArgument(_))));
		}
	}

	#[test]
	fn test_report_shape_and_counts() {
		let cfg = FAConfigBuilder::new().seed(5).n_fireflies(6).generations(9).build();
		let r = firefly_algorithm(&sphere, &[(-5.12, 5.12); 3], cfg).unwrap();
		assert_eq!(r.history.len(), 9);
		assert_eq!(r.population.len(), 6);
		// initial swarm, one evaluation per firefly per generation, final re-evaluation
		assert_eq!(r.nfev, 6 + 9 * 6 + 1);
		assert_eq!(r.fun, *r.history.last().unwrap());
		assert!(r.history.windows(2).all(|w| w[1] <= w[0]));
	}

	#[test]
	fn test_same_seed_same_run() {
		let cfg = FAConfigBuilder::new().seed(21).generations(20).build();
		let r1 = firefly_algorithm(&sphere, &[(-2.0, 2.0); 2], cfg.clone()).unwrap();
		let r2 = firefly_algorithm(&sphere, &[(-2.0, 2.0); 2], cfg).unwrap();
		assert_eq!(r1.x, r2.x);
		assert_eq!(r1.history, r2.history);
	}

	#[test]
	fn test_single_firefly_only_stays() {
		// a lone firefly has nobody to follow and never moves
		let cfg = FAConfigBuilder::new().seed(2).n_fireflies(1).generations(5).build();
		let r = firefly_algorithm(&sphere, &[(-1.0, 1.0); 2], cfg).unwrap();
		assert!(r.history.iter().all(|&h| h == r.history[0]));
	}

	#[test]
	fn test_config_json_defaults() {
		let cfg: FAConfig = serde_json::from_str(r#"{"gamma": 0.5}"#).unwrap();
		assert_eq!(cfg.gamma, 0.5);
		assert_eq!(cfg.n_fireflies, 20);
		assert_eq!(cfg.alpha_decay, 0.98);
	}
}
