//! Population-based global optimizers for box-constrained objectives, using ndarray
//!
//! Three engines share the same data model (bounds, individuals, populations)
//! and a set of variation operators:
//! - a generational genetic algorithm: tournament selection, arithmetic
//!   crossover with one global weight, Gaussian mutation with a fixed rate;
//! - a self-adaptive evolution strategy: discrete recombination, log-normal
//!   per-dimension step sizes, (mu + lambda) survivor selection;
//! - a firefly algorithm: attraction toward brighter points with a decaying
//!   random walk.
//!
//! All minimize, run a fixed number of generations, keep the best point seen
//! over the whole run and return the best objective after every generation.
//! Runs are reproducible through `seed`.
//!
//! ```
//! use evopt::{genetic_algorithm, GAConfigBuilder};
//! use ndarray::Array1;
//!
//! let sphere = |x: &Array1<f64>| x.iter().map(|v| v * v).sum::<f64>();
//! let config = GAConfigBuilder::new().seed(42).build();
//! let report = genetic_algorithm(&sphere, &[(-5.12, 5.12); 2], config).unwrap();
//! assert_eq!(report.history.len(), 50);
//! ```

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod bounds;
pub mod error;
pub mod fitness;
pub mod individual;
pub mod objective;
pub mod population;

pub(crate) mod distinct_indices;
pub(crate) mod init_random;

pub(crate) mod crossover_arithmetic;
pub(crate) mod recombine_discrete;
pub(crate) mod select_tournament;

pub(crate) mod mutate_gaussian;
pub(crate) mod mutate_self_adaptive;

pub(crate) mod move_firefly;

pub mod evolution_strategy;
pub mod firefly;
pub mod genetic_algorithm;
pub mod optimization_recorder;
pub mod run_recorded;

pub use bounds::Bounds;
pub use error::EvoError;
pub use evolution_strategy::{
	ESConfig, ESConfigBuilder, ESReport, EvolutionStrategy, evolution_strategy,
};
pub use firefly::{FAConfig, FAConfigBuilder, FAReport, Firefly, firefly_algorithm};
pub use fitness::Fitness;
pub use genetic_algorithm::{
	GAConfig, GAConfigBuilder, GAReport, GeneticAlgorithm, genetic_algorithm,
};
pub use individual::Individual;
pub use objective::Objective;
pub use optimization_recorder::{OptimizationRecord, OptimizationRecorder};
pub use population::Population;
pub use run_recorded::{
	run_recorded_evolution_strategy, run_recorded_firefly, run_recorded_genetic_algorithm,
};

/// Snapshot handed to the per-generation callback
pub struct Generation<'a> {
	/// 1-based generation number
	pub iter: usize,
	/// Evaluated population of this generation
	pub population: &'a [Individual],
	/// Best position seen so far in the run
	pub best_x: &'a Array1<f64>,
	/// Best objective seen so far in the run
	pub best_fun: f64,
}

/// Per-generation observer
pub type Callback<'a> = Box<dyn FnMut(&Generation<'_>) + 'a>;

/// Seeded RNG, or one seeded from the thread RNG when `seed` is `None`
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(s) => StdRng::seed_from_u64(s),
		None => {
			let mut thread_rng = rand::rng();
			StdRng::from_rng(&mut thread_rng)
		}
	}
}
