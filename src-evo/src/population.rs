//! Population manager: owns one generation and builds the next one

use ndarray::Array1;
use rand::Rng;

use crate::bounds::Bounds;
use crate::crossover_arithmetic::arithmetic_crossover;
use crate::distinct_indices::distinct_pair;
use crate::error::EvoError;
use crate::genetic_algorithm::GAConfig;
use crate::individual::Individual;
use crate::init_random::{init_random, init_random_with_strategy};
use crate::move_firefly::Attraction;
use crate::mutate_gaussian::gaussian_mutation;
use crate::mutate_self_adaptive::self_adaptive_mutation;
use crate::objective::Objective;
use crate::recombine_discrete::{Parent, discrete_recombination};
use crate::select_tournament::tournament_select;

#[derive(Debug, Clone, Default)]
pub struct Population {
	individuals: Vec<Individual>,
}

impl Population {
	pub fn new(individuals: Vec<Individual>) -> Self {
		Self { individuals }
	}

	/// Uniform random population without step sizes (GA)
	pub fn random<R: Rng + ?Sized>(size: usize, bounds: &Bounds, rng: &mut R) -> Self {
		Self::new(init_random(size, bounds, rng))
	}

	/// Uniform random population carrying step sizes in `[0, initial_sigma)` (ES)
	pub fn random_with_strategy<R: Rng + ?Sized>(
		size: usize,
		bounds: &Bounds,
		initial_sigma: f64,
		rng: &mut R,
	) -> Self {
		Self::new(init_random_with_strategy(size, bounds, initial_sigma, rng))
	}

	pub fn len(&self) -> usize {
		self.individuals.len()
	}

	pub fn is_empty(&self) -> bool {
		self.individuals.is_empty()
	}

	pub fn individuals(&self) -> &[Individual] {
		&self.individuals
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
		self.individuals.iter()
	}

	pub fn into_individuals(self) -> Vec<Individual> {
		self.individuals
	}

	/// Evaluate every individual without a cached objective value
	pub fn evaluate<F>(&mut self, objective: &mut Objective<'_, F>)
	where
		F: Fn(&Array1<f64>) -> f64,
	{
		for ind in self.individuals.iter_mut() {
			objective.evaluate(ind);
		}
	}

	/// Fittest individual; the first one wins ties
	pub fn best(&self) -> Option<&Individual> {
		let mut best: Option<&Individual> = None;
		for ind in &self.individuals {
			match best {
				Some(b) if !ind.fitness().better_than(b.fitness()) => {}
				_ => best = Some(ind),
			}
		}
		best
	}

	/// Mean objective over evaluated individuals
	pub fn mean_objective(&self) -> Option<f64> {
		let values: Vec<f64> = self.individuals.iter().filter_map(|i| i.objective()).collect();
		if values.is_empty() {
			None
		} else {
			Some(values.iter().sum::<f64>() / values.len() as f64)
		}
	}

	pub fn all_within(&self, bounds: &Bounds) -> bool {
		self.individuals.iter().all(|i| bounds.contains(&i.position))
	}

	/// GA generational replacement: offspring pairs from tournament selection,
	/// arithmetic crossover and Gaussian mutation, until the current size is reached.
	/// An odd size drops the second child of the last pair.
	pub fn next_generation<R: Rng + ?Sized>(
		&self,
		config: &GAConfig,
		bounds: &Bounds,
		rng: &mut R,
	) -> Population {
		let n = self.len();
		let mut next = Vec::with_capacity(n + 1);
		while next.len() < n {
			let p1 = tournament_select(&self.individuals, config.tournament_size, rng);
			let p2 = tournament_select(&self.individuals, config.tournament_size, rng);

			let (c1, c2) = arithmetic_crossover(
				&p1.position,
				&p2.position,
				config.crossover_rate,
				bounds,
				rng,
			);

			let c1 = gaussian_mutation(&c1, config.mutation_rate, config.mutation_sigma, bounds, rng);
			let c2 = gaussian_mutation(&c2, config.mutation_rate, config.mutation_sigma, bounds, rng);

			next.push(Individual::new(c1));
			next.push(Individual::new(c2));
		}
		next.truncate(n);
		Population::new(next)
	}

	/// ES offspring: `lambda` children, each from two distinct random parents,
	/// discrete recombination and self-adaptive mutation
	pub fn spawn_self_adaptive<R: Rng + ?Sized>(
		&self,
		lambda: usize,
		bounds: &Bounds,
		rng: &mut R,
	) -> Result<Vec<Individual>, EvoError> {
		if self.len() < 2 {
			return Err(EvoError::invalid("recombination needs at least two parents"));
		}
		let mut offspring = Vec::with_capacity(lambda);
		for _ in 0..lambda {
			let (a, b) = distinct_pair(self.len(), rng);
			let p1 = parent_parts(&self.individuals[a])?;
			let p2 = parent_parts(&self.individuals[b])?;

			let (x, sigma) = discrete_recombination(p1, p2, rng);
			let (x, sigma) = self_adaptive_mutation(&x, &sigma, bounds, rng);
			offspring.push(Individual::with_strategy(x, sigma));
		}
		Ok(offspring)
	}

	/// Plus selection: pool parents and offspring, evaluate the pool, keep the
	/// best `mu` in ascending objective order (stable on ties)
	pub fn plus_selection<F>(
		self,
		offspring: Vec<Individual>,
		mu: usize,
		objective: &mut Objective<'_, F>,
	) -> Population
	where
		F: Fn(&Array1<f64>) -> f64,
	{
		let mut pool = self.individuals;
		pool.extend(offspring);
		for ind in pool.iter_mut() {
			objective.evaluate(ind);
		}
		pool.sort_by(|a, b| a.fitness().rank(b.fitness()));
		pool.truncate(mu);
		Population::new(pool)
	}

	/// One firefly sweep, in index order
	///
	/// Each firefly moves toward every firefly brighter than it was at the
	/// start of its turn; fireflies earlier in the sweep have already moved.
	/// Every firefly is re-evaluated after its turn.
	pub(crate) fn fly<F, R>(
		&mut self,
		attraction: &Attraction,
		bounds: &Bounds,
		objective: &mut Objective<'_, F>,
		rng: &mut R,
	) where
		F: Fn(&Array1<f64>) -> f64,
		R: Rng + ?Sized,
	{
		for i in 0..self.individuals.len() {
			let own = self.individuals[i].fitness();
			let mut x = self.individuals[i].position.clone();
			for other in &self.individuals {
				if other.fitness().better_than(own) {
					x = attraction.step(&x, &other.position, bounds, rng);
				}
			}
			self.individuals[i] = Individual::new(x);
			objective.evaluate(&mut self.individuals[i]);
		}
	}
}

fn parent_parts(ind: &Individual) -> Result<Parent<'_>, EvoError> {
	ind.strategy
		.as_ref()
		.map(|s| (&ind.position, s))
		.ok_or_else(|| EvoError::invalid("evolution strategy parent without step sizes"))
}
