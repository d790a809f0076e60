use rand::Rng;

use crate::individual::Individual;

/// Tournament selection: `k` indices drawn with replacement, fittest wins
pub(crate) fn tournament_select<'p, R: Rng + ?Sized>(
	pop: &'p [Individual],
	k: usize,
	rng: &mut R,
) -> &'p Individual {
	let idxs: Vec<usize> = (0..k).map(|_| rng.random_range(0..pop.len())).collect();
	tournament_winner(pop, &idxs)
}

/// Winner among the sampled indices; ties keep the first one drawn
pub(crate) fn tournament_winner<'p>(pop: &'p [Individual], idxs: &[usize]) -> &'p Individual {
	debug_assert!(!idxs.is_empty());
	let mut best = idxs[0];
	for &i in &idxs[1..] {
		if pop[i].fitness().better_than(pop[best].fitness()) {
			best = i;
		}
	}
	&pop[best]
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::Array1;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn evaluated(pos: f64, objective: f64) -> Individual {
		let mut ind = Individual::new(Array1::from(vec![pos]));
		ind.set_objective(objective);
		ind
	}

	fn population() -> Vec<Individual> {
		vec![evaluated(0.0, 4.0), evaluated(1.0, 0.5), evaluated(2.0, 9.0), evaluated(3.0, 4.0)]
	}

	#[test]
	fn test_lowest_objective_wins() {
		let pop = population();
		for idxs in [[1, 0, 2], [0, 2, 1], [2, 1, 1], [3, 1, 0]] {
			assert_eq!(tournament_winner(&pop, &idxs).position[0], 1.0);
		}
	}

	#[test]
	fn test_ties_keep_first_drawn() {
		let pop = population();
		assert_eq!(tournament_winner(&pop, &[3, 0, 2]).position[0], 3.0);
		assert_eq!(tournament_winner(&pop, &[0, 3, 2]).position[0], 0.0);
	}

	#[test]
	fn test_single_entrant_and_sampling() {
		let pop = population();
		let mut rng = StdRng::seed_from_u64(5);
		// k = 1 is uniform sampling; a large k almost always draws the best
		let mut wins = 0;
		for _ in 0..200 {
			let _ = tournament_select(&pop, 1, &mut rng);
			if tournament_select(&pop, 20, &mut rng).position[0] == 1.0 {
				wins += 1;
			}
		}
		assert!(wins > 190, "best individual won only {} of 200", wins);
	}
}
