//! Recording wrappers: run an engine and save one CSV row per generation

use std::path::{Path, PathBuf};

use ndarray::Array1;

use crate::error::EvoError;
use crate::optimization_recorder::OptimizationRecorder;
use crate::{
	Bounds, ESConfig, ESReport, EvolutionStrategy, FAConfig, FAReport, Firefly, GAConfig, GAReport,
	GeneticAlgorithm,
};

/// Run the genetic algorithm and write its trace to `<output_dir>/<function_name>.csv`
pub fn run_recorded_genetic_algorithm<F>(
	function_name: &str,
	func: &F,
	bounds: &[(f64, f64)],
	config: GAConfig,
	output_dir: &Path,
) -> Result<(GAReport, PathBuf), EvoError>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let recorder = OptimizationRecorder::new(function_name);
	let report = GeneticAlgorithm::new(func, Bounds::new(bounds)?)
		.with_config(config)
		.with_callback(recorder.create_callback())
		.solve()?;
	let csv_path = recorder.save_to_csv(output_dir)?;
	Ok((report, csv_path))
}

/// Run the evolution strategy and write its trace to `<output_dir>/<function_name>.csv`
pub fn run_recorded_evolution_strategy<F>(
	function_name: &str,
	func: &F,
	bounds: (f64, f64),
	dim: usize,
	config: ESConfig,
	output_dir: &Path,
) -> Result<(ESReport, PathBuf), EvoError>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let recorder = OptimizationRecorder::new(function_name);
	let report = EvolutionStrategy::new(func, Bounds::uniform(bounds.0, bounds.1, dim)?)
		.with_config(config)
		.with_callback(recorder.create_callback())
		.solve()?;
	let csv_path = recorder.save_to_csv(output_dir)?;
	Ok((report, csv_path))
}

/// Run the firefly algorithm and write its trace to `<output_dir>/<function_name>.csv`
pub fn run_recorded_firefly<F>(
	function_name: &str,
	func: &F,
	bounds: &[(f64, f64)],
	config: FAConfig,
	output_dir: &Path,
) -> Result<(FAReport, PathBuf), EvoError>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let recorder = OptimizationRecorder::new(function_name);
	let report = Firefly::new(func, Bounds::new(bounds)?)
		.with_config(config)
		.with_callback(recorder.create_callback())
		.solve()?;
	let csv_path = recorder.save_to_csv(output_dir)?;
	Ok((report, csv_path))
}
