use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::EvoError;
use crate::{Callback, Generation};

/// Records optimization progress via the per-generation callback
#[derive(Debug, Clone)]
pub struct OptimizationRecorder {
	/// Function name (used for CSV filename)
	function_name: String,
	/// Shared records storage
	records: Arc<Mutex<Vec<OptimizationRecord>>>,
	/// Best function value seen so far
	best_value: Arc<Mutex<Option<f64>>>,
}

/// A single generation record
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRecord {
	pub generation: usize,
	/// Best x found so far
	pub x: Vec<f64>,
	/// Best function result so far
	pub best_result: f64,
	/// Mean objective of the evaluated population
	pub mean_objective: f64,
	/// Whether this generation improved the best known result
	pub is_improvement: bool,
}

impl OptimizationRecorder {
	pub fn new(function_name: impl Into<String>) -> Self {
		Self {
			function_name: function_name.into(),
			records: Arc::new(Mutex::new(Vec::new())),
			best_value: Arc::new(Mutex::new(None)),
		}
	}

	/// Callback that appends one record per generation
	pub fn create_callback(&self) -> Callback<'static> {
		let records = self.records.clone();
		let best_value = self.best_value.clone();

		Box::new(move |generation: &Generation<'_>| {
			let is_improvement = {
				let mut best = best_value.lock();
				let improved = best.is_none_or(|b| generation.best_fun < b);
				if improved {
					*best = Some(generation.best_fun);
				}
				improved
			};

			let values: Vec<f64> =
				generation.population.iter().filter_map(|ind| ind.objective()).collect();
			let mean_objective = if values.is_empty() {
				f64::NAN
			} else {
				values.iter().sum::<f64>() / values.len() as f64
			};

			records.lock().push(OptimizationRecord {
				generation: generation.iter,
				x: generation.best_x.to_vec(),
				best_result: generation.best_fun,
				mean_objective,
				is_improvement,
			});
		})
	}

	/// Write all records to `<output_dir>/<function_name>.csv`
	pub fn save_to_csv(&self, output_dir: &Path) -> Result<PathBuf, EvoError> {
		create_dir_all(output_dir)?;
		let filename = output_dir.join(format!("{}.csv", self.function_name));
		let mut wtr = csv::Writer::from_path(&filename)?;

		let records = self.records.lock();
		let num_dimensions = records.first().map_or(0, |r| r.x.len());

		let mut header = vec!["generation".to_string()];
		header.extend((0..num_dimensions).map(|i| format!("x{}", i)));
		header.extend(["best_result", "mean_objective", "is_improvement"].map(String::from));
		wtr.write_record(&header)?;

		for record in records.iter() {
			let mut row = vec![record.generation.to_string()];
			row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
			row.push(format!("{:.16}", record.best_result));
			row.push(format!("{:.16}", record.mean_objective));
			row.push(record.is_improvement.to_string());
			wtr.write_record(&row)?;
		}
		wtr.flush()?;

		Ok(filename)
	}

	pub fn get_records(&self) -> Vec<OptimizationRecord> {
		self.records.lock().clone()
	}

	pub fn num_generations(&self) -> usize {
		self.records.lock().len()
	}

	pub fn clear(&self) {
		self.records.lock().clear();
		*self.best_value.lock() = None;
	}

	/// Best solution from the last recorded generation
	pub fn get_best_solution(&self) -> Option<(Vec<f64>, f64)> {
		self.records.lock().last().map(|r| (r.x.clone(), r.best_result))
	}
}
