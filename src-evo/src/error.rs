//! Error type shared by the engines and the recording helpers

use evopt_env::EnvError;

/// Errors reported before a run starts (invalid arguments) or while writing records
#[derive(Debug, thiserror::Error)]
pub enum EvoError {
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error("bounds length mismatch: expected {expected} dimensions, found {found}")]
	BoundsLength { expected: usize, found: usize },

	#[error("bound[{index}] has upper < lower ({high} < {low})")]
	InvertedBound { index: usize, low: f64, high: f64 },

	#[error("bound[{index}] is not finite")]
	NonFiniteBound { index: usize },

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	#[error(transparent)]
	Env(#[from] EnvError),
}

impl EvoError {
	pub(crate) fn invalid(msg: impl Into<String>) -> Self {
		EvoError::InvalidArgument(msg.into())
	}
}

/// Reject a rate that is not a probability
pub(crate) fn check_rate(name: &str, value: f64) -> Result<(), EvoError> {
	if !(0.0..=1.0).contains(&value) {
		return Err(EvoError::invalid(format!("{} must be in [0, 1], got {}", name, value)));
	}
	Ok(())
}

/// Reject a count that must be strictly positive
pub(crate) fn check_positive(name: &str, value: usize) -> Result<(), EvoError> {
	if value == 0 {
		return Err(EvoError::invalid(format!("{} must be positive", name)));
	}
	Ok(())
}

/// Reject a real parameter that must be finite and non-negative
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<(), EvoError> {
	if !(value.is_finite() && value >= 0.0) {
		return Err(EvoError::invalid(format!(
			"{} must be finite and non-negative, got {}",
			name, value
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rate_checks() {
		assert!(check_rate("crossover_rate", 0.0).is_ok());
		assert!(check_rate("crossover_rate", 1.0).is_ok());
		assert!(matches!(check_rate("crossover_rate", 1.5), Err(EvoError::InvalidArgument(_))));
		assert!(matches!(check_rate("mutation_rate", f64::NAN), Err(EvoError::InvalidArgument(_))));
	}

	#[test]
	fn test_positive_check_message() {
		let err = check_positive("population_size", 0).unwrap_err();
		assert_eq!(err.to_string(), "invalid argument: population_size must be positive");
	}

	#[test]
	fn test_non_negative_check() {
		assert!(check_non_negative("gamma", 0.0).is_ok());
		assert!(check_non_negative("gamma", -0.1).is_err());
		assert!(check_non_negative("alpha", f64::INFINITY).is_err());
	}
}
