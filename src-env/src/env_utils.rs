//! Environment variable utilities for evopt
//!
//! Recorded runs and plots are written below the directory named by the
//! `EVOPT_DIR` environment variable.

use crate::constants::{DATA_GENERATED, EVOPT_DIR, RECORDS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "EVOPT_DIR environment variable is not set. Please set it to a writable directory (e.g., export EVOPT_DIR=$PWD)"
    )]
    EvoptDirNotSet,

    #[error("EVOPT_DIR points to a non-existent directory: {0}")]
    EvoptDirNotFound(PathBuf),

    #[error("Failed to create data_generated directory: {0}")]
    DataGeneratedCreationFailed(std::io::Error),
}

/// Get the EVOPT_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if EVOPT_DIR is not set or points to a non-existent directory.
pub fn get_evopt_dir() -> Result<PathBuf, EnvError> {
    let evopt_dir = env::var(EVOPT_DIR).map_err(|_| EnvError::EvoptDirNotSet)?;
    let path = PathBuf::from(evopt_dir);
    if !path.exists() {
        return Err(EnvError::EvoptDirNotFound(path));
    }
    Ok(path)
}

/// `base/data_generated/records`, created if missing
pub fn records_dir_in(base: &Path) -> Result<PathBuf, EnvError> {
    let records_dir = base.join(DATA_GENERATED).join(RECORDS);
    if !records_dir.exists() {
        std::fs::create_dir_all(&records_dir).map_err(EnvError::DataGeneratedCreationFailed)?;
    }
    Ok(records_dir)
}

/// Get the path to the data_generated directory, creating it if necessary
///
/// ```no_run
/// use evopt_env::env_utils::get_data_generated_dir;
///
/// let data_dir = get_data_generated_dir()?;
/// println!("Data directory: {}", data_dir.display());
/// # Ok::<(), evopt_env::env_utils::EnvError>(())
/// ```
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    let data_generated = get_evopt_dir()?.join(DATA_GENERATED);
    if !data_generated.exists() {
        std::fs::create_dir_all(&data_generated).map_err(EnvError::DataGeneratedCreationFailed)?;
    }
    Ok(data_generated)
}

/// Get the path to data_generated/records, creating it if necessary
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    records_dir_in(&get_evopt_dir()?)
}
