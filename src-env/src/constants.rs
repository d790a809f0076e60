/// Environment variable naming the directory that receives generated data
pub const EVOPT_DIR: &str = "EVOPT_DIR";

/// Subdirectory (below `EVOPT_DIR`) for generated files
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory (below `DATA_GENERATED`) for recorded optimization runs
pub const RECORDS: &str = "records";
