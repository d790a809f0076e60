//! Environment utilities and constants shared by the evopt crates

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
