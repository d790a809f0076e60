//! Test function implementations organized by category
//!
//! - `unimodal`: single-optimum functions
//! - `multimodal`: functions with several local minima
//! - `one_dimensional`: scalar functions with closed-form derivatives

pub mod multimodal;
pub mod one_dimensional;
pub mod unimodal;

pub use multimodal::*;
pub use one_dimensional::*;
pub use unimodal::*;
