//! Objective functions for exercising the evopt optimizers
//!
//! Functions are organized by category:
//!
//! - **Unimodal**: single global optimum (sphere, rosenbrock, booth)
//! - **Multimodal**: several local minima (gaussian peak, rastrigin, ackley, himmelblau)
//! - **One dimensional**: scalar functions with closed-form derivatives, for Newton's method
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use evopt_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let bounds = get_function_bounds("gaussian_peak");
//! assert_eq!(bounds, Some(vec![(-2.0, 2.0); 2]));
//! let f = get_function("gaussian_peak").unwrap();
//! assert!(f(&Array1::from_vec(vec![-0.7071, 0.0])) < -0.42);
//! ```

use ndarray::Array1;
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Signature shared by every vector objective in this crate
pub type ObjectiveFn = fn(&Array1<f64>) -> f64;

/// Metadata for a test function: bounds, known minima and shape
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Look up a vector objective by name
pub fn get_function(function_name: &str) -> Option<ObjectiveFn> {
    let f: ObjectiveFn = match function_name {
        "sphere" => sphere,
        "quadratic" => quadratic,
        "rosenbrock" => rosenbrock,
        "booth" => booth,
        "gaussian_peak" => gaussian_peak,
        "rastrigin" => rastrigin,
        "ackley" => ackley,
        "himmelblau" => himmelblau,
        _ => return None,
    };
    Some(f)
}

/// Names accepted by `get_function`, sorted
pub fn function_names() -> Vec<String> {
    let mut names: Vec<String> = get_function_metadata().into_keys().collect();
    names.sort();
    names
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let entries = [
        FunctionMetadata {
            name: "sphere".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Sum of squares, N-dimensional".to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10],
        },
        FunctionMetadata {
            name: "quadratic".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Alias of sphere".to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10],
        },
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            bounds: vec![(-2.048, 2.048); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            description: "Curved valley, N-dimensional".to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10],
        },
        FunctionMetadata {
            name: "booth".to_string(),
            bounds: vec![(-10.0, 10.0); 2],
            global_minima: vec![(vec![1.0, 3.0], 0.0)],
            description: "2D plate-shaped function".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
        FunctionMetadata {
            name: "gaussian_peak".to_string(),
            bounds: vec![(-2.0, 2.0); 2],
            global_minima: vec![(
                vec![-std::f64::consts::FRAC_1_SQRT_2, 0.0],
                -1.0 / (2.0 * std::f64::consts::E).sqrt(),
            )],
            description: "x0 * exp(-(x0^2 + x1^2)), one well and one peak".to_string(),
            multimodal: true,
            dimensions: vec![2],
        },
        FunctionMetadata {
            name: "rastrigin".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Regular grid of local minima, N-dimensional".to_string(),
            multimodal: true,
            dimensions: vec![2, 5, 10],
        },
        FunctionMetadata {
            name: "ackley".to_string(),
            bounds: vec![(-32.768, 32.768); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "N-dimensional multimodal function".to_string(),
            multimodal: true,
            dimensions: vec![2, 5, 10],
        },
        FunctionMetadata {
            name: "himmelblau".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            global_minima: vec![
                (vec![3.0, 2.0], 0.0),
                (vec![-2.805118, 3.131312], 0.0),
                (vec![-3.779310, -3.283186], 0.0),
                (vec![3.584428, -1.848126], 0.0),
            ],
            description: "2D function with four equal minima".to_string(),
            multimodal: true,
            dimensions: vec![2],
        },
    ];

    entries
        .into_iter()
        .map(|meta| (meta.name.clone(), meta))
        .collect()
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}

/// Bounds for `function_name` in `dim` dimensions
/// Uses the first metadata bound for every axis, or `default_bounds` if the
/// function is unknown
pub fn get_function_bounds_vec(
    function_name: &str,
    dim: usize,
    default_bounds: (f64, f64),
) -> Vec<(f64, f64)> {
    let axis = get_function_bounds(function_name)
        .and_then(|b| b.first().copied())
        .unwrap_or(default_bounds);
    vec![axis; dim]
}
