use evopt::{GAConfigBuilder, genetic_algorithm};
use evopt_testfunctions::{gaussian_peak, get_function_bounds};

#[test]
fn test_ga_gaussian_peak() {
    let bounds = get_function_bounds("gaussian_peak").unwrap();
    for seed in 0..8 {
        let config = GAConfigBuilder::new().seed(100 + seed).build();
        let report = genetic_algorithm(&gaussian_peak, &bounds, config).unwrap();
        assert!(report.fun < -0.42, "seed {}: f = {}", seed, report.fun);
        assert!(report.fun > -0.4289);
        assert!((report.x[0] + 0.7071).abs() < 0.15, "seed {}: x = {}", seed, report.x);
        assert!(report.x[1].abs() < 0.15, "seed {}: x = {}", seed, report.x);
    }
}

#[test]
fn test_ga_gaussian_peak_maximum_by_negation() {
    // maximizing f is minimizing -f: the peak sits at (1/sqrt(2), 0)
    let neg = |x: &ndarray::Array1<f64>| -gaussian_peak(x);
    let config = GAConfigBuilder::new().seed(7).build();
    let report = genetic_algorithm(&neg, &[(-2.0, 2.0); 2], config).unwrap();
    assert!(report.fun < -0.42);
    assert!((report.x[0] - 0.7071).abs() < 0.15);
}
