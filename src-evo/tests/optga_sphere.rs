use evopt::{GAConfigBuilder, genetic_algorithm, run_recorded_genetic_algorithm};
use evopt_testfunctions::sphere;

#[test]
fn test_ga_sphere_2d() {
    // pop 50, 50 generations, crossover 0.8, mutation 0.02 over [-5.12, 5.12]^2
    let b2 = vec![(-5.12, 5.12); 2];
    for seed in 0..8 {
        let c2 = GAConfigBuilder::new()
            .seed(seed)
            .generations(50)
            .population_size(50)
            .crossover_rate(0.8)
            .mutation_rate(0.02)
            .build();
        let report = genetic_algorithm(&sphere, &b2, c2).unwrap();
        assert!(report.fun < 1e-2, "seed {}: f = {}", seed, report.fun);
        assert!(report.x.iter().all(|v| v.abs() < 0.2), "seed {}: x = {}", seed, report.x);
        assert_eq!(report.history.len(), 50);
        assert_eq!(*report.history.last().unwrap(), report.fun);
    }
}

#[test]
fn test_ga_sphere_5d() {
    let b5 = vec![(-5.12, 5.12); 5];
    let c5 = GAConfigBuilder::new()
        .seed(31)
        .generations(100)
        .population_size(60)
        .build();
    let report = genetic_algorithm(&sphere, &b5, c5).unwrap();
    assert!(report.fun < 0.5, "f = {}", report.fun);
    assert!(report.history[0] >= report.fun);
}

#[test]
fn test_ga_sphere_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let config = GAConfigBuilder::new().seed(30).build();
    let (report, csv_path) = run_recorded_genetic_algorithm(
        "ga_sphere_2d",
        &sphere,
        &[(-5.12, 5.12); 2],
        config,
        dir.path(),
    )
    .unwrap();
    assert!(report.fun < 1e-2);

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let rows: Vec<&str> = content.trim().lines().skip(1).collect();
    assert_eq!(rows.len(), 50);
    // best_result column never increases
    let best: Vec<f64> = rows.iter().map(|r| r.split(',').nth(3).unwrap().parse().unwrap()).collect();
    assert!(best.windows(2).all(|w| w[1] <= w[0]));
}
