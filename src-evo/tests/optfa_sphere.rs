use evopt::{FAConfigBuilder, firefly_algorithm, run_recorded_firefly};
use evopt_testfunctions::sphere;

#[test]
fn test_fa_sphere_2d() {
    // default swarm: 20 fireflies, 100 generations over [-5.12, 5.12]^2
    let mut solved = 0;
    for seed in 0..10 {
        let config = FAConfigBuilder::new().seed(seed).build();
        let report = firefly_algorithm(&sphere, &[(-5.12, 5.12); 2], config).unwrap();
        assert!(report.fun < 2.0, "seed {}: f = {}", seed, report.fun);
        assert_eq!(report.history.len(), 100);
        assert_eq!(report.nfev, 20 + 100 * 20 + 1);
        assert!(report.history.windows(2).all(|w| w[1] <= w[0]));
        if report.fun < 1e-2 {
            solved += 1;
        }
    }
    assert!(solved >= 8, "only {} of 10 runs reached 1e-2", solved);
}

#[test]
fn test_fa_sphere_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let config = FAConfigBuilder::new().seed(9).generations(30).build();
    let (report, csv_path) =
        run_recorded_firefly("fa_sphere_2d", &sphere, &[(-5.12, 5.12); 2], config, dir.path())
            .unwrap();
    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.trim().lines().collect();
    assert_eq!(lines[0], "generation,x0,x1,best_result,mean_objective,is_improvement");
    assert_eq!(lines.len(), 31);
    assert!(report.fun <= report.history[0]);
}
