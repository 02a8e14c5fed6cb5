use approx::assert_relative_eq;
use brownsim::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn simulator(particles: usize, grid_points: usize) -> Simulator {
    Simulator::new(
        Settings::default()
            .with_particles(particles)
            .with_grid_points(grid_points),
    )
    .unwrap()
}

#[test]
fn test_small_grid_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brownian_motion.csv");
    let simulator = Simulator::new(
        Settings::default()
            .with_particles(2)
            .with_grid_points(5)
            .with_output(&path),
    )
    .unwrap();

    simulator.run(&mut StdRng::seed_from_u64(42)).unwrap();
    let rows = read_csv(&path).unwrap();

    assert_eq!(rows.len(), 10);
    assert_eq!(
        rows.iter().map(|r| r.particle).collect::<Vec<_>>(),
        vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2]
    );
    for block in rows.chunks(5) {
        let pid = block[0].particle;
        assert_eq!(
            block[0],
            Row {
                particle: pid,
                time: 0.0,
                x: 0.0,
                y: 0.0
            }
        );
        assert_eq!(
            block.iter().map(|r| r.time).collect::<Vec<_>>(),
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        );
    }
}

#[test]
fn test_default_shape() {
    let simulator = Simulator::new(Settings::default()).unwrap();
    let ensemble = simulator.generate(&mut StdRng::seed_from_u64(0));

    assert_eq!(ensemble.particles(), 10);
    assert_eq!(ensemble.time().len(), 1000);
    assert_eq!(ensemble.n_rows(), 10_000);
    for trajectory in ensemble.trajectories() {
        assert_eq!(trajectory.x().len(), ensemble.time().len());
        assert_eq!(trajectory.y().len(), ensemble.time().len());
        assert_eq!(trajectory.x()[0], 0.0);
        assert_eq!(trajectory.y()[0], 0.0);
    }
}

#[test]
fn test_time_column_per_particle() {
    let ensemble = simulator(3, 1000).generate(&mut StdRng::seed_from_u64(1));
    let rows: Vec<Row> = ensemble.rows().collect();

    for block in rows.chunks(1000) {
        assert!(block.iter().all(|r| r.particle == block[0].particle));
        assert!(block.windows(2).all(|w| w[0].time <= w[1].time));
        assert_eq!(block[0].time, 0.0);
        assert_eq!(block[999].time, 1.0);
    }
}

#[test]
fn test_unseeded_runs_differ_but_share_shape() {
    let simulator = simulator(4, 200);
    let a = simulator.generate(&mut simulator.settings().rng());
    let b = simulator.generate(&mut simulator.settings().rng());

    assert_eq!(a.n_rows(), b.n_rows());
    assert_eq!(a.time(), b.time());
    for (ta, tb) in a.trajectories().iter().zip(b.trajectories()) {
        assert_eq!(ta.particle(), tb.particle());
        assert_eq!((ta.x()[0], ta.y()[0]), (tb.x()[0], tb.y()[0]));
    }
    assert_ne!(a, b);
}

#[test]
fn test_seeded_runs_are_identical() {
    let settings = Settings::default().with_particles(3).with_seed(1234);
    let simulator = Simulator::new(settings).unwrap();
    let a = simulator.generate(&mut simulator.settings().rng());
    let b = simulator.generate(&mut simulator.settings().rng());
    assert_eq!(a, b);
}

#[test]
fn test_mean_squared_displacement_grows_linearly() {
    let ensemble = simulator(2000, 101).generate(&mut StdRng::seed_from_u64(2024));
    let msd = ensemble.mean_squared_displacement().unwrap();

    assert_eq!(msd[0], 0.0);
    // Expected value at step k is 2k for standard-normal steps
    assert_relative_eq!(msd[100], 200.0, max_relative = 0.1);
    assert_relative_eq!(msd[50], 100.0, max_relative = 0.1);
}

#[test]
fn test_step_sd_scales_displacement() {
    let simulator = Simulator::new(
        Settings::default()
            .with_particles(2000)
            .with_grid_points(101)
            .with_step_sd(0.5),
    )
    .unwrap();
    let msd = simulator
        .generate(&mut StdRng::seed_from_u64(7))
        .mean_squared_displacement()
        .unwrap();
    assert_relative_eq!(msd[100], 50.0, max_relative = 0.1);
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let simulator = Simulator::new(
        Settings::default()
            .with_particles(1)
            .with_grid_points(3)
            .with_output(dir.path().join("data").join("brownian_motion.csv")),
    )
    .unwrap();

    let result = simulator.run(&mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(BrownianError::Io(_))));
}
