pub mod grid;
pub mod walk;

use rand::Rng;
use rand_distr::Normal;
use tracing::{debug, info};

use crate::data::{Ensemble, Trajectory};
use crate::{BrownianError, Settings};

pub use grid::TimeGrid;
pub use walk::gaussian_walk;

/// Generator of independent 2D Brownian trajectories
///
/// The simulator owns validated [Settings], the shared [TimeGrid] and the step
/// distribution. Randomness is always supplied by the caller, so a seeded
/// generator gives a reproducible [Ensemble].
///
/// # Example
///
/// ```rust
/// use brownsim::prelude::*;
///
/// let settings = Settings::default().with_particles(2).with_grid_points(5).with_seed(1);
/// let simulator = Simulator::new(settings).unwrap();
/// let ensemble = simulator.generate(&mut simulator.settings().rng());
/// assert_eq!(ensemble.n_rows(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    settings: Settings,
    grid: TimeGrid,
    step: Normal<f64>,
}

impl Simulator {
    pub fn new(settings: Settings) -> Result<Self, BrownianError> {
        settings.validate()?;
        let grid = TimeGrid::linspace(settings.start, settings.end, settings.grid_points);
        let step = Normal::new(0.0, settings.step_sd)?;
        Ok(Self {
            settings,
            grid,
            step,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Simulate a single particle. All `x` steps are drawn before any `y` step.
    pub fn simulate_particle<R: Rng + ?Sized>(&self, particle: usize, rng: &mut R) -> Trajectory {
        let x = gaussian_walk(self.grid.len(), &self.step, rng);
        let y = gaussian_walk(self.grid.len(), &self.step, rng);
        Trajectory::new(particle, x, y)
    }

    /// Simulate every particle, ids `1..=particles`, in order
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Ensemble {
        info!(
            particles = self.settings.particles,
            grid_points = self.grid.len(),
            "Generating Brownian trajectories"
        );
        let trajectories = (1..=self.settings.particles)
            .map(|particle| {
                let trajectory = self.simulate_particle(particle, rng);
                if let Some((x_end, y_end)) = trajectory.end() {
                    debug!(particle, x_end, y_end, "Simulated particle");
                }
                trajectory
            })
            .collect();
        Ensemble::new(self.grid.clone(), trajectories)
    }

    /// Generate the ensemble and write it to the configured output path.
    ///
    /// The target directory must already exist; any existing file is truncated.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Ensemble, BrownianError> {
        let ensemble = self.generate(rng);
        ensemble.write_csv(&self.settings.output)?;
        Ok(ensemble)
    }
}
