//! Run configuration for the trajectory generator
//!
//! [Settings] holds every value that governs a run. The defaults reproduce the
//! reference dataset: 10 particles over a 1000-point grid on `[0, 1]` with
//! standard-normal steps, written to `data/brownian_motion.csv`.
//!
//! # Example
//!
//! ```rust
//! use brownsim::Settings;
//!
//! let settings = Settings::default()
//!     .with_particles(2)
//!     .with_grid_points(5)
//!     .with_seed(42);
//! assert!(settings.validate().is_ok());
//! ```

use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::BrownianError;

/// Number of particles simulated by default
pub const DEFAULT_PARTICLES: usize = 10;
/// Number of points in the default time grid
pub const DEFAULT_GRID_POINTS: usize = 1000;
/// Default location of the generated table
pub const DEFAULT_OUTPUT: &str = "data/brownian_motion.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Number of independent trajectories
    pub particles: usize,
    /// Number of samples in the time grid, endpoints included
    pub grid_points: usize,
    /// First time point
    pub start: f64,
    /// Last time point
    pub end: f64,
    /// Standard deviation of a single step
    pub step_sd: f64,
    /// Seed for the pseudorandom source; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Path of the CSV file to write
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: DEFAULT_PARTICLES,
            grid_points: DEFAULT_GRID_POINTS,
            start: 0.0,
            end: 1.0,
            step_sd: 1.0,
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BrownianError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    pub fn with_interval(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_step_sd(mut self, step_sd: f64) -> Self {
        self.step_sd = step_sd;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Check that the settings describe a run that can be generated.
    ///
    /// A zero particle count is accepted and produces a header-only table.
    pub fn validate(&self) -> Result<(), BrownianError> {
        if self.grid_points == 0 {
            return Err(BrownianError::InvalidSettings(
                "grid_points must be at least 1".to_string(),
            ));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(BrownianError::InvalidSettings(format!(
                "time interval must be finite, got [{}, {}]",
                self.start, self.end
            )));
        }
        if self.start > self.end {
            return Err(BrownianError::InvalidSettings(format!(
                "start ({}) must not exceed end ({})",
                self.start, self.end
            )));
        }
        if !self.step_sd.is_finite() || self.step_sd < 0.0 {
            return Err(BrownianError::InvalidSettings(format!(
                "step_sd must be finite and non-negative, got {}",
                self.step_sd
            )));
        }
        Ok(())
    }

    /// Build the pseudorandom source for this run
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
