//! Generate the Brownian motion dataset.
//!
//! Usage: `brownian_motion [--settings FILE] [--particles N] [--grid-points N] [--seed S] [--output PATH]`
//!
//! Without arguments this writes 10 particles over a 1000-point grid on `[0, 1]`
//! to `data/brownian_motion.csv`. The `data/` directory must already exist.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use brownsim::{Settings, Simulator};

#[derive(Parser, Debug)]
#[command(name = "brownian_motion")]
#[command(about = "Simulate 2D Gaussian random walks and write them as a CSV table")]
struct Args {
    /// JSON file with run settings; flags below override its values
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of particles
    #[arg(long)]
    particles: Option<usize>,

    /// Number of points in the time grid over [start, end]
    #[arg(long = "grid-points")]
    grid_points: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl Args {
    fn into_settings(self) -> anyhow::Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::from_json_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(particles) = self.particles {
            settings = settings.with_particles(particles);
        }
        if let Some(grid_points) = self.grid_points {
            settings = settings.with_grid_points(grid_points);
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(output) = self.output {
            settings = settings.with_output(output);
        }
        Ok(settings)
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = Args::parse().into_settings()?;
    let simulator = Simulator::new(settings).context("invalid settings")?;
    let mut rng = simulator.settings().rng();

    let ensemble = simulator.run(&mut rng).with_context(|| {
        format!(
            "failed to write {}",
            simulator.settings().output.display()
        )
    })?;

    if let Some(msd) = ensemble.mean_squared_displacement() {
        if let Some(final_msd) = msd.iter().last() {
            info!(final_msd = *final_msd, "Mean squared displacement at end of grid");
        }
    }
    Ok(())
}
