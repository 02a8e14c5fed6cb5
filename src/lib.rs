//! Generation of Gaussian random-walk (Brownian motion) trajectory datasets.
//!
//! A [Simulator] turns [Settings] and a caller-supplied random source into an
//! [Ensemble] of 2D trajectories on a shared time grid, which can be written as
//! a flat `particle,time,x,y` CSV table.
//!
//! ```rust,no_run
//! use brownsim::prelude::*;
//!
//! let simulator = Simulator::new(Settings::default()).unwrap();
//! let mut rng = simulator.settings().rng();
//! simulator.run(&mut rng).unwrap();
//! ```

pub mod data;
pub mod error;
pub mod settings;
pub mod simulator;

pub use crate::data::{Ensemble, Row, Trajectory};
pub use crate::settings::Settings;
pub use crate::simulator::{Simulator, TimeGrid};
pub use error::BrownianError;

pub mod prelude {
    pub use crate::data::{read_csv, Ensemble, Row, Trajectory};
    pub use crate::settings::Settings;
    pub use crate::simulator::{gaussian_walk, Simulator, TimeGrid};
    pub use crate::BrownianError;
}
