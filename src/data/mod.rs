//! In-memory representation of a generated dataset
//!
//! A [Trajectory] holds the positions of one particle, an [Ensemble] groups the
//! trajectories with their shared [TimeGrid] and exposes the flat table view as
//! a sequence of [Row]s, ordered by particle and then by time.

pub mod parser;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::simulator::TimeGrid;

pub use parser::{read_csv, HEADER};

/// One record of the output table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub particle: usize,
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

/// Positions of a single particle on the time grid
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    particle: usize,
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Trajectory {
    pub(crate) fn new(particle: usize, x: Array1<f64>, y: Array1<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Trajectory { particle, x, y }
    }

    /// 1-based particle id
    pub fn particle(&self) -> usize {
        self.particle
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Final position, if the trajectory has any points
    pub fn end(&self) -> Option<(f64, f64)> {
        let last = self.len().checked_sub(1)?;
        Some((self.x[last], self.y[last]))
    }
}

/// All trajectories of a run together with their time grid
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    time: TimeGrid,
    trajectories: Vec<Trajectory>,
}

impl Ensemble {
    pub(crate) fn new(time: TimeGrid, trajectories: Vec<Trajectory>) -> Self {
        Ensemble { time, trajectories }
    }

    pub fn time(&self) -> &TimeGrid {
        &self.time
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn particles(&self) -> usize {
        self.trajectories.len()
    }

    /// Number of rows in the flat table
    pub fn n_rows(&self) -> usize {
        self.particles() * self.time.len()
    }

    /// Iterate the table rows, particle blocks in order, time ascending within a block
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.trajectories.iter().flat_map(move |trajectory| {
            self.time.iter().enumerate().map(move |(i, time)| Row {
                particle: trajectory.particle,
                time,
                x: trajectory.x[i],
                y: trajectory.y[i],
            })
        })
    }

    /// Mean over particles of the squared distance from the origin, per time point.
    ///
    /// Returns `None` for an ensemble without particles. With steps of standard
    /// deviation `s` the expected value at index `k` is `2 k s^2`.
    pub fn mean_squared_displacement(&self) -> Option<Array1<f64>> {
        if self.trajectories.is_empty() {
            return None;
        }
        let mut msd = Array1::<f64>::zeros(self.time.len());
        for trajectory in &self.trajectories {
            msd += &trajectory.x.mapv(|v| v * v);
            msd += &trajectory.y.mapv(|v| v * v);
        }
        msd /= self.trajectories.len() as f64;
        Some(msd)
    }
}
