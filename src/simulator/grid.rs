use ndarray::Array1;

/// Evenly spaced sample times shared by every particle
///
/// Built like `numpy.linspace`: the i-th point is `start + i * step` and the last
/// point is exactly `end`, so the grid always spans the full interval.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Array1<f64>,
}

impl TimeGrid {
    /// Create a grid of `points` values over `[start, end]`, endpoints included
    pub fn linspace(start: f64, end: f64, points: usize) -> Self {
        let times = match points {
            0 => Array1::zeros(0),
            1 => Array1::from_elem(1, start),
            n => {
                let step = (end - start) / (n - 1) as f64;
                Array1::from_shape_fn(n, |i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + i as f64 * step
                    }
                })
            }
        };
        TimeGrid { times }
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of increments between consecutive grid points
    pub fn steps(&self) -> usize {
        self.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }
}
