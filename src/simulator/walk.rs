use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Gaussian random walk of `points` positions starting at the origin.
///
/// The first position is `0.0`; every following position adds one independent
/// draw from `step` to the previous one, so `points - 1` samples are consumed
/// from `rng`.
pub fn gaussian_walk<R: Rng + ?Sized>(
    points: usize,
    step: &Normal<f64>,
    rng: &mut R,
) -> Array1<f64> {
    let mut walk = Array1::zeros(points);
    let mut position = 0.0;
    for i in 1..points {
        position += step.sample(rng);
        walk[i] = position;
    }
    walk
}
