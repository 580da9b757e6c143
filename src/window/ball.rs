use std::f64::consts::PI;
use std::fmt;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, StandardNormal};

use super::{check_dimension, Window};
use crate::error::Error;
use crate::utils;

/// Closed hyperball in N dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct BallWindow {
    center: Vec<f64>,
    radius: f64,
}
impl BallWindow {
    /// Create a ball window from its center and a non-negative radius
    pub fn new(center: Vec<f64>, radius: f64) -> Self {
        assert!(
            !center.is_empty(),
            "A ball window needs at least one dimension"
        );
        assert!(radius >= 0.0, "Radius {} should be non-negative", radius);
        Self { center, radius }
    }
    pub fn center(&self) -> &[f64] {
        &self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    /// Draw a single point uniformly at random inside the ball
    pub fn sample_one(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let dim = self.dimension();
        let direction: Vec<f64> = (0..dim).map(|_| StandardNormal.sample(&mut *rng)).collect();
        let norm = direction.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm == 0.0 {
            return self.center.clone();
        }
        // u^(1/dim) scaling keeps the density uniform over the volume
        let r = self.radius * rng.gen::<f64>().powf(1.0 / dim as f64);
        self.center
            .iter()
            .zip(&direction)
            .map(|(c, d)| c + d * r / norm)
            .collect()
    }
}

impl Window for BallWindow {
    fn dimension(&self) -> usize {
        self.center.len()
    }
    fn contains(&self, point: &[f64]) -> Result<bool, Error> {
        check_dimension(self.dimension(), point)?;
        Ok(utils::distance_squared(&self.center, point) <= self.radius * self.radius)
    }
    fn volume(&self) -> f64 {
        let dim = self.dimension();
        let rn = self.radius.powi(dim as i32);
        if dim % 2 == 0 {
            let half = dim / 2;
            PI.powi(half as i32) * rn / utils::factorial(half)
        } else {
            let half = (dim - 1) / 2;
            PI.powi(half as i32) * 2f64.powi(dim as i32) * utils::factorial(half) * rn
                / utils::factorial(dim)
        }
    }
    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Vec<f64>> {
        (0..n).map(|_| self.sample_one(rng)).collect()
    }
}

impl fmt::Display for BallWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BallWindow: center: [")?;
        for (i, c) in self.center.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", utils::format_coord(*c))?;
        }
        write!(f, "] radius: {}", utils::format_coord(self.radius))
    }
}
