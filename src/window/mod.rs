pub mod ball;
pub mod box_;

pub use ball::BallWindow;
pub use box_::{Bounds, BoxWindow};

use std::fmt;

use rand::RngCore;

use crate::error::Error;

/// A bounded region of N-dimensional space that points can be tested
/// against and sampled from.
pub trait Window: fmt::Display {
    /// Number of spatial dimensions, fixed at construction
    fn dimension(&self) -> usize;
    /// Whether a point lies inside the window, boundary included
    fn contains(&self, point: &[f64]) -> Result<bool, Error>;
    /// N-dimensional volume of the window
    fn volume(&self) -> f64;
    /// Draw `n` points uniformly at random from the window
    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Vec<f64>>;
    /// Textual rendering of the window geometry
    fn describe(&self) -> String {
        self.to_string()
    }
}

pub(crate) fn check_dimension(expected: usize, point: &[f64]) -> Result<(), Error> {
    if point.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            found: point.len(),
        });
    }
    Ok(())
}
