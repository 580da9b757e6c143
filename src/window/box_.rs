use std::fmt;

use rand::{Rng, RngCore};

use super::{check_dimension, Window};
use crate::error::Error;
use crate::utils;

/// Lower and upper boundary of a box window along one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    lo: f64,
    hi: f64,
}
impl Bounds {
    pub fn new(lo: f64, hi: f64) -> Self {
        assert!(
            lo <= hi,
            "Lower bound {} should not exceed upper bound {}",
            lo,
            hi
        );
        Self { lo, hi }
    }
    pub fn lo(&self) -> f64 {
        self.lo
    }
    pub fn hi(&self) -> f64 {
        self.hi
    }
    /// Side length along this axis
    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }
    /// Midpoint of the interval
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }
    /// Whether `x` lies in the closed interval
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

/// Axis-aligned hyperrectangle in N dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxWindow {
    bounds: Vec<Bounds>,
}
impl BoxWindow {
    /// Create a box window from per-axis bounds
    pub fn new(bounds: Vec<Bounds>) -> Self {
        assert!(
            !bounds.is_empty(),
            "A box window needs at least one dimension"
        );
        Self { bounds }
    }
    /// Create a box window from raw `[lo, hi]` pairs, one per axis
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        Self::new(pairs.iter().map(|p| Bounds::new(p[0], p[1])).collect())
    }
    /// Create a box window with unit side lengths centered on `center`
    pub fn unit(center: &[f64]) -> Self {
        Self::new(
            center
                .iter()
                .map(|c| Bounds::new(c - 0.5, c + 0.5))
                .collect(),
        )
    }
    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }
    /// Length of the longest side
    pub fn extent(&self) -> f64 {
        self.bounds.iter().map(Bounds::length).fold(0.0, f64::max)
    }
    /// Per-axis midpoints
    pub fn center(&self) -> Vec<f64> {
        self.bounds.iter().map(Bounds::midpoint).collect()
    }
    /// Draw a single point uniformly at random; each coordinate lies in
    /// `[lo, hi)` of its axis
    pub fn sample_one(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|b| rng.gen::<f64>() * b.length() + b.lo())
            .collect()
    }
}

impl Window for BoxWindow {
    fn dimension(&self) -> usize {
        self.bounds.len()
    }
    fn contains(&self, point: &[f64]) -> Result<bool, Error> {
        check_dimension(self.dimension(), point)?;
        Ok(self.bounds.iter().zip(point).all(|(b, &x)| b.contains(x)))
    }
    fn volume(&self) -> f64 {
        self.bounds.iter().map(Bounds::length).product()
    }
    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Vec<f64>> {
        (0..n).map(|_| self.sample_one(rng)).collect()
    }
}

impl fmt::Display for BoxWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxWindow: ")?;
        for (i, b) in self.bounds.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(
                f,
                "[{}, {}]",
                utils::format_coord(b.lo()),
                utils::format_coord(b.hi())
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::random_number_generator;

    #[test]
    #[should_panic]
    fn reversed_bounds_are_rejected() {
        Bounds::new(1.0, 0.0);
    }

    #[test]
    #[should_panic]
    fn zero_dimensions_are_rejected() {
        BoxWindow::new(Vec::new());
    }

    #[test]
    fn dimension_counts_the_axes() {
        let window = BoxWindow::from_pairs(&[[0.0, 1.0], [0.0, 2.0], [0.0, 3.0]]);
        assert_eq!(window.dimension(), 3);
    }

    #[test]
    fn volume_is_the_product_of_side_lengths() {
        let window = BoxWindow::from_pairs(&[[0.0, 2.0], [-1.0, 1.0], [0.0, 0.5]]);
        assert_eq!(window.volume(), 2.0);
    }

    #[test]
    fn zero_length_side_gives_zero_volume() {
        let window = BoxWindow::from_pairs(&[[0.0, 1.0], [2.0, 2.0]]);
        assert_eq!(window.volume(), 0.0);
    }

    #[test]
    fn extent_is_the_longest_side() {
        let window = BoxWindow::from_pairs(&[[0.0, 2.0], [-3.0, 1.0], [0.0, 0.5]]);
        assert_eq!(window.extent(), 4.0);
    }

    #[test]
    fn center_is_the_per_axis_midpoint() {
        let window = BoxWindow::from_pairs(&[[0.0, 2.0], [-1.0, 0.0]]);
        assert_eq!(window.center(), vec![1.0, -0.5]);
    }

    #[test]
    fn boundary_points_are_contained() {
        let window = BoxWindow::from_pairs(&[[0.0, 1.0], [0.0, 1.0]]);
        assert_eq!(window.contains(&[0.5, 0.5]), Ok(true));
        assert_eq!(window.contains(&[0.0, 1.0]), Ok(true));
        assert_eq!(window.contains(&[1.0, 1.0]), Ok(true));
        assert_eq!(window.contains(&[1.0001, 0.5]), Ok(false));
        assert_eq!(window.contains(&[-0.0001, 0.5]), Ok(false));
    }

    #[test]
    fn mismatched_point_dimension_is_an_error() {
        let window = BoxWindow::from_pairs(&[[0.0, 1.0], [0.0, 1.0]]);
        assert_eq!(
            window.contains(&[0.5, 0.5, 0.5]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn unit_box_has_unit_volume_and_closed_corners() {
        let window = BoxWindow::unit(&[0.0, 0.0]);
        assert_eq!(window.volume(), 1.0);
        assert_eq!(window.contains(&[0.0, 0.0]), Ok(true));
        assert_eq!(window.contains(&[-0.5, -0.5]), Ok(true));
        assert_eq!(window.contains(&[1.0, 1.0]), Ok(false));
    }

    #[test]
    fn unit_box_is_centered_on_its_argument() {
        let window = BoxWindow::unit(&[1.5, -2.0, 0.0]);
        assert_eq!(window.center(), vec![1.5, -2.0, 0.0]);
        assert_eq!(window.extent(), 1.0);
    }

    #[test]
    fn description_drops_whole_value_fractions() {
        let window = BoxWindow::from_pairs(&[[0.0, 1.0], [2.5, 3.0]]);
        assert_eq!(window.describe(), "BoxWindow: [0, 1] x [2.5, 3]");
    }

    #[test]
    fn single_axis_description_has_no_separator() {
        let window = BoxWindow::from_pairs(&[[-1.0, 1.0]]);
        assert_eq!(window.describe(), "BoxWindow: [-1, 1]");
    }

    #[test]
    fn samples_lie_in_the_half_open_intervals() {
        let window = BoxWindow::from_pairs(&[[0.0, 2.0], [-1.0, 1.0]]);
        let mut rng = random_number_generator(Some(7));
        let points = window.sample(100, &mut rng);
        assert_eq!(points.len(), 100);
        for point in &points {
            assert_eq!(point.len(), 2);
            assert!(0.0 <= point[0] && point[0] < 2.0);
            assert!(-1.0 <= point[1] && point[1] < 1.0);
        }
    }

    #[test]
    fn sampling_zero_points_gives_an_empty_set() {
        let window = BoxWindow::from_pairs(&[[0.0, 1.0]]);
        let mut rng = random_number_generator(Some(7));
        assert!(window.sample(0, &mut rng).is_empty());
    }
}
