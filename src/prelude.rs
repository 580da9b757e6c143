pub use super::error::Error;
pub use super::rng::random_number_generator;
pub use super::window::{BallWindow, Bounds, BoxWindow, Window};
