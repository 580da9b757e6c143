pub mod error;
pub mod prelude;
pub mod rng;
pub mod utils;
pub mod window;

pub use error::Error;
pub use window::{BallWindow, Bounds, BoxWindow, Window};
