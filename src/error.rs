use std::fmt;

/// Error types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A point's coordinate count does not match the window's dimension
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension mismatch: window has {} dimensions, point has {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for Error {}
