use std::fmt;

/// Result type for traceview-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the rendering layer
#[derive(Debug)]
pub enum Error {
    /// The named display region does not exist in the page
    RegionNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RegionNotFound(id) => write!(f, "display region not found: {}", id),
        }
    }
}

impl std::error::Error for Error {}
