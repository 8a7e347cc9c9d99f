//! The core's one fallible boundary: loading a binary image.

use std::fmt;
use std::io;

/// Failure to populate memory from a binary image.
#[derive(Debug)]
pub enum LoadError {
    /// The underlying file could not be opened or read.
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to load image: {err}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}
