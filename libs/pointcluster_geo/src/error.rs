use std::fmt;

use crate::Crs;

#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A coordinate was not finite, or could not be parsed.
    InvalidCoordinate(String),
    /// An update would leave a bounding box with `min > max`.
    InvalidBounds(String),
    /// No transform exists between the two systems, or it produced a non-finite result.
    Projection { from: Crs, to: Crs },
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {msg}"),
            GeoError::InvalidBounds(msg) => write!(f, "Invalid bounds: {msg}"),
            GeoError::Projection { from, to } => {
                write!(f, "Cannot project from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for GeoError {}
