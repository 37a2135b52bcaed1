use std::fmt;

use pointcluster_geo::GeoError;

#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A size, resolution or configuration value out of range or unparseable.
    InvalidParameter(String),
    /// A centroid could not be brought into the working system.
    Geo(GeoError),
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterError::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            ClusterError::Geo(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClusterError::Geo(err) => Some(err),
            ClusterError::InvalidParameter(_) => None,
        }
    }
}

impl From<GeoError> for ClusterError {
    fn from(value: GeoError) -> Self {
        ClusterError::Geo(value)
    }
}
