use std::fmt;
use std::io;

use pointcluster_geo::GeoError;

use crate::cluster::ClusterError;
use crate::impl_err;

/// Top-level error, wrapping the error of whichever submodule failed.
#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Cluster(ClusterError),
    Io(io::Error),
    /// Malformed input, with the line it was found on.
    Input(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Geo(err) => write!(f, "{err}"),
            Error::Cluster(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Input(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Geo(err) => Some(err),
            Error::Cluster(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Input(_) => None,
        }
    }
}

impl_err! {
    GeoError => Geo,
    ClusterError => Cluster,
    io::Error => Io,
}

#[cfg(test)]
mod test {
    use std::error::Error as _;
    use std::io;

    use pointcluster_geo::{Crs, GeoError, Point};

    use crate::Error;
    use crate::cluster::{ClusterError, GridCluster, PointFeature};

    fn cluster_plane() -> Result<usize, Error> {
        let features = [PointFeature::at(Point::new(0.0, 0.0, Crs::Cartesian)?)];
        let groups = GridCluster::new().crs(Crs::WebMercator).cluster(&features)?;
        Ok(groups.len())
    }

    #[test]
    fn submodule_errors_convert_with_question_mark() {
        let err = cluster_plane().expect_err("cartesian cannot reach web mercator");

        assert!(matches!(
            err,
            Error::Cluster(ClusterError::Geo(GeoError::Projection { .. }))
        ));
        assert_eq!(err.to_string(), "Cannot project from cartesian to EPSG:3857");
        assert!(err.source().is_some());
    }

    #[test]
    fn io_and_geo_errors_wrap() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "points.wkt"));
        assert_eq!(err.to_string(), "I/O error: points.wkt");

        let err: Error = Point::new(f64::NAN, 0.0, Crs::Wgs84).map(|_| ()).unwrap_err().into();
        assert!(matches!(err, Error::Geo(GeoError::InvalidCoordinate(_))));
    }
}
