//! Required structures to project between coordinate reference systems

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use geo::Coord;
use log::trace;

use crate::{Crs, EARTH_ECCENTRICITY, EARTH_RADIUS, GeoError, MAX_MERCATOR_LATITUDE};

/// Allows for projection of a value between two coordinate reference systems.
pub trait Project: Sized {
    /// Projects the value into `crs`, returning a new value.
    /// Projecting into the value's own system is the identity.
    ///
    /// Both Mercator systems clamp latitude to ±[`MAX_MERCATOR_LATITUDE`]
    /// first, so a WGS84 value beyond it does not survive a round trip: it
    /// comes back at the limit.
    ///
    /// ### Example
    /// ```rust
    /// use pointcluster_geo::{Crs, Point, Project};
    ///
    /// let moscow = Point::new(37.6173, 55.7558, Crs::Wgs84).unwrap();
    /// let projected = moscow.project_to(Crs::WebMercator).unwrap();
    /// assert_eq!(projected.crs(), Crs::WebMercator);
    /// ```
    fn project_to(&self, crs: Crs) -> Result<Self, GeoError>;
}

/// A forward / inverse pair between geographic degrees and a planar system.
pub trait Projection {
    /// Geographic (lng, lat) degrees into the projected plane.
    fn forward(geographic: Coord) -> Coord;

    /// The projected plane back into geographic (lng, lat) degrees.
    fn inverse(projected: Coord) -> Coord;
}

#[doc(hidden)]
pub mod projections {
    /// Spherical Mercator over a sphere of radius [`EARTH_RADIUS`](crate::EARTH_RADIUS).
    /// *Learn more [here](https://en.wikipedia.org/wiki/Web_Mercator_projection?useskin=vector).*
    pub struct WebMercator;

    /// Mercator over the WGS84 ellipsoid (EPSG:3395). The inverse has no closed
    /// form and is solved by fixed-point iteration on the latitude.
    pub struct EllipticalMercator;
}

#[doc(inline)]
pub use projections::EllipticalMercator;
#[doc(inline)]
pub use projections::WebMercator;

const INVERSE_TOLERANCE: f64 = 1e-12;
const INVERSE_MAX_ITERATIONS: usize = 15;

fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
}

impl Projection for WebMercator {
    fn forward(geographic: Coord) -> Coord {
        let lat = clamp_latitude(geographic.y).to_radians();

        Coord {
            x: geographic.x.to_radians() * EARTH_RADIUS,
            y: (FRAC_PI_4 + lat / 2.0).tan().ln() * EARTH_RADIUS,
        }
    }

    fn inverse(projected: Coord) -> Coord {
        Coord {
            x: (projected.x / EARTH_RADIUS).to_degrees(),
            y: (2.0 * (projected.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees(),
        }
    }
}

impl Projection for EllipticalMercator {
    fn forward(geographic: Coord) -> Coord {
        let lat = clamp_latitude(geographic.y).to_radians();
        let con = EARTH_ECCENTRICITY * lat.sin();
        let ts = (FRAC_PI_4 + lat / 2.0).tan()
            * ((1.0 - con) / (1.0 + con)).powf(EARTH_ECCENTRICITY / 2.0);

        Coord {
            x: geographic.x.to_radians() * EARTH_RADIUS,
            y: ts.ln() * EARTH_RADIUS,
        }
    }

    fn inverse(projected: Coord) -> Coord {
        let ts = (-projected.y / EARTH_RADIUS).exp();
        let mut lat = FRAC_PI_2 - 2.0 * ts.atan();

        for _ in 0..INVERSE_MAX_ITERATIONS {
            let con = EARTH_ECCENTRICITY * lat.sin();
            let next = FRAC_PI_2
                - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(EARTH_ECCENTRICITY / 2.0)).atan();

            let delta = next - lat;
            lat = next;
            if delta.abs() < INVERSE_TOLERANCE {
                break;
            }
        }

        Coord {
            x: (projected.x / EARTH_RADIUS).to_degrees(),
            y: lat.to_degrees(),
        }
    }
}

/// Moves a raw coordinate from `from` into `to`, pivoting through WGS84.
///
/// Fails with [`GeoError::Projection`] when either side is [`Crs::Cartesian`]
/// (and the two differ), or when the transform leaves the finite range.
pub fn project(coord: Coord, from: Crs, to: Crs) -> Result<Coord, GeoError> {
    if from == to {
        return Ok(coord);
    }

    let unsupported = GeoError::Projection { from, to };

    let geographic = match from {
        Crs::Wgs84 => coord,
        Crs::WebMercator => WebMercator::inverse(coord),
        Crs::EllipticalMercator => EllipticalMercator::inverse(coord),
        Crs::Cartesian => return Err(unsupported),
    };

    let projected = match to {
        Crs::Wgs84 => geographic,
        Crs::WebMercator => WebMercator::forward(geographic),
        Crs::EllipticalMercator => EllipticalMercator::forward(geographic),
        Crs::Cartesian => return Err(unsupported),
    };

    if !(projected.x.is_finite() && projected.y.is_finite()) {
        trace!("Projection {from} -> {to} of {coord:?} is not finite: {projected:?}");
        return Err(unsupported);
    }

    Ok(projected)
}
