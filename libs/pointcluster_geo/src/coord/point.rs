use std::fmt::{Debug, Display, Formatter};

use geo::Coord;

use crate::project::{Project, project};
use crate::{Crs, GeoError};

/// `Point`
/// A coordinate pair tagged with the reference system it is expressed in.
///
/// Both ordinates are always finite. Points are immutable: projecting one
/// yields a new point. Projecting into either Mercator system clamps latitude
/// to ±[`MAX_MERCATOR_LATITUDE`](crate::MAX_MERCATOR_LATITUDE).
///
/// ```rust
/// use pointcluster_geo::{Crs, Point};
///
/// let point = Point::new(150.839039, 59.549667, Crs::Wgs84).unwrap();
/// println!("Position: {}", point);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
    position: Coord,
    crs: Crs,
}

impl Point {
    /// Constructs a new `Point`, rejecting non-finite ordinates.
    pub fn new(x: f64, y: f64, crs: Crs) -> Result<Self, GeoError> {
        Self::from_coord(Coord { x, y }, crs)
    }

    pub fn from_coord(position: Coord, crs: Crs) -> Result<Self, GeoError> {
        if !(position.x.is_finite() && position.y.is_finite()) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Point ordinates must be finite. Given: ({}, {})",
                position.x, position.y
            )));
        }

        Ok(Self::from_coord_unchecked(position, crs))
    }

    /// Caller guarantees both ordinates are finite.
    pub(crate) fn from_coord_unchecked(position: Coord, crs: Crs) -> Self {
        Point { position, crs }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn coord(&self) -> Coord {
        self.position
    }

    /// Returns an `(x, y)` pair
    pub fn x_y(&self) -> (f64, f64) {
        (self.position.x, self.position.y)
    }

    /// Straight-line distance in the units of this point's system, after
    /// projecting `other` into it.
    pub fn euclidean_distance(&self, other: &Point) -> Result<f64, GeoError> {
        let other = other.project_to(self.crs)?;
        Ok((self.position.x - other.position.x).hypot(self.position.y - other.position.y))
    }
}

impl Project for Point {
    fn project_to(&self, crs: Crs) -> Result<Self, GeoError> {
        let position = project(self.position, self.crs, crs)?;
        Ok(Point::from_coord_unchecked(position, crs))
    }
}

impl From<Point> for geo::Point {
    fn from(value: Point) -> Self {
        geo::Point(value.position)
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {}) [{}]", self.position.x, self.position.y, self.crs)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}
