//! Bounding box structure for defining rectangular areas

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use approx::relative_eq;
use geo::Coord;

use crate::project::{Project, project};
use crate::{Crs, GeoError, Point};

const BOUNDS_EPSILON: f64 = 1e-9;
const BOUNDS_MAX_RELATIVE: f64 = 1e-12;

/// An axis-aligned rectangle in a coordinate reference system.
///
/// The bounds are normalized on construction so `x_min <= x_max` and
/// `y_min <= y_max` always hold. Bounds are changed through the `with_*`
/// methods, which return a new box and reject updates that would invert
/// the ordering.
///
/// A box with zero width or height is valid. Under the strict overlap test
/// of [`BoundingBox::intersects`] such a box does not intersect itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    crs: Crs,
}

fn check_finite(value: f64, name: &str) -> Result<f64, GeoError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeoError::InvalidCoordinate(format!(
            "{name} must be finite. Given: {value}"
        )))
    }
}

impl BoundingBox {
    /// Creates the box spanned by two opposite corners, in any order.
    pub fn new(p1: Coord, p2: Coord, crs: Crs) -> Result<Self, GeoError> {
        for (value, name) in [(p1.x, "x"), (p1.y, "y"), (p2.x, "x"), (p2.y, "y")] {
            check_finite(value, name)?;
        }

        Ok(BoundingBox {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
            crs,
        })
    }

    /// Creates the box spanned by two points, in the system of `p1`.
    pub fn from_points(p1: &Point, p2: &Point) -> Result<Self, GeoError> {
        let p2 = p2.project_to(p1.crs())?;
        Self::new(p1.coord(), p2.coord(), p1.crs())
    }

    /// Parses `"xmin,ymin,xmax,ymax"` into a box in `crs`.
    pub fn parse_with_crs(value: &str, crs: Crs) -> Result<Self, GeoError> {
        let parts = value
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|_| {
                    GeoError::InvalidCoordinate(format!("Invalid bounding box value: {part:?}"))
                })
            })
            .collect::<Result<Vec<f64>, GeoError>>()?;

        let &[x_min, y_min, x_max, y_max] = parts.as_slice() else {
            return Err(GeoError::InvalidCoordinate(format!(
                "Bounding box must have 4 comma-separated values. Given: {}",
                parts.len()
            )));
        };

        Self::new(Coord { x: x_min, y: y_min }, Coord { x: x_max, y: y_max }, crs)
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn with_x_min(&self, value: f64) -> Result<Self, GeoError> {
        if !(check_finite(value, "x_min")? <= self.x_max) {
            return Err(GeoError::InvalidBounds(format!(
                "x_min ({value}) cannot be greater than x_max ({})",
                self.x_max
            )));
        }

        Ok(BoundingBox { x_min: value, ..*self })
    }

    pub fn with_y_min(&self, value: f64) -> Result<Self, GeoError> {
        if !(check_finite(value, "y_min")? <= self.y_max) {
            return Err(GeoError::InvalidBounds(format!(
                "y_min ({value}) cannot be greater than y_max ({})",
                self.y_max
            )));
        }

        Ok(BoundingBox { y_min: value, ..*self })
    }

    pub fn with_x_max(&self, value: f64) -> Result<Self, GeoError> {
        if !(check_finite(value, "x_max")? >= self.x_min) {
            return Err(GeoError::InvalidBounds(format!(
                "x_max ({value}) cannot be lower than x_min ({})",
                self.x_min
            )));
        }

        Ok(BoundingBox { x_max: value, ..*self })
    }

    pub fn with_y_max(&self, value: f64) -> Result<Self, GeoError> {
        if !(check_finite(value, "y_max")? >= self.y_min) {
            return Err(GeoError::InvalidBounds(format!(
                "y_max ({value}) cannot be lower than y_min ({})",
                self.y_min
            )));
        }

        Ok(BoundingBox { y_max: value, ..*self })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// The bounds as `[x_min, y_min, x_max, y_max]`. The array is a copy.
    pub fn coordinates(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// The lower-left corner.
    pub fn min_point(&self) -> Point {
        Point::from_coord_unchecked(Coord { x: self.x_min, y: self.y_min }, self.crs)
    }

    /// The upper-right corner.
    pub fn max_point(&self) -> Point {
        Point::from_coord_unchecked(Coord { x: self.x_max, y: self.y_max }, self.crs)
    }

    pub fn center(&self) -> Point {
        Point::from_coord_unchecked(
            Coord {
                x: self.x_min + self.width() / 2.0,
                y: self.y_min + self.height() / 2.0,
            },
            self.crs,
        )
    }

    /// Geographic equality: every bound matches within a small tolerance and
    /// both boxes share a reference system. Identical numbers in different
    /// systems are not equal.
    pub fn equals(&self, other: &BoundingBox) -> bool {
        self.coordinates()
            .iter()
            .zip(other.coordinates().iter())
            .all(|(lhs, rhs)| {
                relative_eq!(
                    *lhs,
                    *rhs,
                    epsilon = BOUNDS_EPSILON,
                    max_relative = BOUNDS_MAX_RELATIVE
                )
            })
            && self.crs == other.crs
    }

    /// True when the interiors overlap. `other` is projected into this box's
    /// system first; boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> Result<bool, GeoError> {
        let other = other.project_to(self.crs)?;

        Ok(self.x_max > other.x_min
            && self.x_min < other.x_max
            && self.y_max > other.y_min
            && self.y_min < other.y_max)
    }

    /// True when the point lies inside or on the border of the box.
    pub fn contains(&self, point: &Point) -> Result<bool, GeoError> {
        let (x, y) = point.project_to(self.crs)?.x_y();

        Ok(self.x_min <= x && self.x_max >= x && self.y_min <= y && self.y_max >= y)
    }

    /// The smallest box holding both this box and `point`.
    pub fn extend(&self, point: &Point) -> Result<Self, GeoError> {
        let (x, y) = point.project_to(self.crs)?.x_y();

        Ok(BoundingBox {
            x_min: self.x_min.min(x),
            y_min: self.y_min.min(y),
            x_max: self.x_max.max(x),
            y_max: self.y_max.max(y),
            crs: self.crs,
        })
    }
}

impl Project for BoundingBox {
    fn project_to(&self, crs: Crs) -> Result<Self, GeoError> {
        let p1 = project(Coord { x: self.x_min, y: self.y_min }, self.crs, crs)?;
        let p2 = project(Coord { x: self.x_max, y: self.y_max }, self.crs, crs)?;

        BoundingBox::new(p1, p2, crs)
    }
}

impl FromStr for BoundingBox {
    type Err = GeoError;

    /// Parses `"xmin,ymin,xmax,ymax"` as geographic (WGS84) bounds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoundingBox::parse_with_crs(s, Crs::Wgs84)
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BBOX({} {}, {} {}) [{}]",
            self.x_min, self.y_min, self.x_max, self.y_max, self.crs
        )
    }
}
