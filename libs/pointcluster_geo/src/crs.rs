//! Known coordinate reference systems.

use strum::{Display, EnumIter, EnumString};

/// A coordinate reference system a [`Point`](crate::Point) can be expressed in.
///
/// Parsing accepts the EPSG identifier as well as the short aliases, and is
/// case-insensitive. `Display` renders the canonical identifier.
///
/// ```rust
/// use pointcluster_geo::Crs;
///
/// let crs: Crs = "webMercator".parse().unwrap();
/// assert_eq!(crs, Crs::WebMercator);
/// assert_eq!(crs.to_string(), "EPSG:3857");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Crs {
    /// Geographic longitude / latitude in degrees. `x` is the longitude.
    #[default]
    #[strum(to_string = "EPSG:4326", serialize = "wgs84", serialize = "geo")]
    Wgs84,
    /// Spherical Mercator in metres, as used by slippy-map tiles.
    #[strum(to_string = "EPSG:3857", serialize = "webMercator", serialize = "EPSG:900913")]
    WebMercator,
    /// Mercator on the WGS84 ellipsoid, in metres.
    #[strum(to_string = "EPSG:3395", serialize = "ellipticalMercator")]
    EllipticalMercator,
    /// A plain plane with no relation to the globe.
    #[strum(to_string = "cartesian", serialize = "plain")]
    Cartesian,
}

impl Crs {
    /// The EPSG code, if the system has one.
    pub fn epsg(&self) -> Option<u32> {
        match self {
            Crs::Wgs84 => Some(4326),
            Crs::WebMercator => Some(3857),
            Crs::EllipticalMercator => Some(3395),
            Crs::Cartesian => None,
        }
    }

    /// Angular (degree) units rather than linear ones.
    pub fn is_geographic(&self) -> bool {
        matches!(self, Crs::Wgs84)
    }

    /// Whether coordinates can be moved between this system and `other`.
    pub fn can_project_to(&self, other: Crs) -> bool {
        *self == other || (*self != Crs::Cartesian && other != Crs::Cartesian)
    }
}

