//! Coordinate reference systems and the small geometry model the clustering
//! engine runs on: CRS-tagged [`Point`]s, axis-aligned [`BoundingBox`]es and the
//! projections between the supported systems.

/// Semi-major axis of the WGS84 ellipsoid, also the sphere radius used by Web Mercator.
pub const EARTH_RADIUS: f64 = 6378137.0;
/// First eccentricity of the WGS84 ellipsoid.
pub const EARTH_ECCENTRICITY: f64 = 0.081_819_190_842_621_5;
/// Latitudes beyond this cannot be represented in a square Mercator world.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_8;

pub mod coord;
pub mod crs;
#[doc(hidden)]
pub mod error;
pub mod project;


#[doc(inline)]
pub use coord::bbox::BoundingBox;
#[doc(inline)]
pub use coord::point::Point;
#[doc(inline)]
pub use crs::Crs;
#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use project::Project;
