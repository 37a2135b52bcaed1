use pointcluster_geo::Point;

/// Anything with a position the clustering engine can bucket.
///
/// The engine only ever reads the centroid; payloads are never inspected,
/// copied or mutated.
pub trait Feature {
    /// Representative location of the feature, in any reference system.
    fn centroid(&self) -> Point;
}

impl Feature for Point {
    fn centroid(&self) -> Point {
        *self
    }
}

impl<T: Feature + ?Sized> Feature for &T {
    fn centroid(&self) -> Point {
        (**self).centroid()
    }
}

/// A located value: a [`Point`] carrying an arbitrary payload.
///
/// ```rust
/// use pointcluster::{Crs, Feature, Point, PointFeature};
///
/// let position = Point::new(150.834439, 59.544667, Crs::Wgs84).unwrap();
/// let feature = PointFeature::new(position, "Magadan");
///
/// assert_eq!(feature.centroid(), position);
/// assert_eq!(*feature.payload(), "Magadan");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature<T> {
    position: Point,
    payload: T,
}

impl<T> PointFeature<T> {
    pub fn new(position: Point, payload: T) -> Self {
        PointFeature { position, payload }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl PointFeature<()> {
    /// A feature with no payload.
    pub fn at(position: Point) -> Self {
        PointFeature::new(position, ())
    }
}

impl<T> Feature for PointFeature<T> {
    fn centroid(&self) -> Point {
        self.position
    }
}
