use geo::{Centroid, Coord, MultiPoint};
use indexmap::IndexMap;
use pointcluster_geo::{BoundingBox, Crs, GeoError, Point};
use rustc_hash::FxBuildHasher;

use crate::cluster::error::ClusterError;
use crate::cluster::feature::Feature;
use crate::cluster::grid::GridIndex;

/// Describes a set of clustered features, with the centroid of the cluster
/// and the box enclosing its members, both in the working reference system.
///
/// Members are borrowed from the clustered input and listed in input order.
#[derive(Debug)]
pub struct FeatureGroup<'a, F> {
    centroid: Point,
    bbox: BoundingBox,
    features: Vec<&'a F>,
}

// Members are references, so cloning never requires `F: Clone`.
impl<F> Clone for FeatureGroup<'_, F> {
    fn clone(&self) -> Self {
        FeatureGroup {
            centroid: self.centroid,
            bbox: self.bbox,
            features: self.features.clone(),
        }
    }
}

impl<'a, F> FeatureGroup<'a, F> {
    /// `coords[i]` is the projected centroid of `features[i]`, in `crs`.
    fn try_new(features: Vec<&'a F>, coords: &[Coord], crs: Crs) -> Result<Self, ClusterError> {
        let empty = || GeoError::InvalidCoordinate("A group must hold at least one feature".into());

        let (first, rest) = coords.split_first().ok_or_else(empty)?;
        let bbox = rest
            .iter()
            .try_fold(BoundingBox::new(*first, *first, crs)?, |bbox, coord| {
                bbox.extend(&Point::from_coord(*coord, crs)?)
            })?;

        let centroid = MultiPoint::from(coords.to_vec())
            .centroid()
            .ok_or_else(empty)?;

        Ok(FeatureGroup {
            centroid: Point::from_coord(centroid.0, crs)?,
            bbox,
            features,
        })
    }

    /// Arithmetic mean of the members' projected centroids.
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn crs(&self) -> Crs {
        self.centroid.crs()
    }

    /// Smallest box holding every member centroid.
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn features(&self) -> &[&'a F] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a F> + '_ {
        self.features.iter().copied()
    }

    pub fn into_features(self) -> Vec<&'a F> {
        self.features
    }
}

impl<F> Feature for FeatureGroup<'_, F> {
    fn centroid(&self) -> Point {
        self.centroid
    }
}

impl<F> From<FeatureGroup<'_, F>> for geo::Point {
    fn from(val: FeatureGroup<'_, F>) -> Self {
        val.centroid.into()
    }
}

/// Splits the input into groups by the component label of each feature's cell.
///
/// Groups are ordered by their first member, and members keep input order.
pub(crate) fn collect_groups<'a, F>(
    features: Vec<&'a F>,
    coords: &[Coord],
    grid: &GridIndex,
    labels: &[usize],
    crs: Crs,
) -> Result<Vec<FeatureGroup<'a, F>>, ClusterError> {
    let mut grouped: IndexMap<usize, (Vec<&'a F>, Vec<Coord>), FxBuildHasher> =
        IndexMap::default();

    for (index, feature) in features.into_iter().enumerate() {
        let label = labels[grid.slot_of(index)];
        let (members, member_coords) = grouped.entry(label).or_default();

        members.push(feature);
        member_coords.push(coords[index]);
    }

    grouped
        .into_values()
        .map(|(members, member_coords)| FeatureGroup::try_new(members, &member_coords, crs))
        .collect()
}
