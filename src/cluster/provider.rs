use geo::Coord;
use log::debug;
use measure_time::debug_time;
use pointcluster_geo::{Crs, GeoError, Project};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

#[cfg(feature = "tracing")]
use tracing::Level;

use crate::cluster::PARALLEL_THRESHOLD;
use crate::cluster::error::ClusterError;
use crate::cluster::feature::Feature;
use crate::cluster::grid::GridIndex;
use crate::cluster::group::{FeatureGroup, collect_groups};
use crate::cluster::merge::CellMerger;

/// Groups features whose on-screen markers would overlap, using a square grid.
///
/// `size` is the marker distance in pixels under which features must share a
/// group, `resolution` the map units per pixel, and `crs` the system the
/// distances are measured in. The threshold in map units is their product,
/// see [`GridCluster::cell_size`].
///
/// Example:
/// ```rust
/// use pointcluster::{Crs, GridCluster, Point, PointFeature};
///
/// let features = [(0.0, 0.0), (5.0, 5.0), (100.0, 0.0)]
///     .into_iter()
///     .map(|(x, y)| Point::new(x, y, Crs::Cartesian).map(PointFeature::at))
///     .collect::<Result<Vec<_>, _>>()
///     .expect("finite points");
///
/// let groups = GridCluster::new()
///     .size(10.0)
///     .resolution(1.0)
///     .crs(Crs::Cartesian)
///     .cluster(&features)
///     .expect("Must cluster");
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCluster {
    pub size: f64,
    pub resolution: f64,
    pub crs: Crs,
}

impl Default for GridCluster {
    fn default() -> Self {
        GridCluster {
            size: 44.0,
            resolution: 1.0,
            crs: Crs::WebMercator,
        }
    }
}

fn positive(value: f64, name: &str) -> Result<f64, ClusterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ClusterError::InvalidParameter(format!(
            "{name} must be a finite number greater than zero. Given: {value}"
        )))
    }
}

impl GridCluster {
    pub fn new() -> Self {
        GridCluster::default()
    }

    pub fn size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    pub fn resolution(self, resolution: f64) -> Self {
        Self { resolution, ..self }
    }

    pub fn crs(self, crs: Crs) -> Self {
        Self { crs, ..self }
    }

    /// The clustering threshold in map units, `size * resolution`, once both
    /// are validated.
    pub fn cell_size(&self) -> Result<f64, ClusterError> {
        let size = positive(self.size, "size")?;
        let resolution = positive(self.resolution, "resolution")?;

        positive(size * resolution, "size * resolution")
    }

    fn project_all<F: Feature + Sync>(&self, features: &[&F]) -> Result<Vec<Coord>, GeoError> {
        let crs = self.crs;
        let project = |feature: &&F| feature.centroid().project_to(crs).map(|p| p.coord());

        // The indexed collect keeps input order, so both paths agree.
        if features.len() >= PARALLEL_THRESHOLD {
            features.par_iter().map(project).collect()
        } else {
            features.iter().map(project).collect()
        }
    }

    /// Partitions `features` into groups. Every feature lands in exactly one
    /// group; groups come in order of their first feature and list members in
    /// input order, so identical calls give identical output.
    ///
    /// Fails without partial output when the parameters are invalid, any
    /// centroid cannot be projected into the working system, or a projected
    /// centroid is too far from the origin for the cell size (beyond
    /// [`MAX_CELL_INDEX`](crate::cluster::grid::MAX_CELL_INDEX) cells).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err(level = Level::INFO)))]
    pub fn cluster<'a, F, I>(&self, features: I) -> Result<Vec<FeatureGroup<'a, F>>, ClusterError>
    where
        F: Feature + Sync + 'a,
        I: IntoIterator<Item = &'a F>,
    {
        let cell_size = self.cell_size()?;
        let features = features.into_iter().collect::<Vec<&'a F>>();

        if features.is_empty() {
            return Ok(Vec::new());
        }

        debug_time!("GridCluster::cluster");
        debug!(
            "Clustering {} features in {} with cells of {cell_size} units",
            features.len(),
            self.crs
        );

        let coords = self.project_all(&features)?;
        let grid = GridIndex::build(&coords, cell_size)?;
        let labels = CellMerger::new(&grid, &coords).merge();

        let groups = collect_groups(features, &coords, &grid, &labels, self.crs)?;
        debug!(
            "Formed {} groups from {} occupied cells",
            groups.len(),
            grid.len()
        );

        Ok(groups)
    }
}

/// Clusters `features` with a one-off [`GridCluster`].
pub fn cluster<'a, F, I>(
    features: I,
    size: f64,
    resolution: f64,
    crs: Crs,
) -> Result<Vec<FeatureGroup<'a, F>>, ClusterError>
where
    F: Feature + Sync + 'a,
    I: IntoIterator<Item = &'a F>,
{
    GridCluster {
        size,
        resolution,
        crs,
    }
    .cluster(features)
}
