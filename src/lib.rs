#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod cluster;
mod error;
pub mod input;
pub mod util;

#[doc(inline)]
pub use cluster::{
    ClusterConfig, ClusterError, Feature, FeatureGroup, GridCluster, PointFeature, cluster,
};
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use pointcluster_geo::{BoundingBox, Crs, GeoError, Point, Project};
