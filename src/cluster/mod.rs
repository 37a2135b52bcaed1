//! Grid-based clustering of located features.
//!
//! Feature centroids are projected into a working system and bucketed into
//! square cells of side `size * resolution`. Neighbouring cells are merged
//! when any pair of their members is within that distance, and each
//! connected set of cells becomes one [`FeatureGroup`].
//!
//! The distance between two resulting centroids is usually at least the cell
//! size, but that is a consequence of the merge rule rather than a guarantee:
//! a chain of points straddling two cell boundaries can leave centroids closer.

/// Inputs at least this large are projected on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 2048;

pub mod config;
#[doc(hidden)]
pub mod error;
pub mod feature;
pub mod grid;
pub mod group;
pub mod merge;
pub mod provider;


#[doc(inline)]
pub use config::ClusterConfig;
#[doc(inline)]
pub use error::ClusterError;
#[doc(inline)]
pub use feature::{Feature, PointFeature};
#[doc(inline)]
pub use group::FeatureGroup;
#[doc(inline)]
pub use provider::{GridCluster, cluster};
