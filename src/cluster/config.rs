//! Environment-driven configuration.
//!
//! An example environment is shown:
//! ```bash
//! CLUSTER_SIZE=44
//! CLUSTER_RESOLUTION=9595
//! CLUSTER_CRS=EPSG:3857
//! CLUSTER_SOURCE_CRS=EPSG:4326
//! CLUSTER_BBOX=30,40,160,70
//! ```

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use dotenv::dotenv;
use log::debug;
use pointcluster_geo::{BoundingBox, Crs};

use crate::cluster::error::ClusterError;
use crate::cluster::provider::GridCluster;

pub const ENV_SIZE: &str = "CLUSTER_SIZE";
pub const ENV_RESOLUTION: &str = "CLUSTER_RESOLUTION";
pub const ENV_CRS: &str = "CLUSTER_CRS";
pub const ENV_SOURCE_CRS: &str = "CLUSTER_SOURCE_CRS";
pub const ENV_BBOX: &str = "CLUSTER_BBOX";

/// Everything needed to run a clustering pass over raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterConfig {
    pub cluster: GridCluster,
    /// System the input coordinates are written in.
    pub source_crs: Crs,
    /// Only input inside this box (in `source_crs`) is clustered.
    pub bbox: Option<BoundingBox>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            cluster: GridCluster::default(),
            source_crs: Crs::Wgs84,
            bbox: None,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ClusterError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|err| {
            ClusterError::InvalidParameter(format!("{key}={raw:?} could not be parsed: {err}"))
        }),
    }
}

impl ClusterConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ClusterError> {
        if let Err(err) = dotenv() {
            debug!("No .env file loaded: {err}");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads each setting through `lookup`, falling back to the defaults for
    /// missing keys. Values are validated, so a returned config always has a
    /// usable cell size.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClusterError> {
        let defaults = ClusterConfig::default();

        let cluster = GridCluster {
            size: parse_var(&lookup, ENV_SIZE, defaults.cluster.size)?,
            resolution: parse_var(&lookup, ENV_RESOLUTION, defaults.cluster.resolution)?,
            crs: parse_var(&lookup, ENV_CRS, defaults.cluster.crs)?,
        };
        cluster.cell_size()?;

        let source_crs = parse_var(&lookup, ENV_SOURCE_CRS, defaults.source_crs)?;
        if !source_crs.can_project_to(cluster.crs) {
            return Err(ClusterError::InvalidParameter(format!(
                "{ENV_SOURCE_CRS}={source_crs} cannot be projected into {ENV_CRS}={}",
                cluster.crs
            )));
        }

        let bbox = lookup(ENV_BBOX)
            .map(|raw| {
                BoundingBox::parse_with_crs(&raw, source_crs).map_err(|err| {
                    ClusterError::InvalidParameter(format!("{ENV_BBOX}={raw:?}: {err}"))
                })
            })
            .transpose()?;

        Ok(ClusterConfig {
            cluster,
            source_crs,
            bbox,
        })
    }
}
