use std::fs;
use std::path::Path;
use std::process;

use log::{error, info};
use measure_time::info_time;
use wkt::ToWkt;

use pointcluster::input::read_wkt_points;
use pointcluster::{ClusterConfig, Error, PointFeature};

fn filter(
    features: Vec<PointFeature<usize>>,
    config: &ClusterConfig,
) -> Result<Vec<PointFeature<usize>>, Error> {
    let Some(bbox) = config.bbox else {
        return Ok(features);
    };

    let mut kept = Vec::with_capacity(features.len());
    for feature in features {
        if bbox.contains(&feature.position())? {
            kept.push(feature);
        }
    }

    info!("{} features inside {bbox}", kept.len());
    Ok(kept)
}

fn run(path: &Path) -> Result<(), Error> {
    let config = ClusterConfig::from_env()?;
    let source = fs::read_to_string(path)?;

    let features = read_wkt_points(&source, config.source_crs)?;
    info!("Read {} features from {}", features.len(), path.display());

    let features = filter(features, &config)?;

    let groups = {
        info_time!("Clustering {} features", features.len());
        config.cluster.cluster(&features)?
    };

    for group in &groups {
        let lines = group
            .iter()
            .map(|feature| feature.payload().to_string())
            .collect::<Vec<_>>()
            .join(",");

        println!(
            "{}\t{}\t{lines}",
            group.len(),
            geo::Point::from(group.centroid()).wkt_string()
        );
    }

    info!("Formed {} groups in {}", groups.len(), config.cluster.crs);
    Ok(())
}

fn main() {
    #[cfg(feature = "tracing")]
    pointcluster::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let Some(arg) = std::env::args_os().nth(1) else {
        error!("Need a file of WKT points as argument");
        process::exit(2);
    };

    if let Err(err) = run(Path::new(&arg)) {
        error!("Failed to cluster. Reason: {err}");
        process::exit(1);
    }
}
