//! Reading point features from WKT text.

use geo::Point as GeoPoint;
use pointcluster_geo::{Crs, Point};
use wkt::TryFromWkt;

use crate::Error;
use crate::cluster::PointFeature;

/// Parses one WKT `POINT` per line into features in `crs`. Blank lines and
/// lines starting with `#` are skipped. Each payload is the 1-based line
/// number the point was read from.
pub fn read_wkt_points(source: &str, crs: Crs) -> Result<Vec<PointFeature<usize>>, Error> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| -> Result<PointFeature<usize>, Error> {
            let point = GeoPoint::<f64>::try_from_wkt_str(line)
                .map_err(|err| Error::Input(format!("line {number}: {err}")))?;

            Ok(PointFeature::new(Point::new(point.x(), point.y(), crs)?, number))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::read_wkt_points;
    use crate::Error;
    use crate::cluster::Feature;
    use pointcluster_geo::Crs;

    #[test]
    fn reads_points_and_skips_comments() {
        let source = "# regions\nPOINT(73.355357 54.878128)\n\n  POINT (59.822013 53.521495)  \n";
        let features = read_wkt_points(source, Crs::Wgs84).expect("valid wkt");

        assert_eq!(features.len(), 2);
        assert_eq!(*features[0].payload(), 2);
        assert_eq!(*features[1].payload(), 4);
        assert_eq!(features[1].centroid().x_y(), (59.822013, 53.521495));
        assert_eq!(features[1].centroid().crs(), Crs::Wgs84);
    }

    #[test]
    fn reports_line_of_bad_geometry() {
        let source = "POINT(1 2)\nLINESTRING(0 0, 1 1)\n";

        match read_wkt_points(source, Crs::Cartesian) {
            Err(Error::Input(msg)) => assert!(msg.starts_with("line 2"), "{msg}"),
            other => panic!("expected an input error, got {other:?}"),
        }
    }
}
