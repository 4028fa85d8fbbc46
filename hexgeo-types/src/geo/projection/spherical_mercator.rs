use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::cartesian::Point2d;
use crate::error::ProjectionError;
use crate::geo::sphere::{EARTH_CIRCUMFERENCE, EARTH_METERS_PER_DEGREE, MERCATOR_MAX_LATITUDE};
use crate::geo::{GeoPoint, GeoPoint2d};

use super::{check_finite, normalize_longitude, Projection};

/// Spherical (web) Mercator projection, the projection of the common web map tiles.
///
/// * `x = lon · k`, where `k` is the number of meters per degree along the equator
/// * `y = ln(tan(φ) + sec(φ)) / π · C / 2`, where `C` is the circumference of the Earth
///
/// The `y` coordinate goes to infinity at the poles, so only latitudes within
/// [`MERCATOR_MAX_LATITUDE`] degrees from the equator can be projected. The projected map is a
/// square, and planar points above or below it are outside of the domain. Longitudes of points
/// to the left or right of the square are wrapped into `(-180, 180]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SphericalMercatorProjection;

const HALF_CIRCUMFERENCE: f64 = EARTH_CIRCUMFERENCE / 2.0;
/// Allowed excess of `|y|` over the half side of the square, absorbing rounding at the edge.
const EDGE_TOLERANCE: f64 = 1e-3;

impl Projection for SphericalMercatorProjection {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &GeoPoint2d) -> Result<Point2d, ProjectionError> {
        input.validate()?;

        if input.lat().abs() > MERCATOR_MAX_LATITUDE {
            return Err(ProjectionError::LatitudeOutOfDomain {
                lat: input.lat(),
                max: MERCATOR_MAX_LATITUDE,
            });
        }

        let phi = input.lat_rad();
        let x = input.lon() * EARTH_METERS_PER_DEGREE;
        let y = (phi.tan() + 1.0 / phi.cos()).ln() / PI * HALF_CIRCUMFERENCE;

        let point = Point2d::new(x, y);
        check_finite(&point)?;

        Ok(point)
    }

    fn unproject(&self, input: &Point2d) -> Result<GeoPoint2d, ProjectionError> {
        check_finite(input)?;
        if input.y.abs() > HALF_CIRCUMFERENCE + EDGE_TOLERANCE {
            return Err(ProjectionError::OutOfDomain {
                x: input.x,
                y: input.y,
            });
        }

        let lon = normalize_longitude(input.x / EARTH_METERS_PER_DEGREE);
        let lat = (input.y / HALF_CIRCUMFERENCE * PI).tanh().asin().to_degrees();

        Ok(GeoPoint2d::lonlat(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn project() {
        let projected = SphericalMercatorProjection
            .project(&GeoPoint2d::lonlat(-73.0, 40.0))
            .expect("point in domain");
        assert_abs_diff_eq!(projected.x, -8126322.82791, epsilon = 1e-5);
        assert_abs_diff_eq!(projected.y, 4865942.27950, epsilon = 1e-5);
    }

    #[test]
    fn round_trip() {
        let point = GeoPoint2d::lonlat(-73.0, 40.0);
        let projected = SphericalMercatorProjection
            .project(&point)
            .expect("point in domain");
        let unprojected = SphericalMercatorProjection
            .unproject(&projected)
            .expect("point in domain");
        assert_abs_diff_eq!(unprojected, point, epsilon = 1e-5);
    }

    #[test]
    fn max_latitude_maps_to_square() {
        let projected = SphericalMercatorProjection
            .project(&GeoPoint2d::lonlat(180.0, MERCATOR_MAX_LATITUDE))
            .expect("point in domain");
        assert_abs_diff_eq!(projected.x, HALF_CIRCUMFERENCE, epsilon = 1e-6);
        assert_abs_diff_eq!(projected.y, HALF_CIRCUMFERENCE, epsilon = 1e-3);
    }

    #[test]
    fn domain_boundary() {
        for lat in [85.0, -85.0, 0.0] {
            let projected = SphericalMercatorProjection
                .project(&GeoPoint2d::lonlat(10.0, lat))
                .expect("point in domain");
            assert!(projected.x.is_finite() && projected.y.is_finite());
        }

        for lat in [85.06, -85.06, 89.0, 90.0, -90.0] {
            assert_matches!(
                SphericalMercatorProjection.project(&GeoPoint2d::lonlat(10.0, lat)),
                Err(ProjectionError::LatitudeOutOfDomain { .. })
            );
        }
    }

    #[test]
    fn invalid_input() {
        assert_matches!(
            SphericalMercatorProjection.project(&GeoPoint2d::lonlat(f64::INFINITY, 0.0)),
            Err(ProjectionError::InvalidCoordinates { .. })
        );
        assert_matches!(
            SphericalMercatorProjection.unproject(&Point2d::new(0.0, f64::NAN)),
            Err(ProjectionError::OutOfDomain { .. })
        );
    }

    #[test]
    fn unproject_outside_of_square() {
        let edge = SphericalMercatorProjection
            .unproject(&Point2d::new(0.0, HALF_CIRCUMFERENCE))
            .expect("edge of the square");
        assert_abs_diff_eq!(edge.lat(), MERCATOR_MAX_LATITUDE, epsilon = 1e-9);

        for y in [HALF_CIRCUMFERENCE + 1.0, -HALF_CIRCUMFERENCE * 2.0] {
            assert_matches!(
                SphericalMercatorProjection.unproject(&Point2d::new(0.0, y)),
                Err(ProjectionError::OutOfDomain { .. })
            );
        }
    }

    #[test]
    fn longitude_wraps_across_antimeridian() {
        let x = -HALF_CIRCUMFERENCE - 250.0;
        let unprojected = SphericalMercatorProjection
            .unproject(&Point2d::new(x, 0.0))
            .expect("point in domain");
        assert_abs_diff_eq!(
            unprojected.lon(),
            180.0 - 250.0 / EARTH_METERS_PER_DEGREE,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(unprojected.lat(), 0.0);
    }
}
