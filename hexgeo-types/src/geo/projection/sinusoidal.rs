use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::cartesian::Point2d;
use crate::error::ProjectionError;
use crate::geo::sphere::METERS_PER_RADIAN;
use crate::geo::{GeoPoint, GeoPoint2d};

use super::{check_finite, normalize_longitude, Projection, POLE_EPSILON};

/// Sinusoidal equal-area projection on a sphere.
///
/// Longitudes are shifted by 180 degrees before projecting, so the planar `x` coordinate of
/// every point in the `(-180, 180]` range is non-negative:
///
/// * `x = (λ + π) · cos(φ) · R`
/// * `y = φ · R`
///
/// where `R` is the number of meters per radian along the equator.
///
/// Longitude cannot be recovered at the poles, since all meridians meet there. Points within
/// [`POLE_EPSILON`] of a pole are unprojected with longitude `0`.
///
/// Points slightly outside of the map along a parallel, e.g. corners of a cell crossing the
/// antimeridian, are unprojected with the longitude wrapped into `(-180, 180]`. Points more than
/// half a turn away from the map edge are outside of the domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SinusoidalProjection;

impl Projection for SinusoidalProjection {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &GeoPoint2d) -> Result<Point2d, ProjectionError> {
        input.validate()?;

        let lambda = (input.lon() + 180.0).to_radians();
        let phi = input.lat_rad();
        let x = lambda * phi.cos() * METERS_PER_RADIAN;
        let y = phi * METERS_PER_RADIAN;

        Ok(Point2d::new(x, y))
    }

    fn unproject(&self, input: &Point2d) -> Result<GeoPoint2d, ProjectionError> {
        check_finite(input)?;

        let phi = input.y / METERS_PER_RADIAN;
        let pole_distance = FRAC_PI_2 - phi.abs();
        if pole_distance < -POLE_EPSILON {
            return Err(ProjectionError::OutOfDomain {
                x: input.x,
                y: input.y,
            });
        }

        if pole_distance < POLE_EPSILON {
            return Ok(GeoPoint2d::lonlat(0.0, 90.0f64.copysign(phi)));
        }

        let lambda = input.x / (phi.cos() * METERS_PER_RADIAN);
        if !(-PI..=3.0 * PI).contains(&lambda) {
            return Err(ProjectionError::OutOfDomain {
                x: input.x,
                y: input.y,
            });
        }

        Ok(GeoPoint2d::lonlat(
            normalize_longitude(lambda.to_degrees() - 180.0),
            phi.to_degrees(),
        ))
    }
}
