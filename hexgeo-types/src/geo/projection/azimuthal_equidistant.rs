use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::cartesian::Point2d;
use crate::error::ProjectionError;
use crate::geo::{GeoPoint, GeoPoint2d};

use super::{check_finite, Projection, POLE_EPSILON};

/// Polar azimuthal equidistant projection centered on the North Pole, on a unit sphere.
///
/// * `θ = λ`, `ρ = π/2 - φ`
/// * `x = ρ · sin(θ)`, `y = -ρ · cos(θ)`
///
/// Distances from the North Pole are preserved. Distortion grows with the distance from the
/// pole, so the southern hemisphere is heavily distorted and the South Pole becomes a circle of
/// radius `π`.
///
/// The pole itself maps to the origin, where longitude is undefined. It is unprojected with
/// longitude `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AzimuthalEquidistantProjection;

impl Projection for AzimuthalEquidistantProjection {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &GeoPoint2d) -> Result<Point2d, ProjectionError> {
        input.validate()?;

        let theta = input.lon_rad();
        let rho = FRAC_PI_2 - input.lat_rad();

        Ok(Point2d::new(rho * theta.sin(), -rho * theta.cos()))
    }

    fn unproject(&self, input: &Point2d) -> Result<GeoPoint2d, ProjectionError> {
        check_finite(input)?;

        // Recovering rho from the distance to the origin avoids dividing by sin(theta), which is
        // zero on the meridians 0 and 180.
        let rho = input.x.hypot(input.y);
        if rho > PI + POLE_EPSILON {
            return Err(ProjectionError::OutOfDomain {
                x: input.x,
                y: input.y,
            });
        }

        if rho < POLE_EPSILON {
            return Ok(GeoPoint2d::lonlat(0.0, 90.0));
        }

        let theta = input.x.atan2(-input.y);
        let lat = (FRAC_PI_2 - rho).to_degrees().max(-90.0);

        Ok(GeoPoint2d::lonlat(theta.to_degrees(), lat))
    }
}
