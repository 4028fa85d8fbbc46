use serde::{Deserialize, Serialize};

use crate::cartesian::Point2d;
use crate::error::ProjectionError;
use crate::geo::{GeoPoint, GeoPoint2d};

use super::Projection;

/// Projection that uses longitude as `x` and latitude as `y` coordinate.
///
/// Useful when the grid is supposed to operate directly in degrees. This projection is defined
/// for any input and never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoOpProjection;

impl Projection for NoOpProjection {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &GeoPoint2d) -> Result<Point2d, ProjectionError> {
        Ok(Point2d::new(input.lon(), input.lat()))
    }

    fn unproject(&self, input: &Point2d) -> Result<GeoPoint2d, ProjectionError> {
        Ok(GeoPoint2d::lonlat(input.x, input.y))
    }
}
