//! Conversion between geographic and planar coordinates.
//!
//! Four strategies are provided, each as a zero-sized type with a process-wide instance:
//!
//! | Strategy | Instance | Planar units |
//! |---|---|---|
//! | [`NoOpProjection`] | [`PROJECTION_NO_OP`] | degrees |
//! | [`SinusoidalProjection`] | [`PROJECTION_SIN`] | meters |
//! | [`AzimuthalEquidistantProjection`] | [`PROJECTION_AEP`] | radians |
//! | [`SphericalMercatorProjection`] | [`PROJECTION_SM`] | meters |

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::error::{ProjectionError, UnknownProjection};
use crate::geo::GeoPoint2d;

mod azimuthal_equidistant;
mod no_op;
mod sinusoidal;
mod spherical_mercator;

pub use azimuthal_equidistant::AzimuthalEquidistantProjection;
pub use no_op::NoOpProjection;
pub use sinusoidal::SinusoidalProjection;
pub use spherical_mercator::SphericalMercatorProjection;

/// Distance in radians from a pole within which the longitude of a point cannot be recovered.
/// Such points are unprojected with longitude `0`.
///
/// On the Earth sphere this is about 6 mm.
pub const POLE_EPSILON: f64 = 1e-9;

/// Projection converts points from one coordinate system into another and back.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Projects a point. Returns an error if the point is outside of the projection domain.
    fn project(&self, input: &Self::InPoint) -> Result<Self::OutPoint, ProjectionError>;
    /// Reverse projection. Returns an error if the point is outside of the projection domain.
    fn unproject(&self, input: &Self::OutPoint) -> Result<Self::InPoint, ProjectionError>;
}

/// Projection from geographic coordinates into the planar coordinates of a hex grid.
///
/// This trait is implemented automatically for all suitable projections and can be used as a
/// trait object.
pub trait GeoProjection:
    Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + Debug + Send + Sync
{
}

impl<T> GeoProjection for T where
    T: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + Debug + Send + Sync
{
}

/// Passes degrees through unchanged.
pub static PROJECTION_NO_OP: NoOpProjection = NoOpProjection;
/// Sinusoidal equal-area projection.
pub static PROJECTION_SIN: SinusoidalProjection = SinusoidalProjection;
/// Polar azimuthal equidistant projection centered on the North Pole.
pub static PROJECTION_AEP: AzimuthalEquidistantProjection = AzimuthalEquidistantProjection;
/// Spherical (web) Mercator projection.
pub static PROJECTION_SM: SphericalMercatorProjection = SphericalMercatorProjection;

/// Selector of one of the built-in projections, e.g. for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// [`NoOpProjection`].
    NoOp,
    /// [`SinusoidalProjection`].
    Sinusoidal,
    /// [`AzimuthalEquidistantProjection`].
    AzimuthalEquidistant,
    /// [`SphericalMercatorProjection`].
    #[default]
    SphericalMercator,
}

impl ProjectionKind {
    /// All built-in projections.
    pub const ALL: [ProjectionKind; 4] = [
        ProjectionKind::NoOp,
        ProjectionKind::Sinusoidal,
        ProjectionKind::AzimuthalEquidistant,
        ProjectionKind::SphericalMercator,
    ];

    /// Name of the projection, the same as used by serde.
    pub fn name(&self) -> &'static str {
        match self {
            ProjectionKind::NoOp => "no_op",
            ProjectionKind::Sinusoidal => "sinusoidal",
            ProjectionKind::AzimuthalEquidistant => "azimuthal_equidistant",
            ProjectionKind::SphericalMercator => "spherical_mercator",
        }
    }

    /// Shared instance of the projection.
    pub fn projection(&self) -> &'static dyn GeoProjection {
        match self {
            ProjectionKind::NoOp => &PROJECTION_NO_OP,
            ProjectionKind::Sinusoidal => &PROJECTION_SIN,
            ProjectionKind::AzimuthalEquidistant => &PROJECTION_AEP,
            ProjectionKind::SphericalMercator => &PROJECTION_SM,
        }
    }
}

impl Display for ProjectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProjectionKind {
    type Err = UnknownProjection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownProjection(s.to_string()))
    }
}

/// Fails with [`ProjectionError::OutOfDomain`] if the planar point has non-finite coordinates.
fn check_finite(point: &Point2d) -> Result<(), ProjectionError> {
    if CartesianPoint2d::is_finite(point) {
        Ok(())
    } else {
        Err(ProjectionError::OutOfDomain {
            x: point.x,
            y: point.y,
        })
    }
}

/// Wraps a longitude in degrees into the `(-180, 180]` range.
fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
