//! Points in geographic coordinates (longitude and latitude) (see [`GeoPoint`]) and conversion of
//! them into planar coordinates of a hexagonal grid (see [`Projection`]).

mod point;
mod projection;
mod sphere;

pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::{
    AzimuthalEquidistantProjection, GeoProjection, NoOpProjection, Projection, ProjectionKind,
    SinusoidalProjection, SphericalMercatorProjection, POLE_EPSILON, PROJECTION_AEP,
    PROJECTION_NO_OP, PROJECTION_SIN, PROJECTION_SM,
};
pub use sphere::{EARTH_CIRCUMFERENCE, EARTH_METERS_PER_DEGREE, MERCATOR_MAX_LATITUDE};
