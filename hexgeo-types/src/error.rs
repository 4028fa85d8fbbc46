//! Error type used by the crate.

use thiserror::Error;

/// Failure of a projection to convert a point.
///
/// Projections never return non-finite coordinates. When a point cannot be converted into a
/// finite value, one of these variants is returned instead.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// Coordinates are not finite numbers, or the latitude is outside of `[-90, 90]`.
    #[error("invalid coordinates: lon {lon}, lat {lat}")]
    InvalidCoordinates {
        /// Longitude of the rejected point.
        lon: f64,
        /// Latitude of the rejected point.
        lat: f64,
    },
    /// Latitude cannot be represented by the projection.
    #[error("latitude {lat} is outside of the projection domain (max {max})")]
    LatitudeOutOfDomain {
        /// Latitude of the rejected point.
        lat: f64,
        /// Maximum absolute latitude supported by the projection.
        max: f64,
    },
    /// Planar point does not correspond to any geographic point.
    #[error("point ({x}, {y}) is outside of the projection domain")]
    OutOfDomain {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
    },
}

/// Name that does not match any of the built-in projections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown projection: {0}")]
pub struct UnknownProjection(pub String);
