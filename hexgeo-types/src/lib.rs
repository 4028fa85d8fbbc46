//! Types shared by hexagonal grids laid over the Earth surface: points in geographic coordinates
//! (see [`geo::GeoPoint`]), points in the planar coordinates of the grid (see [`cartesian`]) and
//! the [projections](geo::Projection) converting between the two.
//!
//! ```
//! use hexgeo_types::geo::{GeoPoint, GeoPoint2d, Projection, PROJECTION_SM};
//!
//! let point = GeoPoint2d::lonlat(-73.0, 40.0);
//! let projected = PROJECTION_SM.project(&point)?;
//! let unprojected = PROJECTION_SM.unproject(&projected)?;
//! assert!((unprojected.lat() - 40.0).abs() < 1e-9);
//! # Ok::<(), hexgeo_types::error::ProjectionError>(())
//! ```

pub mod cartesian;
pub mod error;
pub mod geo;

pub use cartesian::{CartesianPoint2d, Point2d};
pub use error::{ProjectionError, UnknownProjection};
pub use geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
