//! Hexagonal grids over geographic coordinates.
//!
//! A [`Grid`] locates the hexagonal cell covering a geographic point, computes centers and
//! corners of cells in geographic coordinates and converts geographic polygons into
//! [regions](Region) of cells.
//!
//! The grid itself works on a plane. Geographic coordinates are converted into planar ones with
//! one of the [projections](hexgeo_types::geo::Projection) from the [`hexgeo_types`] crate:
//!
//! ```
//! use hexgeo::{make_grid, Orientation};
//! use hexgeo::hexgeo_types::geo::{GeoPoint2d, PROJECTION_SM};
//!
//! let grid = make_grid(Orientation::Flat, 500.0, &PROJECTION_SM)?;
//! let hex = grid.hex_at(&GeoPoint2d::lonlat(-73.0, 40.0))?;
//! let code = grid.hex_to_code(&hex)?;
//! assert_eq!(grid.hex_from_code(code)?, hex);
//! # Ok::<(), hexgeo::error::HexGeoError>(())
//! ```
//!
//! Planar hex math is done by a [`HexEngine`]. The crate provides [`HexGrid`], but any other
//! implementation can be used with [`Grid::with_engine`].

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
mod grid;
pub mod hexgrid;
pub mod morton;

#[cfg(test)]
mod tests;

pub use config::{GridBuilder, GridConfig};
pub use engine::HexEngine;
pub use error::{EngineError, HexGeoError};
pub use grid::{make_grid, Grid};
pub use hexgrid::{Hex, HexGrid, Orientation, Region};
pub use morton::Morton64;

// Reexport hexgeo_types
pub use hexgeo_types;
