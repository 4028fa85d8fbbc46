//! Error types used by the crate.

use hexgeo_types::error::ProjectionError;
use thiserror::Error;

/// Error reported by a hex grid engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Index cannot be configured with the given number of dimensions and bits.
    #[error("invalid index configuration: {dimensions} dimensions of {bits} bits")]
    InvalidIndex {
        /// Number of dimensions.
        dimensions: u32,
        /// Bits per dimension.
        bits: u32,
    },
    /// Number of values does not match the number of index dimensions.
    #[error("expected {expected} values, got {actual}")]
    DimensionMismatch {
        /// Number of dimensions of the index.
        expected: usize,
        /// Number of the given values.
        actual: usize,
    },
    /// Value does not fit into the index.
    #[error("value {value} does not fit into {bits} bits")]
    ValueOutOfRange {
        /// Rejected value.
        value: i128,
        /// Bits available for the value.
        bits: u32,
    },
    /// Code cannot be produced by the index.
    #[error("code {0} is outside of the index range")]
    CodeOutOfRange(u64),
    /// Cell size is not a positive finite number.
    #[error("invalid cell size: {0}")]
    InvalidCellSize(f64),
    /// Planar point has non-finite coordinates.
    #[error("planar point ({x}, {y}) is not finite")]
    NonFinitePoint {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Planar point is too far from the grid origin to be located.
    #[error("planar point ({x}, {y}) is too far from the grid origin")]
    PointOutOfRange {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Bounding box of a region covers too many hexes.
    #[error("region bounding box covers {0} hexes")]
    RegionTooLarge(u128),
    /// Polygon has too few vertices to define a region.
    #[error("region requires at least 3 vertices, got {0}")]
    NotEnoughVertices(usize),
}

/// Error type of the grid operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HexGeoError {
    /// Geographic point cannot be converted by the grid projection.
    #[error("projection error: {0}")]
    Projection(#[from] ProjectionError),
    /// Error from the hex grid engine.
    #[error("grid engine error: {0}")]
    Engine(#[from] EngineError),
}
