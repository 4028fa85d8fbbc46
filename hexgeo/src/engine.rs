//! Interface between the [`Grid`](crate::Grid) and the planar hex math it delegates to.

use std::fmt::Debug;

use hexgeo_types::Point2d;

use crate::error::EngineError;

/// Hexagonal grid operating in planar coordinates.
///
/// The [`Grid`](crate::Grid) converts geographic coordinates into planar ones and delegates the
/// rest of the work to an engine. [`HexGrid`](crate::HexGrid) is the default implementation.
pub trait HexEngine {
    /// Identifier of a cell.
    type Hex: Copy + Debug;
    /// Set of cells covered by a polygon.
    type Region;

    /// Encodes a hex into an integer code.
    fn hex_to_code(&self, hex: &Self::Hex) -> Result<u64, EngineError>;
    /// Decodes a hex from a code produced by [`HexEngine::hex_to_code`].
    fn hex_from_code(&self, code: u64) -> Result<Self::Hex, EngineError>;
    /// Hex that contains the point.
    fn hex_at(&self, point: &Point2d) -> Result<Self::Hex, EngineError>;
    /// Center of the hex.
    fn hex_center(&self, hex: &Self::Hex) -> Point2d;
    /// Six corners of the hex, counterclockwise.
    fn hex_corners(&self, hex: &Self::Hex) -> [Point2d; 6];
    /// The hex itself followed by all hexes within `layers` steps from it.
    fn hex_neighbors(&self, hex: &Self::Hex, layers: u32) -> Vec<Self::Hex>;
    /// Region covered by the closed polygon with the given vertices.
    fn make_region(&self, points: &[Point2d]) -> Result<Self::Region, EngineError>;
}
