//! Hexagonal grid on a plane, the default [`HexEngine`] implementation.
//!
//! Hex math follows the axial coordinate system described at
//! <https://www.redblobgames.com/grids/hexagons/>.

use hexgeo_types::{CartesianPoint2d, Point2d};

use crate::engine::HexEngine;
use crate::error::EngineError;
use crate::morton::Morton64;

mod hex;
mod orientation;
mod region;

pub use hex::Hex;
use hex::FractionalHex;
pub use orientation::Orientation;
pub use region::Region;

/// Largest absolute value of a cube coordinate of a hex located by the grid. Integers up to this
/// value are exact in `f64`, and sums of them do not overflow `i64`.
pub const MAX_HEX_COORDINATE: f64 = 4_503_599_627_370_496.0;

/// Maximum number of hexes in the bounding box of a region.
pub const MAX_REGION_HEXES: u128 = 1 << 24;

/// Grid of hexagons on a plane.
///
/// The hex `(0, 0)` is centered at `origin`. `size` is the distance from the center of a hex to
/// its corners along each axis. Hexes are encoded into integer codes with a [`Morton64`] index
/// of two signed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct HexGrid {
    orientation: Orientation,
    origin: Point2d,
    size: Point2d,
    index: Morton64,
}

impl HexGrid {
    /// Creates a new grid. Fails if any of the `size` components is not a positive finite number,
    /// or the `index` does not have two dimensions.
    pub fn new(
        orientation: Orientation,
        origin: Point2d,
        size: Point2d,
        index: Morton64,
    ) -> Result<Self, EngineError> {
        for component in [size.x, size.y] {
            if !component.is_finite() || component <= 0.0 {
                return Err(EngineError::InvalidCellSize(component));
            }
        }

        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(EngineError::NonFinitePoint {
                x: origin.x,
                y: origin.y,
            });
        }

        if index.dimensions() != 2 {
            return Err(EngineError::DimensionMismatch {
                expected: 2,
                actual: index.dimensions() as usize,
            });
        }

        Ok(Self {
            orientation,
            origin,
            size,
            index,
        })
    }

    /// Orientation of the hexes.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Center of the hex `(0, 0)`.
    pub fn origin(&self) -> Point2d {
        self.origin
    }

    /// Size of the hexes.
    pub fn size(&self) -> Point2d {
        self.size
    }

    /// Index used to encode hexes.
    pub fn index(&self) -> Morton64 {
        self.index
    }

    /// Position of the point in axial coordinates. Fails if the point is not finite or too far
    /// from the origin to be located.
    fn fractional_hex(&self, point: &Point2d) -> Result<FractionalHex, EngineError> {
        if !CartesianPoint2d::is_finite(point) {
            return Err(EngineError::NonFinitePoint {
                x: point.x,
                y: point.y,
            });
        }

        let b = self.orientation.backward();
        let x = (point.x - self.origin.x) / self.size.x;
        let y = (point.y - self.origin.y) / self.size.y;
        let hex = FractionalHex::new(b[0] * x + b[1] * y, b[2] * x + b[3] * y);

        // Rounding may move each coordinate by one.
        let limit = MAX_HEX_COORDINATE - 1.0;
        let in_range = [hex.q, hex.r, hex.q + hex.r]
            .into_iter()
            .all(|c| c.is_finite() && c.abs() <= limit);
        if !in_range {
            return Err(EngineError::PointOutOfRange {
                x: point.x,
                y: point.y,
            });
        }

        Ok(hex)
    }
}

impl HexEngine for HexGrid {
    type Hex = Hex;
    type Region = Region;

    fn hex_to_code(&self, hex: &Hex) -> Result<u64, EngineError> {
        self.index.spack(&[hex.q(), hex.r()])
    }

    fn hex_from_code(&self, code: u64) -> Result<Hex, EngineError> {
        match self.index.sunpack(code)?[..] {
            [q, r] => Ok(Hex::new(q, r)),
            _ => Err(EngineError::CodeOutOfRange(code)),
        }
    }

    fn hex_at(&self, point: &Point2d) -> Result<Hex, EngineError> {
        Ok(self.fractional_hex(point)?.round())
    }

    fn hex_center(&self, hex: &Hex) -> Point2d {
        let f = self.orientation.forward();
        let q = hex.q() as f64;
        let r = hex.r() as f64;

        Point2d::new(
            (f[0] * q + f[1] * r) * self.size.x + self.origin.x,
            (f[2] * q + f[3] * r) * self.size.y + self.origin.y,
        )
    }

    fn hex_corners(&self, hex: &Hex) -> [Point2d; 6] {
        let center = self.hex_center(hex);
        std::array::from_fn(|i| {
            let (cos, sin) = self.orientation.corner_direction(i);
            Point2d::new(center.x + self.size.x * cos, center.y + self.size.y * sin)
        })
    }

    fn hex_neighbors(&self, hex: &Hex, layers: u32) -> Vec<Hex> {
        (0..=layers).flat_map(|radius| hex.ring(radius)).collect()
    }

    fn make_region(&self, points: &[Point2d]) -> Result<Region, EngineError> {
        if points.len() < 3 {
            return Err(EngineError::NotEnoughVertices(points.len()));
        }

        let vertices = points
            .iter()
            .map(|p| self.fractional_hex(p))
            .collect::<Result<Vec<_>, _>>()?;

        let (mut q_min, mut q_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut r_min, mut r_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for vertex in &vertices {
            q_min = q_min.min(vertex.q);
            q_max = q_max.max(vertex.q);
            r_min = r_min.min(vertex.r);
            r_max = r_max.max(vertex.r);
        }

        let (q_min, q_max) = (q_min.floor() as i64 - 1, q_max.ceil() as i64 + 1);
        let (r_min, r_max) = (r_min.floor() as i64 - 1, r_max.ceil() as i64 + 1);
        let hexes = (q_max.abs_diff(q_min) as u128 + 1) * (r_max.abs_diff(r_min) as u128 + 1);
        if hexes > MAX_REGION_HEXES {
            return Err(EngineError::RegionTooLarge(hexes));
        }

        let outline = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .flat_map(|(from, to)| from.line_to(to));

        let mut interior = vec![];
        for q in q_min..=q_max {
            for r in r_min..=r_max {
                let hex = Hex::new(q, r);
                if region::contains_point(points, &self.hex_center(&hex)) {
                    interior.push(hex);
                }
            }
        }

        Ok(Region::new(outline.chain(interior)))
    }
}
