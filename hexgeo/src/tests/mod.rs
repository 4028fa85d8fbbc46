use hexgeo_types::Point2d;

use crate::engine::HexEngine;
use crate::error::EngineError;

/// Engine with unit square "hexes". Its regions are the planar polygon vertices it was given.
#[derive(Debug, Default)]
pub struct SquareEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square(pub i64, pub i64);

impl HexEngine for SquareEngine {
    type Hex = Square;
    type Region = Vec<Point2d>;

    fn hex_to_code(&self, hex: &Square) -> Result<u64, EngineError> {
        if hex.0 < 0 || hex.1 < 0 {
            return Err(EngineError::ValueOutOfRange {
                value: hex.0.min(hex.1) as i128,
                bits: 32,
            });
        }

        Ok(((hex.0 as u64) << 32) | hex.1 as u64)
    }

    fn hex_from_code(&self, code: u64) -> Result<Square, EngineError> {
        Ok(Square((code >> 32) as i64, (code & 0xffff_ffff) as i64))
    }

    fn hex_at(&self, point: &Point2d) -> Result<Square, EngineError> {
        Ok(Square(point.x.floor() as i64, point.y.floor() as i64))
    }

    fn hex_center(&self, hex: &Square) -> Point2d {
        Point2d::new(hex.0 as f64 + 0.5, hex.1 as f64 + 0.5)
    }

    fn hex_corners(&self, hex: &Square) -> [Point2d; 6] {
        let (x, y) = (hex.0 as f64, hex.1 as f64);
        [
            Point2d::new(x + 1.0, y),
            Point2d::new(x + 1.0, y + 1.0),
            Point2d::new(x + 0.5, y + 1.0),
            Point2d::new(x, y + 1.0),
            Point2d::new(x, y),
            Point2d::new(x + 0.5, y),
        ]
    }

    fn hex_neighbors(&self, hex: &Square, layers: u32) -> Vec<Square> {
        let layers = layers as i64;
        let mut squares = vec![*hex];
        for dx in -layers..=layers {
            for dy in -layers..=layers {
                if dx != 0 || dy != 0 {
                    squares.push(Square(hex.0 + dx, hex.1 + dy));
                }
            }
        }

        squares
    }

    fn make_region(&self, points: &[Point2d]) -> Result<Vec<Point2d>, EngineError> {
        if points.len() < 3 {
            return Err(EngineError::NotEnoughVertices(points.len()));
        }

        Ok(points.to_vec())
    }
}
