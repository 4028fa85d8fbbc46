use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Orientation of hexagons in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Hexagons have a vertex at the top and flat left and right sides.
    Pointy,
    /// Hexagons have a flat top side and vertices on the left and right.
    Flat,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: [Orientation; 2] = [Orientation::Pointy, Orientation::Flat];

    /// Matrix converting axial hex coordinates into planar coordinates, row major.
    pub(crate) fn forward(&self) -> [f64; 4] {
        match self {
            Orientation::Pointy => [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
            Orientation::Flat => [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
        }
    }

    /// Inverse of the [`forward`](Self::forward) matrix.
    pub(crate) fn backward(&self) -> [f64; 4] {
        match self {
            Orientation::Pointy => [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
            Orientation::Flat => [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
        }
    }

    /// Angle of the first corner in sixths of a full turn.
    fn start_angle(&self) -> f64 {
        match self {
            Orientation::Pointy => 0.5,
            Orientation::Flat => 0.0,
        }
    }

    /// Cosine and sine of the direction from the center of a hexagon to its `i`-th corner.
    /// Corners go counterclockwise.
    pub(crate) fn corner_direction(&self, i: usize) -> (f64, f64) {
        let angle = 2.0 * PI * (i as f64 + self.start_angle()) / 6.0;
        (angle.cos(), angle.sin())
    }
}
