use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Hexagonal cell of a grid in axial coordinates.
///
/// The third cube coordinate is derived: `q + r + s == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hex {
    q: i64,
    r: i64,
}

/// Offsets to the six adjacent hexes, counterclockwise starting from `+q`.
const DIRECTIONS: [Hex; 6] = [
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    Hex::new(0, 1),
];

impl Hex {
    /// Creates a hex from axial coordinates.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// `q` coordinate.
    pub fn q(&self) -> i64 {
        self.q
    }

    /// `r` coordinate.
    pub fn r(&self) -> i64 {
        self.r
    }

    /// Derived `s` coordinate.
    pub fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Number of steps between two hexes.
    pub fn distance(&self, other: &Hex) -> u64 {
        let dq = self.q.abs_diff(other.q);
        let dr = self.r.abs_diff(other.r);
        let ds = self.s().abs_diff(other.s());
        dq.max(dr).max(ds)
    }

    /// Sum of two hexes, or `None` if any of the cube coordinates overflows.
    pub fn checked_add(&self, other: Hex) -> Option<Hex> {
        let q = self.q.checked_add(other.q)?;
        let r = self.r.checked_add(other.r)?;
        q.checked_add(r)?.checked_neg()?;

        Some(Hex::new(q, r))
    }

    /// Hexes at exactly `radius` steps from this one, counterclockwise.
    ///
    /// Hexes with coordinates not representable by `i64` are skipped.
    pub fn ring(&self, radius: u32) -> Vec<Hex> {
        if radius == 0 {
            return vec![*self];
        }

        let radius = i64::from(radius);
        let mut hexes = Vec::with_capacity(6 * radius as usize);
        let start = DIRECTIONS[4];
        let mut offset = Hex::new(start.q * radius, start.r * radius);
        for direction in DIRECTIONS {
            for _ in 0..radius {
                if let Some(hex) = self.checked_add(offset) {
                    hexes.push(hex);
                }
                offset = offset + direction;
            }
        }

        hexes
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

/// Position in axial coordinates that is not necessarily in a center of a hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FractionalHex {
    pub q: f64,
    pub r: f64,
}

impl FractionalHex {
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    /// Hex containing this position.
    pub fn round(&self) -> Hex {
        let s = -self.q - self.r;
        let mut q = self.q.round();
        let mut r = self.r.round();
        let rs = s.round();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            q = -r - rs;
        } else if dr > ds {
            r = -q - rs;
        }

        Hex::new(q as i64, r as i64)
    }

    pub fn lerp(&self, other: &FractionalHex, t: f64) -> FractionalHex {
        FractionalHex::new(
            self.q + (other.q - self.q) * t,
            self.r + (other.r - self.r) * t,
        )
    }

    /// Hexes crossed by a straight line from this position to `other`.
    pub fn line_to(&self, other: &FractionalHex) -> Vec<Hex> {
        // Nudging both ends off the hex borders keeps the rounding stable along the line.
        const NUDGE: f64 = 1e-6;
        let a = FractionalHex::new(self.q + NUDGE, self.r + NUDGE);
        let b = FractionalHex::new(other.q + NUDGE, other.r + NUDGE);

        let steps = a.round().distance(&b.round());
        if steps == 0 {
            return vec![a.round()];
        }

        (0..=steps)
            .map(|i| a.lerp(&b, i as f64 / steps as f64).round())
            .collect()
    }
}
