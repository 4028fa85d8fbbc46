use ahash::HashSet;
use hexgeo_types::Point2d;

use super::Hex;

/// Set of hexes covered by a polygon.
///
/// Hexes are kept sorted by their axial coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    hexes: Vec<Hex>,
    lookup: HashSet<Hex>,
}

impl Region {
    /// Creates a region from a set of hexes. Duplicates are removed.
    pub fn new(hexes: impl IntoIterator<Item = Hex>) -> Self {
        let lookup: HashSet<Hex> = hexes.into_iter().collect();
        let mut hexes: Vec<Hex> = lookup.iter().copied().collect();
        hexes.sort_unstable();

        Self { hexes, lookup }
    }

    /// Hexes of the region.
    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    /// Iterates over hexes of the region.
    pub fn iter(&self) -> impl Iterator<Item = &Hex> {
        self.hexes.iter()
    }

    /// Returns true if the hex belongs to the region.
    pub fn contains(&self, hex: &Hex) -> bool {
        self.lookup.contains(hex)
    }

    /// Number of hexes in the region.
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Returns true if the region has no hexes.
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Region with the hexes of both regions.
    pub fn union(&self, other: &Region) -> Region {
        Region::new(self.iter().chain(other.iter()).copied())
    }

    /// Region with the hexes present in both regions.
    pub fn intersection(&self, other: &Region) -> Region {
        Region::new(self.iter().filter(|hex| other.contains(hex)).copied())
    }
}

impl IntoIterator for Region {
    type Item = Hex;
    type IntoIter = std::vec::IntoIter<Hex>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.into_iter()
    }
}

/// Returns true if the `point` lies inside the closed polygon, using the winding number rule.
pub(crate) fn contains_point(polygon: &[Point2d], point: &Point2d) -> bool {
    let mut wn = 0i64;
    let segments = polygon.iter().zip(polygon.iter().cycle().skip(1));

    for (from, to) in segments {
        let side = (to.x - from.x) * (point.y - from.y) - (point.x - from.x) * (to.y - from.y);
        if from.y <= point.y {
            if to.y > point.y && side > 0.0 {
                wn += 1;
            }
        } else if to.y <= point.y && side < 0.0 {
            wn -= 1;
        }
    }

    wn != 0
}
