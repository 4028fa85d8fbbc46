//! Points in the planar coordinates used by a hexagonal grid.
//!
//! Units of the coordinates depend on the [projection](crate::geo::Projection) that produced
//! them: meters, radians or even degrees passed through unchanged.

pub use nalgebra::Point2;
use num_traits::Float;

/// 2d point with `f64` coordinates.
pub type Point2d = Point2<f64>;

/// Point in 2d cartesian coordinates.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates are finite numbers.
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl<Num: Float + nalgebra::Scalar> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}
