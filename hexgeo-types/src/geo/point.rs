use approx::AbsDiffEq;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Point on the surface of the Earth.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point on the surface of the Earth.
///
/// Longitude is expected in `(-180, 180]` and latitude in `[-90, 90]` degrees, but the value
/// itself does not enforce it. Use [`GeoPoint2d::validate`] to check.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lon: f64,
    lat: f64,
}

impl GeoPoint2d {
    /// Creates a point from longitude and latitude in degrees.
    pub const fn lonlat(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Creates a point from latitude and longitude in degrees.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }

    /// Checks that both coordinates are finite and the latitude is within `[-90, 90]`.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.lon.is_finite() && self.lat.is_finite() && self.lat.abs() <= 90.0 {
            Ok(())
        } else {
            Err(ProjectionError::InvalidCoordinates {
                lon: self.lon,
                lat: self.lat,
            })
        }
    }
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}

/// Creates a new [`GeoPoint2d`] from longitude and latitude values (in degrees).
///
/// ```
/// use hexgeo_types::geo::GeoPoint;
/// use hexgeo_types::lonlat;
///
/// let point = lonlat!(-73.0, 40.0);
/// assert_eq!(point.lat(), 40.0);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::geo::GeoPoint2d::lonlat($lon, $lat)
    };
}
