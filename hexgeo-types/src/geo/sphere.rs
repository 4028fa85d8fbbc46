/// Length of the equator of the spherical Earth model in meters.
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_016.685578488;

/// Length of one degree of longitude along the equator in meters.
pub const EARTH_METERS_PER_DEGREE: f64 = 111_319.490_793_273_58;

/// Maximum absolute latitude in degrees that the spherical Mercator projection can represent,
/// `atan(sinh(π))`. At this latitude the projected map becomes a square.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Half of the circumference, scaled into radians: number of meters per radian along the equator.
pub(crate) const METERS_PER_RADIAN: f64 = EARTH_CIRCUMFERENCE / 2.0 / std::f64::consts::PI;
