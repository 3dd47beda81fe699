pub mod orient_2d;
pub mod raster_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Slope used in place of infinity for vertical lines.
pub const VERTICAL_SLOPE: f64 = f64::MAX;

/// Rounds to the nearest integer, sending exact halves towards positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Truncates a lattice coordinate towards zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate(value: f64) -> i32 {
    value as i32
}
