use std::fmt;

use nalgebra::Rotation2;

use crate::math::{round_half_up, truncate, Point2, TOLERANCE};

/// An immutable 2D point.
///
/// Equality is tolerance-based: two points are equal when both coordinates
/// differ by less than [`TOLERANCE`].
#[derive(Debug, Clone, Copy)]
pub struct Point {
    coords: Point2,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Point2::new(x, y),
        }
    }

    /// Creates a point on the integer lattice.
    #[must_use]
    pub fn lattice(x: i32, y: i32) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Returns the underlying nalgebra point.
    #[must_use]
    pub fn as_point2(&self) -> &Point2 {
        &self.coords
    }

    /// Truncated integer cell this point falls in.
    #[must_use]
    pub fn cell(&self) -> (i32, i32) {
        (truncate(self.coords.x), truncate(self.coords.y))
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.coords, &other.coords)
    }

    /// Rotates around `pivot` by `angle` degrees (counter-clockwise in a
    /// y-up frame) and snaps the result to the nearest lattice point.
    ///
    /// The snap keeps every rotated shape on the integer lattice.
    #[must_use]
    pub fn rotate(&self, angle: f64, pivot: &Point) -> Point {
        let rotation = Rotation2::new(angle.to_radians());
        let rotated = pivot.coords + rotation * (self.coords - pivot.coords);
        Point::new(round_half_up(rotated.x), round_half_up(rotated.y))
    }

    /// Shifts the point by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.coords.x + dx, self.coords.y + dy)
    }

    /// Tolerance-based coordinate comparison.
    #[must_use]
    pub fn approx_eq(&self, other: &Point) -> bool {
        (self.coords.x - other.coords.x).abs() < TOLERANCE
            && (self.coords.y - other.coords.y).abs() < TOLERANCE
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl From<Point2> for Point {
    fn from(coords: Point2) -> Self {
        Self { coords }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.cell();
        write!(f, "({x},{y})")
    }
}

/// Formats a vertex list as `[(x1,y1), (x2,y2), ...]`.
pub(crate) fn write_vertices(f: &mut fmt::Formatter<'_>, vertices: &[Point]) -> fmt::Result {
    f.write_str("[")?;
    for (i, v) in vertices.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str("]")
}
