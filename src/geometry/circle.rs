use std::fmt;

use crate::error::GeometryError;
use crate::math::raster_2d::{disk, ring};
use crate::math::TOLERANCE;

use super::Point;

/// Squared-distance band that counts as "on" the circle outline.
const RING_TOLERANCE: f64 = 0.5;

/// A circle given by its center and a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveRadius`] if `radius <= 0`.
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if radius <= 0.0 || radius.is_nan() {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` if the discs touch or overlap.
    #[must_use]
    pub fn intersects(&self, other: &Circle) -> bool {
        self.center.distance(&other.center) <= self.radius + other.radius
    }

    /// Same center within tolerance and exactly the same radius.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn duplicated(&self, other: &Circle) -> bool {
        self.center.distance(&other.center) < TOLERANCE && self.radius == other.radius
    }

    /// Rotates the center about `pivot`; the radius is unchanged.
    #[must_use]
    pub fn rotate(&self, angle: f64, pivot: &Point) -> Self {
        Self {
            center: self.center.rotate(angle, pivot),
            radius: self.radius,
        }
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            center: self.center.translate(dx, dy),
            radius: self.radius,
        }
    }

    /// Lattice points of the closed disc, column by column.
    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        disk(self.center.as_point2(), self.radius, &mut out);
        out.into_iter().map(Point::from).collect()
    }

    /// Lattice points whose squared distance to the center is within 0.5 of
    /// the squared radius.
    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        ring(self.center.as_point2(), self.radius, RING_TOLERANCE, &mut out);
        out.into_iter().map(Point::from).collect()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle of radius {:?} and center {}", self.radius, self.center)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point::new(x, y), r).unwrap()
    }

    fn cells(points: &[Point]) -> Vec<(i32, i32)> {
        points.iter().map(Point::cell).collect()
    }

    #[test]
    fn accessors_and_display() {
        let c1 = circle(2.0, 2.0, 1.0);
        let c2 = circle(3.0, 5.0, 3.0);
        assert_eq!(c1.center().to_string(), "(2,2)");
        assert_abs_diff_eq!(c2.radius(), 3.0);
        assert_eq!(c1.to_string(), "Circle of radius 1.0 and center (2,2)");
        assert_eq!(c2.to_string(), "Circle of radius 3.0 and center (3,5)");
    }

    #[test]
    fn non_positive_radius_rejected() {
        assert_eq!(
            Circle::new(Point::new(0.0, 0.0), 0.0),
            Err(GeometryError::NonPositiveRadius(0.0))
        );
        assert!(Circle::new(Point::new(0.0, 0.0), -2.0).is_err());
    }

    #[test]
    fn intersects_when_touching() {
        let c1 = circle(2.0, 2.0, 1.0);
        assert!(c1.intersects(&circle(3.0, 5.0, 3.0)));
        assert!(!c1.intersects(&circle(10.0, 10.0, 5.0)));
        assert!(c1.intersects(&circle(5.0, 2.0, 2.0)));
    }

    #[test]
    fn duplicated_needs_same_radius() {
        let c1 = circle(2.0, 2.0, 1.0);
        assert!(!c1.duplicated(&circle(3.0, 5.0, 3.0)));
        assert!(c1.duplicated(&circle(2.0, 2.0, 1.0)));
        assert!(!c1.duplicated(&circle(2.0, 2.0, 1.5)));
    }

    #[test]
    fn rotate_and_translate_move_the_center() {
        let c1 = circle(2.0, 2.0, 1.0);
        let c2 = circle(3.0, 5.0, 3.0);
        assert_eq!(c1.rotate(90.0, &Point::new(1.0, 1.0)).to_string(), "Circle of radius 1.0 and center (0,2)");
        assert_eq!(c2.rotate(180.0, &Point::new(4.0, 4.0)).to_string(), "Circle of radius 3.0 and center (5,3)");
        assert_eq!(c1.translate(3.0, 3.0).to_string(), "Circle of radius 1.0 and center (5,5)");
        assert_eq!(c2.translate(13.0, 7.0).to_string(), "Circle of radius 3.0 and center (16,12)");
    }

    #[test]
    fn unit_circle_rasterization() {
        let c = circle(4.0, 4.0, 1.0);
        assert_eq!(cells(&c.all_int_points()), vec![(3, 4), (4, 3), (4, 4), (4, 5), (5, 4)]);
        assert_eq!(cells(&c.boundary_int_points()), vec![(3, 4), (4, 3), (4, 5), (5, 4)]);
    }
}
