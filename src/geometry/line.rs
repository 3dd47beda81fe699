use crate::error::GeometryError;
use crate::math::orient_2d::{is_collinear, segments_intersect};
use crate::math::TOLERANCE;

use super::Point;

fn ensure_distinct(p1: &Point, p2: &Point) -> Result<(), GeometryError> {
    if p1.distance(p2) < TOLERANCE {
        return Err(GeometryError::CoincidentPoints {
            x: p1.x(),
            y: p1.y(),
        });
    }
    Ok(())
}

/// An infinite line through two distinct points.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    /// Creates a line through `p1` and `p2`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if the points coincide.
    pub fn new(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        ensure_distinct(&p1, &p2)?;
        Ok(Self { p1, p2 })
    }

    #[must_use]
    pub fn point1(&self) -> &Point {
        &self.p1
    }

    #[must_use]
    pub fn point2(&self) -> &Point {
        &self.p2
    }

    /// Returns `true` if `p` lies on this line (slope comparison).
    #[must_use]
    pub fn is_collinear(&self, p: &Point) -> bool {
        is_collinear(self.p1.as_point2(), self.p2.as_point2(), p.as_point2())
    }
}

/// A bounded segment between two distinct points.
///
/// Equality ignores endpoint order.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    /// Creates a segment from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] if the endpoints coincide.
    pub fn new(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        ensure_distinct(&p1, &p2)?;
        Ok(Self { p1, p2 })
    }

    /// Builds a segment from endpoints already known to be distinct.
    pub(crate) fn from_validated(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub fn point1(&self) -> &Point {
        &self.p1
    }

    #[must_use]
    pub fn point2(&self) -> &Point {
        &self.p2
    }

    /// The infinite line carrying this segment.
    #[must_use]
    pub fn line(&self) -> Line {
        Line {
            p1: self.p1,
            p2: self.p2,
        }
    }

    /// Segment intersection test.
    ///
    /// An endpoint resting on the other segment's line while the opposite
    /// endpoint does not is treated as no intersection. This is an accepted
    /// approximation for collinear and touching pairs, not an overlap solver.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(
            self.p1.as_point2(),
            self.p2.as_point2(),
            other.p1.as_point2(),
            other.p2.as_point2(),
        )
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap()
    }

    #[test]
    fn line_collinearity() {
        let line = Line::new(Point::new(45.0, 67.0), Point::new(79.0, 73.0)).unwrap();
        assert!(line.is_collinear(&Point::new(45.0, 67.0)));
        assert!(line.is_collinear(&Point::new(62.0, 70.0)));
        assert!(line.is_collinear(&Point::new(79.0, 73.0)));
        assert!(!line.is_collinear(&Point::new(46.0, 70.0)));
        assert_eq!(line.point1().to_string(), "(45,67)");
        assert_eq!(line.point2().to_string(), "(79,73)");
    }

    #[test]
    fn coincident_points_rejected() {
        assert!(matches!(
            Line::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0)),
            Err(GeometryError::CoincidentPoints { .. })
        ));
        assert!(Segment::new(Point::new(2.0, 3.0), Point::new(2.0, 3.0 + 1e-12)).is_err());
    }

    #[test]
    fn segment_intersections() {
        assert!(!seg(1.0, 1.0, 3.0, 3.0).intersects(&seg(2.0, 2.0, 2.0, 4.0)));
        assert!(!seg(7.0, 6.0, 10.0, 4.0).intersects(&seg(7.0, 6.0, 9.0, 6.0)));
        assert!(seg(1.0, 1.0, 2.0, 2.0).intersects(&seg(2.0, 1.0, 1.0, 2.0)));
    }

    #[test]
    fn segment_equality_ignores_order() {
        assert_ne!(seg(1.0, 1.0, 3.0, 3.0), seg(2.0, 2.0, 3.0, 3.0));
        assert_eq!(seg(2.0, 3.0, 4.0, 5.0), seg(4.0, 5.0, 2.0, 3.0));
    }

    #[test]
    fn segment_line_shares_endpoints() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert!(s.line().is_collinear(&Point::new(5.0, 5.0)));
    }
}
