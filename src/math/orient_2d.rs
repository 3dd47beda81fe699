use super::{Point2, Vector2, TOLERANCE, VERTICAL_SLOPE};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classifies the turn `a -> b -> c` by the sign of the cross product.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val.abs() < TOLERANCE {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Slope of the line through `a` and `b`, or [`VERTICAL_SLOPE`] when vertical.
#[must_use]
pub fn slope(a: &Point2, b: &Point2) -> f64 {
    if (a.x - b.x).abs() < TOLERANCE {
        return VERTICAL_SLOPE;
    }
    (b.y - a.y) / (b.x - a.x)
}

/// Returns `true` if `p` lies on the infinite line through `a` and `b`.
///
/// Coincidence with either defining point counts as collinear. Otherwise the
/// slopes `a -> b` and `a -> p` are compared within [`TOLERANCE`].
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, p: &Point2) -> bool {
    if nalgebra::distance(a, p) < TOLERANCE || nalgebra::distance(b, p) < TOLERANCE {
        return true;
    }
    (slope(a, b) - slope(a, p)).abs() < TOLERANCE
}

/// Segment-segment intersection test.
///
/// Uses the orientation test for proper crossings. When one endpoint of a
/// segment sits on the other segment's line while its opposite endpoint does
/// not, the pair is reported as non-intersecting. Touching and overlapping
/// configurations are therefore approximated, not resolved.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let touches = |p: &Point2, q: &Point2, x: &Point2, other: &Point2| {
        is_collinear(p, q, x) && !is_collinear(p, q, other)
    };
    if touches(a0, a1, b0, b1) || touches(a0, a1, b1, b0) {
        return false;
    }
    if touches(b0, b1, a0, a1) || touches(b0, b1, a1, a0) {
        return false;
    }

    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    o1 != o2 && o3 != o4
}

/// Returns `true` if the corner at `b` of the path `a -> b -> c` is square.
#[must_use]
pub fn is_right_angle(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let d1: Vector2 = b - a;
    let d2: Vector2 = c - b;
    d1.dot(&d2).abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_of_turns() {
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn vertical_slope_sentinel() {
        assert!((slope(&p(3.0, 0.0), &p(3.0, 9.0)) - VERTICAL_SLOPE).abs() < TOLERANCE);
        assert!((slope(&p(0.0, 0.0), &p(2.0, 1.0)) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_on_vertical_line() {
        assert!(is_collinear(&p(3.0, 0.0), &p(3.0, 9.0), &p(3.0, 20.0)));
        assert!(!is_collinear(&p(3.0, 0.0), &p(3.0, 9.0), &p(4.0, 20.0)));
    }

    #[test]
    fn crossing_diagonals_intersect() {
        assert!(segments_intersect(&p(1.0, 1.0), &p(2.0, 2.0), &p(2.0, 1.0), &p(1.0, 2.0)));
    }

    #[test]
    fn endpoint_touching_is_not_an_intersection() {
        // (2,2) lies on the first segment's line, (2,4) does not.
        assert!(!segments_intersect(&p(1.0, 1.0), &p(3.0, 3.0), &p(2.0, 2.0), &p(2.0, 4.0)));
        assert!(!segments_intersect(&p(7.0, 6.0), &p(10.0, 4.0), &p(7.0, 6.0), &p(9.0, 6.0)));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(!segments_intersect(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 1.0), &p(4.0, 1.0)));
    }

    #[test]
    fn intersection_is_symmetric() {
        let cases = [
            (p(0.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(4.0, 0.0)),
            (p(1.0, 1.0), p(3.0, 3.0), p(2.0, 2.0), p(2.0, 4.0)),
            (p(5.0, 5.0), p(8.0, 5.0), p(7.0, 4.0), p(7.0, 6.0)),
            (p(0.0, 0.0), p(1.0, 0.0), p(5.0, 5.0), p(6.0, 7.0)),
        ];
        for (a0, a1, b0, b1) in cases {
            assert_eq!(
                segments_intersect(&a0, &a1, &b0, &b1),
                segments_intersect(&b0, &b1, &a0, &a1)
            );
        }
    }

    #[test]
    fn right_angle_detection() {
        assert!(is_right_angle(&p(0.0, 0.0), &p(3.0, 0.0), &p(3.0, 2.0)));
        assert!(!is_right_angle(&p(0.0, 0.0), &p(3.0, 0.0), &p(4.0, 2.0)));
    }
}
