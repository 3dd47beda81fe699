use std::fmt;

use crate::error::GeometryError;
use crate::math::orient_2d::is_right_angle;
use crate::math::raster_2d::{axis_edge, bresenham, point_in_polygon, LatticeBox};
use crate::math::{Point2, TOLERANCE};

use super::point::write_vertices;
use super::{Circle, Point, Polygon, Shape};

/// A four-sided polygon whose corners are all right angles.
#[derive(Debug, Clone)]
pub struct Rectangle {
    polygon: Polygon,
}

impl Rectangle {
    /// Creates a rectangle from four vertices in boundary order.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the vertices do not form a valid
    /// polygon, are not exactly four, have degenerate diagonals, or any
    /// corner is not a right angle.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        Self::from_polygon(Polygon::new(vertices)?)
    }

    /// Checks the rectangle invariants on an already valid polygon.
    ///
    /// # Errors
    ///
    /// See [`Rectangle::new`].
    pub fn from_polygon(polygon: Polygon) -> Result<Self, GeometryError> {
        let v = polygon.vertices();
        if v.len() != 4 {
            return Err(GeometryError::VertexCount {
                shape: "rectangle",
                expected: 4,
                found: v.len(),
            });
        }
        if v[0].distance(&v[2]) < TOLERANCE || v[1].distance(&v[3]) < TOLERANCE {
            return Err(GeometryError::DegenerateDiagonals);
        }
        for corner in 0..4 {
            let a = v[(corner + 3) % 4].as_point2();
            let b = v[corner].as_point2();
            let c = v[(corner + 1) % 4].as_point2();
            if !is_right_angle(a, b, c) {
                return Err(GeometryError::NotRightAngle { corner });
            }
        }
        Ok(Self { polygon })
    }

    /// Axis-aligned rectangle with top-left corner `origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either side is not positive.
    pub fn axis_aligned(origin: Point, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(vec![
            origin,
            origin.translate(width, 0.0),
            origin.translate(width, height),
            origin.translate(0.0, height),
        ])
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    #[must_use]
    pub fn centroid(&self) -> Point {
        self.polygon.centroid()
    }

    /// Rotates about `pivot` (centroid when `None`), re-validating the result.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if lattice snapping breaks the rectangle.
    pub fn rotate(&self, angle: f64, pivot: Option<&Point>) -> Result<Self, GeometryError> {
        Self::from_polygon(self.polygon.rotate(angle, pivot)?)
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            polygon: self.polygon.translate(dx, dy),
        }
    }

    #[must_use]
    pub fn new_centroid(&self, x: f64, y: f64) -> Self {
        Self {
            polygon: self.polygon.new_centroid(x, y),
        }
    }

    #[must_use]
    pub fn intersects<P: AsRef<Polygon>>(&self, other: &P) -> bool {
        self.polygon.intersects(other)
    }

    #[must_use]
    pub fn duplicated<P: AsRef<Polygon>>(&self, other: &P) -> bool {
        self.polygon.duplicated(other)
    }

    /// Returns `true` if every edge is horizontal or vertical.
    #[must_use]
    pub fn is_axis_aligned(&self) -> bool {
        self.polygon.segments().all(|s| {
            (s.point1().x() - s.point2().x()).abs() < TOLERANCE
                || (s.point1().y() - s.point2().y()).abs() < TOLERANCE
        })
    }

    /// Truncated integer bounding box of the vertices.
    #[must_use]
    pub fn lattice_box(&self) -> LatticeBox {
        lattice_box_of(self.vertices())
    }

    /// Every lattice point covered by the filled rectangle.
    ///
    /// Axis-aligned rectangles enumerate their bounding grid row by row.
    /// Rotated ones keep only the grid points inside or on the outline.
    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        let mut grid = Vec::new();
        self.lattice_box().fill(&mut grid);
        if !self.is_axis_aligned() {
            let corners: Vec<Point2> = self.vertices().iter().map(|v| *v.as_point2()).collect();
            grid.retain(|p| point_in_polygon(p, &corners));
        }
        grid.into_iter().map(Point::from).collect()
    }

    /// Lattice points on the outline, walked edge by edge.
    ///
    /// Corners appear once per incident edge. Axis-aligned edges are walked
    /// along their axis; slanted edges use Bresenham.
    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        let slanted = !self.is_axis_aligned();
        let mut out = Vec::new();
        for edge in self.polygon.segments() {
            let (a, b) = (edge.point1().as_point2(), edge.point2().as_point2());
            if slanted {
                bresenham(a, b, &mut out);
            } else {
                axis_edge(a, b, &mut out);
            }
        }
        out.into_iter().map(Point::from).collect()
    }
}

impl AsRef<Polygon> for Rectangle {
    fn as_ref(&self) -> &Polygon {
        &self.polygon
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rectangle: ")?;
        write_vertices(f, self.vertices())
    }
}

/// A rectangle with four equal sides.
#[derive(Debug, Clone)]
pub struct Square {
    rectangle: Rectangle,
}

impl Square {
    /// Creates a square from four vertices in boundary order.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the vertices do not form a rectangle or
    /// the side lengths differ.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        Self::from_rectangle(Rectangle::new(vertices)?)
    }

    /// Checks the equal-sides invariant on a valid rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnequalEdges`] if the sides differ.
    pub fn from_rectangle(rectangle: Rectangle) -> Result<Self, GeometryError> {
        let v = rectangle.vertices();
        let sides = [
            v[0].distance(&v[1]),
            v[1].distance(&v[2]),
            v[2].distance(&v[3]),
            v[3].distance(&v[0]),
        ];
        if sides.windows(2).any(|w| (w[0] - w[1]).abs() >= TOLERANCE) {
            return Err(GeometryError::UnequalEdges);
        }
        Ok(Self { rectangle })
    }

    /// Axis-aligned square with top-left corner `origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `side` is not positive.
    pub fn axis_aligned(origin: Point, side: f64) -> Result<Self, GeometryError> {
        Self::from_rectangle(Rectangle::axis_aligned(origin, side, side)?)
    }

    #[must_use]
    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        self.rectangle.polygon()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        self.rectangle.vertices()
    }

    #[must_use]
    pub fn centroid(&self) -> Point {
        self.rectangle.centroid()
    }

    /// Rotates about `pivot` (centroid when `None`), re-validating the result.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if lattice snapping breaks the square.
    pub fn rotate(&self, angle: f64, pivot: Option<&Point>) -> Result<Self, GeometryError> {
        Self::from_rectangle(self.rectangle.rotate(angle, pivot)?)
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            rectangle: self.rectangle.translate(dx, dy),
        }
    }

    #[must_use]
    pub fn new_centroid(&self, x: f64, y: f64) -> Self {
        Self {
            rectangle: self.rectangle.new_centroid(x, y),
        }
    }

    #[must_use]
    pub fn intersects<P: AsRef<Polygon>>(&self, other: &P) -> bool {
        self.rectangle.intersects(other)
    }

    #[must_use]
    pub fn duplicated<P: AsRef<Polygon>>(&self, other: &P) -> bool {
        self.rectangle.duplicated(other)
    }

    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        self.rectangle.all_int_points()
    }

    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        self.rectangle.boundary_int_points()
    }

    /// Bounding-box containment of another polygon.
    ///
    /// Compares the truncated vertices of `other` against this square's
    /// truncated bounding box. This is not geometric containment: rotated
    /// shapes may be misclassified.
    #[must_use]
    pub fn contains_polygon<P: AsRef<Polygon>>(&self, other: &P) -> bool {
        let bbox = self.rectangle.lattice_box();
        other.as_ref().vertices().iter().all(|v| {
            let (x, y) = v.cell();
            bbox.contains(f64::from(x), f64::from(y))
        })
    }

    /// Returns `true` if the circle's axis-aligned bounding square lies
    /// within this square's bounding box.
    #[must_use]
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        let bbox = self.rectangle.lattice_box();
        let (c, r) = (circle.center(), circle.radius());
        bbox.contains(c.x() - r, c.y() - r) && bbox.contains(c.x() + r, c.y() + r)
    }

    /// Dispatches to [`Square::contains_polygon`] or [`Square::contains_circle`].
    #[must_use]
    pub fn contains_shape(&self, shape: &Shape) -> bool {
        match shape {
            Shape::Circle(c) => self.contains_circle(c),
            other => other.polygon().is_some_and(|p| self.contains_polygon(p)),
        }
    }
}

impl AsRef<Polygon> for Square {
    fn as_ref(&self) -> &Polygon {
        self.rectangle.polygon()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Square: ")?;
        write_vertices(f, self.vertices())
    }
}

fn lattice_box_of(vertices: &[Point]) -> LatticeBox {
    let corners: Vec<Point2> = vertices.iter().map(|v| *v.as_point2()).collect();
    // Vertex lists of constructed shapes are never empty.
    LatticeBox::of(&corners).unwrap_or(LatticeBox {
        min_x: 0,
        min_y: 0,
        max_x: -1,
        max_y: -1,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn rect(s: &str) -> Rectangle {
        s.parse().unwrap()
    }

    fn square(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn cells(points: &[Point]) -> Vec<(i32, i32)> {
        points.iter().map(Point::cell).collect()
    }

    #[test]
    fn rectangle_display() {
        assert_eq!(rect("1 1 2 1 2 2 1 2").to_string(), "Rectangle: [(1,1), (2,1), (2,2), (1,2)]");
        assert_eq!(rect("3 3 5 3 5 5 3 5").to_string(), "Rectangle: [(3,3), (5,3), (5,5), (3,5)]");
    }

    #[test]
    fn rectangle_rejects_non_right_angles() {
        let r = Rectangle::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(5.0, 2.0),
            Point::new(1.0, 2.0),
        ]);
        assert!(matches!(r, Err(GeometryError::NotRightAngle { .. })));
    }

    #[test]
    fn rectangle_rejects_triangles() {
        let r = Rectangle::new(vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 2.0)]);
        assert!(matches!(r, Err(GeometryError::VertexCount { expected: 4, found: 3, .. })));
    }

    #[test]
    fn rectangle_rotate() {
        assert_eq!(
            rect("1 1 3 1 3 5 1 5").rotate(90.0, None).unwrap().to_string(),
            "Rectangle: [(4,2), (4,4), (0,4), (0,2)]"
        );
        assert_eq!(
            rect("1 1 3 1 3 5 1 5").rotate(-90.0, Some(&Point::new(3.0, 1.0))).unwrap().to_string(),
            "Rectangle: [(3,3), (3,1), (7,1), (7,3)]"
        );
    }

    #[test]
    fn rectangle_translate_and_recenter() {
        assert_eq!(
            rect("1 1 5 1 5 2 1 2 ").translate(-1.0, 3.0).to_string(),
            "Rectangle: [(0,4), (4,4), (4,5), (0,5)]"
        );
        let r = rect("1 1 5 1 5 3 1 3");
        assert_eq!(r.new_centroid(3.0, 3.0).to_string(), "Rectangle: [(1,2), (5,2), (5,4), (1,4)]");
        assert_eq!(r.new_centroid(14.0, 7.0).to_string(), "Rectangle: [(12,6), (16,6), (16,8), (12,8)]");
    }

    #[test]
    fn rectangle_all_points_is_full_grid() {
        let points = rect("0 0 3 0 3 3 0 3").all_int_points();
        assert_eq!(points.len(), 16);
        let expected: Vec<(i32, i32)> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        assert_eq!(cells(&points), expected);
    }

    #[test]
    fn rectangle_boundary_walks_each_edge() {
        let points = rect("0 0 3 0 3 3 0 3").boundary_int_points();
        assert_eq!(
            cells(&points),
            vec![
                (0, 0), (1, 0), (2, 0), (3, 0),
                (3, 0), (3, 1), (3, 2), (3, 3),
                (0, 3), (1, 3), (2, 3), (3, 3),
                (0, 0), (0, 1), (0, 2), (0, 3),
            ]
        );
        let distinct: HashSet<_> = cells(&points).into_iter().collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn rotated_rectangle_rasterizes_its_own_area() {
        let diamond = square("4 3 5 4 4 5 3 4");
        assert!(!diamond.rectangle().is_axis_aligned());
        let all: HashSet<_> = cells(&diamond.all_int_points()).into_iter().collect();
        assert_eq!(all, HashSet::from([(4, 3), (5, 4), (4, 5), (3, 4), (4, 4)]));
        let outline: HashSet<_> = cells(&diamond.boundary_int_points()).into_iter().collect();
        assert_eq!(outline, HashSet::from([(4, 3), (5, 4), (4, 5), (3, 4)]));
    }

    #[test]
    fn square_rejects_unequal_sides() {
        let r: Result<Square, _> = "0 0 3 0 3 2 0 2".parse();
        assert!(r.is_err());
    }

    #[test]
    fn square_transforms() {
        let q1 = square("1 1 2 1 2 2 1 2");
        let q2 = square("3 3 5 3 5 5 3 5");
        assert_eq!(q1.to_string(), "Square: [(1,1), (2,1), (2,2), (1,2)]");
        assert_eq!(
            q1.rotate(-90.0, Some(&Point::new(2.0, 1.0))).unwrap().to_string(),
            "Square: [(2,2), (2,1), (3,1), (3,2)]"
        );
        assert_eq!(q2.rotate(45.0, None).unwrap().to_string(), "Square: [(4,3), (5,4), (4,5), (3,4)]");
        assert_eq!(q1.translate(5.0, 7.0).to_string(), "Square: [(6,8), (7,8), (7,9), (6,9)]");
        assert_eq!(q2.new_centroid(21.0, 6.0).to_string(), "Square: [(20,5), (22,5), (22,7), (20,7)]");
    }

    #[test]
    fn square_contains_polygon_by_bounding_box() {
        let outer = square("1 1 4 1 4 4 1 4");
        assert!(outer.contains_polygon(&square("2 2 3 2 3 3 2 3")));
        assert!(!outer.contains_polygon(&square("3 3 5 3 5 5 3 5")));
        assert!(!outer.contains_polygon(&square("5 5 6 5 6 6 5 6")));
    }

    #[test]
    fn square_contains_circle_by_bounding_box() {
        let sq = square("0 0 10 0 10 10 0 10");
        assert!(sq.contains_circle(&Circle::new(Point::new(5.0, 5.0), 3.0).unwrap()));
        assert!(!sq.contains_circle(&Circle::new(Point::new(5.0, 5.0), 6.0).unwrap()));
        assert!(!sq.contains_circle(&Circle::new(Point::new(9.0, 9.0), 3.0).unwrap()));
        assert!(!sq.contains_circle(&Circle::new(Point::new(20.0, 20.0), 5.0).unwrap()));
    }

    #[test]
    fn square_contains_shape_dispatches() {
        let sq = square("0 0 10 0 10 10 0 10");
        assert!(sq.contains_shape(&Shape::Circle(Circle::new(Point::new(5.0, 5.0), 2.0).unwrap())));
        assert!(sq.contains_shape(&Shape::Triangle("1 1 4 1 1 4".parse().unwrap())));
        assert!(!sq.contains_shape(&Shape::Rectangle(rect("8 8 12 8 12 9 8 9"))));
    }
}
