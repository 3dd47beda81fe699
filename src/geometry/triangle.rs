use std::fmt;

use crate::error::GeometryError;
use crate::math::raster_2d::bresenham;

use super::point::write_vertices;
use super::{Point, Polygon};

/// A three-vertex polygon.
#[derive(Debug, Clone)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Creates a triangle from three non-collinear vertices.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the polygon is invalid or does not
    /// have exactly three vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        Self::from_polygon(Polygon::new(vertices)?)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::VertexCount`] unless `polygon` has three vertices.
    pub fn from_polygon(polygon: Polygon) -> Result<Self, GeometryError> {
        if polygon.len() != 3 {
            return Err(GeometryError::VertexCount {
                shape: "triangle",
                expected: 3,
                found: polygon.len(),
            });
        }
        Ok(Self { polygon })
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

    /// # Errors
    ///
    /// Returns a [`GeometryError`] if lattice snapping collapses the triangle.
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

    /// Same as [`Triangle::boundary_int_points`]: triangles are hollow.
    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        self.boundary_int_points()
    }

    /// Bresenham walk of each edge in vertex order. Shared vertices appear
    /// once per incident edge.
    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for edge in self.polygon.segments() {
            bresenham(edge.point1().as_point2(), edge.point2().as_point2(), &mut out);
        }
        out.into_iter().map(Point::from).collect()
    }
}

impl AsRef<Polygon> for Triangle {
    fn as_ref(&self) -> &Polygon {
        &self.polygon
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Triangle: ")?;
        write_vertices(f, self.vertices())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tri(s: &str) -> Triangle {
        s.parse().unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(tri("2 1 4 1 3 4").to_string(), "Triangle: [(2,1), (4,1), (3,4)]");
        assert_eq!(tri("1 1 2 3 2 1").to_string(), "Triangle: [(1,1), (2,3), (2,1)]");
    }

    #[test]
    fn rejects_wrong_vertex_count() {
        let r: Result<Triangle, _> = "0 0 3 0 3 3 0 3".parse();
        assert!(r.is_err());
        let r = Triangle::from_polygon("0 0 3 0 3 3 0 3".parse().unwrap());
        assert!(matches!(r, Err(GeometryError::VertexCount { expected: 3, found: 4, .. })));
    }

    #[test]
    fn rotate() {
        assert_eq!(
            tri("2 1 4 1 3 4").rotate(180.0, None).unwrap().to_string(),
            "Triangle: [(4,3), (2,3), (3,0)]"
        );
        assert_eq!(
            tri("1 1 2 3 2 1").rotate(-90.0, Some(&Point::new(2.0, 1.0))).unwrap().to_string(),
            "Triangle: [(2,2), (4,1), (2,1)]"
        );
    }

    #[test]
    fn translate_and_recenter() {
        assert_eq!(tri("2 1 4 1 3 4").translate(1.0, 1.0).to_string(), "Triangle: [(3,2), (5,2), (4,5)]");
        assert_eq!(tri("1 1 2 3 2 1").translate(4.0, 7.0).to_string(), "Triangle: [(5,8), (6,10), (6,8)]");
        assert_eq!(tri("2 1 4 1 3 4").new_centroid(5.0, 5.0).to_string(), "Triangle: [(4,4), (6,4), (5,7)]");
        assert_eq!(
            tri("1 1 2 3 2 1").new_centroid(23.0, 15.0).to_string(),
            "Triangle: [(22,14), (23,16), (23,14)]"
        );
    }

    #[test]
    fn rasterizes_edges_only() {
        let t = tri("0 0 3 0 3 3");
        let expected = vec![
            (0, 0), (1, 0), (2, 0), (3, 0),
            (3, 0), (3, 1), (3, 2), (3, 3),
            (3, 3), (2, 2), (1, 1), (0, 0),
        ];
        let boundary: Vec<_> = t.boundary_int_points().iter().map(Point::cell).collect();
        let all: Vec<_> = t.all_int_points().iter().map(Point::cell).collect();
        assert_eq!(boundary, expected);
        assert_eq!(all, expected);
    }
}
