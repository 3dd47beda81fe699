use std::fmt;

use crate::error::GeometryError;
use crate::math::Vector2;

use super::point::write_vertices;
use super::{Line, Point, Segment};

/// A simple polygon given by its ordered vertices.
///
/// Vertex order defines the edges cyclically. Construction enforces that no
/// three consecutive vertices are collinear and that no two non-adjacent
/// edges intersect. Polygons are immutable: every transform returns a new one.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon, validating simplicity.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than three
    /// vertices, [`GeometryError::CoincidentPoints`] or
    /// [`GeometryError::CollinearVertices`] for degenerate consecutive
    /// vertices, and [`GeometryError::SelfIntersecting`] when two
    /// non-adjacent edges cross.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        validate(&vertices)?;
        Ok(Self { vertices })
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no vertices, which never holds once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges, closing the loop back to the first vertex.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::from_validated(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v.as_point2().coords);
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertices.len() as f64;
        Point::new(sum.x / n, sum.y / n)
    }

    /// Rotates every vertex by `angle` degrees about `pivot`, defaulting to
    /// the centroid.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if lattice snapping makes the result
    /// invalid.
    pub fn rotate(&self, angle: f64, pivot: Option<&Point>) -> Result<Self, GeometryError> {
        let pivot = pivot.copied().unwrap_or_else(|| self.centroid());
        Self::new(self.vertices.iter().map(|v| v.rotate(angle, &pivot)).collect())
    }

    /// Shifts every vertex by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v.translate(dx, dy)).collect(),
        }
    }

    /// Translates so that the centroid lands on `(x, y)`.
    #[must_use]
    pub fn new_centroid(&self, x: f64, y: f64) -> Self {
        let c = self.centroid();
        self.translate(x - c.x(), y - c.y())
    }

    /// Returns `true` if any edge of `self` intersects any edge of `other`.
    #[must_use]
    pub fn intersects<P: AsRef<Polygon>>(&self, other: &P) -> bool {
        let other = other.as_ref();
        self.segments()
            .any(|a| other.segments().any(|b| a.intersects(&b)))
    }

    /// Returns `true` if both polygons have the same edge set, regardless of
    /// starting vertex or winding.
    #[must_use]
    pub fn duplicated<P: AsRef<Polygon>>(&self, other: &P) -> bool {
        let other = other.as_ref();
        if self.len() != other.len() {
            return false;
        }
        self.segments()
            .all(|a| other.segments().any(|b| a == b))
    }

    /// Returns the vertex that is minimal on both axes at once, if any.
    ///
    /// Shapes without such a vertex (a diamond, for instance) yield `None`.
    #[must_use]
    pub fn top_left(&self) -> Option<Point> {
        self.vertices
            .iter()
            .find(|v| {
                self.vertices
                    .iter()
                    .all(|o| v.x() <= o.x() && v.y() <= o.y())
            })
            .copied()
    }
}

impl AsRef<Polygon> for Polygon {
    fn as_ref(&self) -> &Polygon {
        self
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon of {} vertices: ", self.len())?;
        write_vertices(f, &self.vertices)
    }
}

fn validate(vertices: &[Point]) -> Result<(), GeometryError> {
    let n = vertices.len();
    if n < 3 {
        return Err(GeometryError::TooFewVertices(n));
    }

    for i in 0..n {
        let line = Line::new(vertices[i], vertices[(i + 1) % n])?;
        if line.is_collinear(&vertices[(i + 2) % n]) {
            return Err(GeometryError::CollinearVertices { index: i });
        }
    }

    for i in 0..n {
        for j in (i + 2)..n {
            // The first and last edges share vertex 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let a = Segment::from_validated(vertices[i], vertices[(i + 1) % n]);
            let b = Segment::from_validated(vertices[j], vertices[(j + 1) % n]);
            if a.intersects(&b) {
                return Err(GeometryError::SelfIntersecting { first: i, second: j });
            }
        }
    }
    Ok(())
}
