use std::fmt;

use crate::error::GeometryError;

use super::{Circle, Point, Polygon, Rectangle, Square, Triangle};

/// One of the concrete shapes the engine places on the board.
#[derive(Debug, Clone)]
pub enum Shape {
    Square(Square),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    /// Short lowercase name of the variant, used in log events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Square(_) => "square",
            Shape::Rectangle(_) => "rectangle",
            Shape::Triangle(_) => "triangle",
            Shape::Circle(_) => "circle",
        }
    }

    /// The underlying polygon, `None` for circles.
    #[must_use]
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Square(s) => Some(s.polygon()),
            Shape::Rectangle(r) => Some(r.polygon()),
            Shape::Triangle(t) => Some(t.polygon()),
            Shape::Circle(_) => None,
        }
    }

    /// Vertex centroid for polygons, the center for circles.
    #[must_use]
    pub fn centroid(&self) -> Point {
        match self {
            Shape::Circle(c) => c.center(),
            other => other.polygon().map_or_else(|| Point::new(0.0, 0.0), Polygon::centroid),
        }
    }

    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        match self {
            Shape::Square(s) => s.all_int_points(),
            Shape::Rectangle(r) => r.all_int_points(),
            Shape::Triangle(t) => t.all_int_points(),
            Shape::Circle(c) => c.all_int_points(),
        }
    }

    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        match self {
            Shape::Square(s) => s.boundary_int_points(),
            Shape::Rectangle(r) => r.boundary_int_points(),
            Shape::Triangle(t) => t.boundary_int_points(),
            Shape::Circle(c) => c.boundary_int_points(),
        }
    }

    /// Rotates about `pivot`, defaulting to [`Shape::centroid`].
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the rotated vertices no longer satisfy
    /// the variant's invariants.
    pub fn rotate(&self, angle: f64, pivot: Option<&Point>) -> Result<Self, GeometryError> {
        Ok(match self {
            Shape::Square(s) => Shape::Square(s.rotate(angle, pivot)?),
            Shape::Rectangle(r) => Shape::Rectangle(r.rotate(angle, pivot)?),
            Shape::Triangle(t) => Shape::Triangle(t.rotate(angle, pivot)?),
            Shape::Circle(c) => Shape::Circle(c.rotate(angle, pivot.unwrap_or(&c.center()))),
        })
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        match self {
            Shape::Square(s) => Shape::Square(s.translate(dx, dy)),
            Shape::Rectangle(r) => Shape::Rectangle(r.translate(dx, dy)),
            Shape::Triangle(t) => Shape::Triangle(t.translate(dx, dy)),
            Shape::Circle(c) => Shape::Circle(c.translate(dx, dy)),
        }
    }
}

impl From<Square> for Shape {
    fn from(value: Square) -> Self {
        Shape::Square(value)
    }
}

impl From<Rectangle> for Shape {
    fn from(value: Rectangle) -> Self {
        Shape::Rectangle(value)
    }
}

impl From<Triangle> for Shape {
    fn from(value: Triangle) -> Self {
        Shape::Triangle(value)
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Square(s) => fmt::Display::fmt(s, f),
            Shape::Rectangle(r) => fmt::Display::fmt(r, f),
            Shape::Triangle(t) => fmt::Display::fmt(t, f),
            Shape::Circle(c) => fmt::Display::fmt(c, f),
        }
    }
}
