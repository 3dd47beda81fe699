use crate::error::GeometryError;
use crate::geometry::{Point, Polygon, Rectangle, Shape, Square, Triangle};

/// Angle an obstacle turns by on every world tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStep {
    #[default]
    Static,
    Quarter,
    Half,
    ThreeQuarters,
}

impl RotationStep {
    pub const ALL: [RotationStep; 4] = [
        RotationStep::Static,
        RotationStep::Quarter,
        RotationStep::Half,
        RotationStep::ThreeQuarters,
    ];

    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            RotationStep::Static => 0.0,
            RotationStep::Quarter => 90.0,
            RotationStep::Half => 180.0,
            RotationStep::ThreeQuarters => 270.0,
        }
    }
}

/// A placed square, rectangle or triangle with an optional rotation schedule.
#[derive(Debug, Clone)]
pub struct Obstacle {
    shape: Shape,
    size: u32,
    long_side: Option<u32>,
    pivot: Point,
    step: RotationStep,
}

impl Obstacle {
    /// Square of side `size` with top-left corner `origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `size` is zero.
    pub fn square(origin: Point, size: u32) -> Result<Self, GeometryError> {
        let sq = Square::axis_aligned(origin, f64::from(size))?;
        Ok(Self::static_shape(sq.into(), size, None))
    }

    /// Rectangle `long_side` wide and `size` tall with top-left corner `origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either side is zero.
    pub fn rectangle(origin: Point, size: u32, long_side: u32) -> Result<Self, GeometryError> {
        let rect = Rectangle::axis_aligned(origin, f64::from(long_side), f64::from(size))?;
        Ok(Self::static_shape(rect.into(), size, Some(long_side)))
    }

    /// Right triangle with legs of length `size` along +x and +y from `origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `size` is zero.
    pub fn triangle(origin: Point, size: u32) -> Result<Self, GeometryError> {
        let s = f64::from(size);
        let tri = Triangle::new(vec![origin, origin.translate(s, 0.0), origin.translate(0.0, s)])?;
        Ok(Self::static_shape(tri.into(), size, None))
    }

    fn static_shape(shape: Shape, size: u32, long_side: Option<u32>) -> Self {
        let pivot = shape.centroid();
        Self {
            shape,
            size,
            long_side,
            pivot,
            step: RotationStep::Static,
        }
    }

    /// Sets the pivot and per-tick rotation step.
    #[must_use]
    pub fn with_rotation(mut self, pivot: Point, step: RotationStep) -> Self {
        self.pivot = pivot;
        self.step = step;
        self
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Outline polygon; every obstacle constructor builds one.
    #[must_use]
    pub fn polygon(&self) -> Option<&Polygon> {
        self.shape.polygon()
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Width of a rectangular obstacle, `None` for the other shapes.
    #[must_use]
    pub fn long_side(&self) -> Option<u32> {
        self.long_side
    }

    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    #[must_use]
    pub fn step(&self) -> RotationStep {
        self.step
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.step != RotationStep::Static
    }

    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        self.shape.all_int_points()
    }

    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        self.shape.boundary_int_points()
    }

    /// Turns the obstacle by its step about its pivot. Static obstacles are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if lattice snapping breaks the shape; the
    /// obstacle keeps its previous position in that case.
    pub fn rotate(&mut self) -> Result<(), GeometryError> {
        if !self.is_rotating() {
            return Ok(());
        }
        self.shape = self.shape.rotate(self.step.degrees(), Some(&self.pivot))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_anchored_at_origin() {
        let sq = Obstacle::square(Point::new(6.0, 12.0), 3).unwrap();
        assert_eq!(sq.shape().to_string(), "Square: [(6,12), (9,12), (9,15), (6,15)]");
        assert_eq!(sq.all_int_points().len(), 16);

        let rect = Obstacle::rectangle(Point::new(0.0, 0.0), 2, 5).unwrap();
        assert_eq!(rect.shape().to_string(), "Rectangle: [(0,0), (5,0), (5,2), (0,2)]");
        assert_eq!(rect.long_side(), Some(5));

        let tri = Obstacle::triangle(Point::new(0.0, 0.0), 3).unwrap();
        assert_eq!(tri.shape().to_string(), "Triangle: [(0,0), (3,0), (0,3)]");
        assert_eq!(tri.polygon().unwrap().len(), 3);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Obstacle::square(Point::new(0.0, 0.0), 0).is_err());
        assert!(Obstacle::triangle(Point::new(0.0, 0.0), 0).is_err());
    }

    #[test]
    fn static_obstacles_do_not_move() {
        let mut sq = Obstacle::square(Point::new(0.0, 0.0), 2).unwrap();
        assert!(!sq.is_rotating());
        sq.rotate().unwrap();
        assert_eq!(sq.shape().to_string(), "Square: [(0,0), (2,0), (2,2), (0,2)]");
    }

    #[test]
    fn rotating_obstacle_turns_about_pivot() {
        let mut sq = Obstacle::square(Point::new(2.0, 2.0), 2)
            .unwrap()
            .with_rotation(Point::new(2.0, 2.0), RotationStep::Half);
        assert!(sq.is_rotating());
        sq.rotate().unwrap();
        assert_eq!(sq.shape().to_string(), "Square: [(2,2), (0,2), (0,0), (2,0)]");
        sq.rotate().unwrap();
        assert_eq!(sq.shape().to_string(), "Square: [(2,2), (4,2), (4,4), (2,4)]");
    }
}
