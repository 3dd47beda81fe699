use crate::error::GeometryError;
use crate::geometry::{Circle, Point, Shape, Square};

/// A placed piece of food: a square or a circle.
#[derive(Debug, Clone)]
pub struct Food {
    shape: Shape,
    size: u32,
}

impl Food {
    /// Square food of side `size` with top-left corner `origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `size` is zero.
    pub fn square(origin: Point, size: u32) -> Result<Self, GeometryError> {
        let sq = Square::axis_aligned(origin, f64::from(size))?;
        Ok(Self {
            shape: sq.into(),
            size,
        })
    }

    /// Circle food inscribed in the `size` box at `origin`.
    ///
    /// An odd size equal to the snake `edge` is shrunk by one so the circle
    /// never spills past the head square. Size 1 gets radius 1, anything
    /// else radius `size / 2`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the resulting radius is not positive.
    pub fn circle(origin: Point, size: u32, edge: u32) -> Result<Self, GeometryError> {
        let size = if size == edge && size % 2 == 1 { size - 1 } else { size };
        let radius = if size == 1 { 1.0 } else { f64::from(size) / 2.0 };
        let circle = Circle::new(origin.translate(radius, radius), radius)?;
        Ok(Self {
            shape: circle.into(),
            size,
        })
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        self.shape.all_int_points()
    }

    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        self.shape.boundary_int_points()
    }
}
