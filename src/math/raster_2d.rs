//! Integer-lattice rasterization kernels.
//!
//! All functions append lattice points to an output buffer in a fixed,
//! documented order so callers get reproducible point lists.

use super::{round_half_up, truncate, Point2, TOLERANCE};

/// Inclusive integer bounding box of a point set, coordinates truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl LatticeBox {
    /// Computes the truncated bounding box of `points`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            min_x: truncate(first.x),
            min_y: truncate(first.y),
            max_x: truncate(first.x),
            max_y: truncate(first.y),
        };
        for p in &points[1..] {
            let (x, y) = (truncate(p.x), truncate(p.y));
            bbox.min_x = bbox.min_x.min(x);
            bbox.min_y = bbox.min_y.min(y);
            bbox.max_x = bbox.max_x.max(x);
            bbox.max_y = bbox.max_y.max(y);
        }
        Some(bbox)
    }

    /// Returns `true` if `(x, y)` lies inside the box, borders included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= f64::from(self.min_x)
            && x <= f64::from(self.max_x)
            && y >= f64::from(self.min_y)
            && y <= f64::from(self.max_y)
    }

    /// Appends every lattice point of the box, row by row (y outer, x inner).
    pub fn fill(&self, out: &mut Vec<Point2>) {
        for y in self.min_y..=self.max_y {
            for x in self.min_x..=self.max_x {
                out.push(Point2::new(f64::from(x), f64::from(y)));
            }
        }
    }
}

/// Appends the lattice points of a vertical or horizontal edge.
///
/// An edge whose truncated endpoints share an x coordinate is walked along y,
/// anything else is walked along x at the start point's y. Both endpoints are
/// included, lowest coordinate first.
pub fn axis_edge(start: &Point2, end: &Point2, out: &mut Vec<Point2>) {
    let (sx, sy) = (truncate(start.x), truncate(start.y));
    let (ex, ey) = (truncate(end.x), truncate(end.y));
    if sx == ex {
        for y in sy.min(ey)..=sy.max(ey) {
            out.push(Point2::new(f64::from(sx), f64::from(y)));
        }
    } else {
        for x in sx.min(ex)..=sx.max(ex) {
            out.push(Point2::new(f64::from(x), f64::from(sy)));
        }
    }
}

/// Appends the Bresenham walk from `start` to `end`, both endpoints included.
///
/// Endpoints are first snapped to the lattice by rounding.
pub fn bresenham(start: &Point2, end: &Point2, out: &mut Vec<Point2>) {
    let mut x0 = truncate(round_half_up(start.x));
    let mut y0 = truncate(round_half_up(start.y));
    let x1 = truncate(round_half_up(end.x));
    let y1 = truncate(round_half_up(end.y));

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        out.push(Point2::new(f64::from(x0), f64::from(y0)));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Appends the lattice points of the disk `|p - center|² <= radius²`.
///
/// Scans columns left to right, each column top to bottom.
pub fn disk(center: &Point2, radius: f64, out: &mut Vec<Point2>) {
    let r2 = radius * radius;
    scan_circle_box(center, radius, out, |d2| d2 <= r2);
}

/// Appends lattice points whose squared distance to `center` is within
/// `tolerance` of `radius²`. Same scan order as [`disk`].
pub fn ring(center: &Point2, radius: f64, tolerance: f64, out: &mut Vec<Point2>) {
    let r2 = radius * radius;
    scan_circle_box(center, radius, out, |d2| (d2 - r2).abs() <= tolerance);
}

fn scan_circle_box(center: &Point2, radius: f64, out: &mut Vec<Point2>, keep: impl Fn(f64) -> bool) {
    let min_x = truncate((center.x - radius).floor());
    let max_x = truncate((center.x + radius).ceil());
    let min_y = truncate((center.y - radius).floor());
    let max_y = truncate((center.y + radius).ceil());

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let dx = f64::from(x) - center.x;
            let dy = f64::from(y) - center.y;
            if keep(dx * dx + dy * dy) {
                out.push(Point2::new(f64::from(x), f64::from(y)));
            }
        }
    }
}

/// Even-odd point-in-polygon test. Points on an edge count as inside.
#[must_use]
pub fn point_in_polygon(p: &Point2, vertices: &[Point2]) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % n];
        if on_segment(p, a, b) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross.abs() > TOLERANCE {
        return false;
    }
    p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}
