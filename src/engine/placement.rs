//! Randomised, overlap-free placement of obstacles and food.
//!
//! Both operations enumerate the movement-unit lattice of the arena, shuffle
//! it and take the first cell whose generated shape shares no lattice point
//! with anything already on the board.

use std::collections::HashSet;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::{debug, warn};

use crate::error::PlacementError;
use crate::geometry::Point;

use super::{ArenaConfig, Food, Obstacle, RotationStep, Snake};

type Cell = (i32, i32);

fn cells_of(points: &[Point]) -> impl Iterator<Item = Cell> + '_ {
    points.iter().map(Point::cell)
}

/// Top-left corners of every movement-unit cell that fits in the arena,
/// columns first.
fn lattice_origins(config: &ArenaConfig) -> Vec<Point> {
    let unit = config.unit();
    let max_x = config.width() - config.width() % unit;
    let max_y = config.height() - config.height() % unit;
    let step = usize::try_from(unit).unwrap_or(usize::MAX);
    let mut origins = Vec::new();
    for x in (0..max_x).step_by(step) {
        for y in (0..max_y).step_by(step) {
            origins.push(Point::new(f64::from(x), f64::from(y)));
        }
    }
    origins
}

/// Shape sizes are drawn from `[max(1, edge / 4), edge]`.
fn draw_size<R: Rng + ?Sized>(edge: u32, rng: &mut R) -> u32 {
    rng.random_range((edge / 4).max(1)..=edge)
}

/// Lattice cells already taken, built from the snake and placed shapes.
#[derive(Debug, Clone, Default)]
struct Occupancy {
    cells: HashSet<Cell>,
}

impl Occupancy {
    fn with_snake(snake: &Snake) -> Self {
        Self {
            cells: cells_of(&snake.all_int_points()).collect(),
        }
    }

    fn add(&mut self, points: &[Point]) {
        self.cells.extend(cells_of(points));
    }

    fn is_free(&self, points: &[Point]) -> bool {
        cells_of(points).all(|c| !self.cells.contains(&c))
    }
}

/// Places one obstacle on the arena lattice.
#[derive(Debug, Clone)]
pub struct PlaceObstacle {
    config: ArenaConfig,
    occupied: Occupancy,
}

impl PlaceObstacle {
    /// Creates a placement that avoids the snake's filled points.
    #[must_use]
    pub fn new(config: &ArenaConfig, snake: &Snake) -> Self {
        Self {
            config: *config,
            occupied: Occupancy::with_snake(snake),
        }
    }

    /// Also avoids the filled points of already placed obstacles.
    #[must_use]
    pub fn avoiding<'a, I>(mut self, obstacles: I) -> Self
    where
        I: IntoIterator<Item = &'a Obstacle>,
    {
        for o in obstacles {
            self.occupied.add(&o.all_int_points());
        }
        self
    }

    /// Runs the search.
    ///
    /// Each candidate draws a size and a shape uniformly among square,
    /// rectangle and triangle. The winner gets a pivot drawn from its outline
    /// points plus its centroid, and a uniform rotation step.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Exhausted`] if no cell is free.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Obstacle, PlacementError> {
        let edge = self.config.edge();
        let mut origins = lattice_origins(&self.config);
        origins.shuffle(rng);

        for origin in origins {
            let size = draw_size(edge, rng);
            let built = match rng.random_range(0..3) {
                0 => Obstacle::square(origin, size),
                1 => Obstacle::rectangle(origin, size, size + rng.random_range(1..=size)),
                _ => Obstacle::triangle(origin, size),
            };
            let Ok(obstacle) = built else {
                continue;
            };
            if !self.occupied.is_free(&obstacle.all_int_points()) {
                continue;
            }

            let mut pivots = obstacle.boundary_int_points();
            pivots.push(obstacle.shape().centroid());
            let pivot = pivots.choose(rng).copied().unwrap_or_else(|| obstacle.pivot());
            let step = RotationStep::ALL
                .choose(rng)
                .copied()
                .unwrap_or_default();
            debug!(
                kind = obstacle.shape().kind(),
                size,
                origin = %origin,
                pivot = %pivot,
                step = step.degrees(),
                "obstacle placed"
            );
            return Ok(obstacle.with_rotation(pivot, step));
        }

        warn!("no free cell left for an obstacle");
        Err(PlacementError::Exhausted("obstacle"))
    }
}

/// Places one piece of food on the arena lattice.
#[derive(Debug, Clone)]
pub struct PlaceFood {
    config: ArenaConfig,
    occupied: Occupancy,
}

impl PlaceFood {
    /// Creates a placement that avoids the snake's filled points.
    #[must_use]
    pub fn new(config: &ArenaConfig, snake: &Snake) -> Self {
        Self {
            config: *config,
            occupied: Occupancy::with_snake(snake),
        }
    }

    /// Also avoids the filled points of the given obstacles.
    #[must_use]
    pub fn avoiding<'a, I>(mut self, obstacles: I) -> Self
    where
        I: IntoIterator<Item = &'a Obstacle>,
    {
        for o in obstacles {
            self.occupied.add(&o.all_int_points());
        }
        self
    }

    /// Runs the search.
    ///
    /// Food is a square, or a circle with even odds unless the edge is 1.
    /// Food as large as the snake head must sit on a cell whose origin is a
    /// multiple of the edge on both axes, so the head can swallow it whole.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Exhausted`] if no cell is free.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Food, PlacementError> {
        let edge = self.config.edge();
        let mut origins = lattice_origins(&self.config);
        origins.shuffle(rng);

        for origin in origins {
            let size = draw_size(edge, rng);
            if size == edge {
                let (x, y) = origin.cell();
                let e = i32::try_from(edge).unwrap_or(i32::MAX);
                if x % e != 0 || y % e != 0 {
                    continue;
                }
            }
            let built = if edge == 1 || rng.random_range(0..2) == 0 {
                Food::square(origin, size)
            } else {
                Food::circle(origin, size, edge)
            };
            let Ok(food) = built else {
                continue;
            };
            if !self.occupied.is_free(&food.all_int_points()) {
                continue;
            }
            debug!(kind = food.shape().kind(), size = food.size(), origin = %origin, "food placed");
            return Ok(food);
        }

        warn!("no free cell left for food");
        Err(PlacementError::Exhausted("food"))
    }
}
