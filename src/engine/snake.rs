use std::collections::VecDeque;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{GeometryError, MovementError};
use crate::geometry::{Point, Square};

use super::{ArenaConfig, Bounds, Direction, Food, Obstacle};

/// Segments this close behind the head may be re-entered by a turning snake.
const EXEMPT_SEGMENTS: usize = 3;

/// A chain of equal square segments, head first.
///
/// Every move translates a fresh head by one movement unit (`edge + 1`) and
/// drops the tail, so the body length only changes through [`Snake::grow`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Square>,
    edge: u32,
    direction: Option<Direction>,
}

impl Snake {
    /// Creates a one-segment snake on a random movement-unit cell of the arena.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the head square cannot be built.
    pub fn new<R: Rng + ?Sized>(config: &ArenaConfig, rng: &mut R) -> Result<Self, GeometryError> {
        let unit = config.unit();
        let x = rng.random_range(0..config.width() / unit) * unit;
        let y = rng.random_range(0..config.height() / unit) * unit;
        Self::at(Point::new(f64::from(x), f64::from(y)), config.edge())
    }

    /// Creates a one-segment snake whose head has top-left corner `origin`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `edge` is zero.
    pub fn at(origin: Point, edge: u32) -> Result<Self, GeometryError> {
        let head = Square::axis_aligned(origin, f64::from(edge))?;
        Ok(Self {
            body: VecDeque::from([head]),
            edge,
            direction: None,
        })
    }

    #[must_use]
    pub fn edge(&self) -> u32 {
        self.edge
    }

    #[must_use]
    pub fn unit(&self) -> u32 {
        self.edge + 1
    }

    /// Current heading, `None` until the first accepted direction.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always `false`: a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The head segment.
    #[must_use]
    pub fn head(&self) -> &Square {
        &self.body[0]
    }

    /// Segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Square> + '_ {
        self.body.iter()
    }

    /// Changes heading. Reversing onto the body is refused once the snake has
    /// more than one segment.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.body.len() > 1 && self.direction.is_some_and(|d| d.is_opposite(direction)) {
            debug!(current = ?self.direction, requested = %direction, "reversal rejected");
            return false;
        }
        self.direction = Some(direction);
        true
    }

    /// [`Snake::set_direction`] from an angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`MovementError::InvalidDirection`] unless `degrees` is one of
    /// 0, 90, 180 or 270.
    pub fn set_direction_degrees(&mut self, degrees: i32) -> Result<bool, MovementError> {
        Ok(self.set_direction(Direction::from_degrees(degrees)?))
    }

    /// Moves one unit along the current heading. Does nothing while
    /// undirected.
    ///
    /// # Errors
    ///
    /// Returns [`MovementError::SelfCollision`] if the new head would land on
    /// a segment at index 3 or beyond; the snake is left unchanged.
    pub fn step(&mut self) -> Result<(), MovementError> {
        let Some(direction) = self.direction else {
            return Ok(());
        };
        let head = self.next_head(direction);
        if let Some(segment) = self.collides_with_body(&head) {
            return Err(MovementError::SelfCollision { segment });
        }
        trace!(direction = %direction, head = %head, "snake moved");
        self.body.pop_back();
        self.body.push_front(head);
        Ok(())
    }

    /// Appends a copy of the tail. The new segment overlaps the tail until
    /// the next move.
    pub fn grow(&mut self) {
        if let Some(tail) = self.body.back().cloned() {
            self.body.push_back(tail);
        }
    }

    /// Filled points of every segment, head first.
    #[must_use]
    pub fn all_int_points(&self) -> Vec<Point> {
        self.body.iter().flat_map(Square::all_int_points).collect()
    }

    /// Outline points of every segment, head first.
    #[must_use]
    pub fn boundary_int_points(&self) -> Vec<Point> {
        self.body.iter().flat_map(Square::boundary_int_points).collect()
    }

    /// Returns `true` if the head's bounding box contains the food.
    #[must_use]
    pub fn contains_food(&self, food: &Food) -> bool {
        self.head().contains_shape(food.shape())
    }

    /// Every snake point that coincides with an obstacle point.
    ///
    /// Exhaustive pairwise comparison: a snake point is reported once per
    /// matching obstacle point.
    #[must_use]
    pub fn find_intersections<'a, I>(&self, obstacles: I) -> Vec<Point>
    where
        I: IntoIterator<Item = &'a Obstacle>,
    {
        let body = self.all_int_points();
        let blocked: Vec<Point> = obstacles.into_iter().flat_map(Obstacle::all_int_points).collect();
        let mut hits = Vec::new();
        for p in &body {
            for q in &blocked {
                if p.approx_eq(q) {
                    hits.push(*p);
                }
            }
        }
        hits
    }

    /// Obstacles whose outline crosses the outline of any segment, in input
    /// order and without repeats.
    #[must_use]
    pub fn intersected_obstacles<'a, I>(&self, obstacles: I) -> Vec<&'a Obstacle>
    where
        I: IntoIterator<Item = &'a Obstacle>,
    {
        obstacles
            .into_iter()
            .filter(|o| {
                o.polygon()
                    .is_some_and(|poly| self.body.iter().any(|seg| seg.intersects(poly)))
            })
            .collect()
    }

    /// Returns `true` if `direction` is not a reversal, keeps the head
    /// inside `bounds` and does not collide with the body.
    #[must_use]
    pub fn is_safe_direction(&self, direction: Direction, bounds: &Bounds) -> bool {
        if self.direction.is_some_and(|d| d.is_opposite(direction)) {
            return false;
        }
        let head = self.next_head(direction);
        if !head.vertices().iter().all(|v| bounds.contains(v)) {
            return false;
        }
        self.collides_with_body(&head).is_none()
    }

    /// Autopilot: keeps `direction` when safe, otherwise takes the first safe
    /// heading in [`Direction::ALL`] order, otherwise keeps `direction`
    /// anyway. Returns the heading applied.
    pub fn set_safe_direction(&mut self, direction: Direction, bounds: &Bounds) -> Direction {
        let chosen = if self.is_safe_direction(direction, bounds) {
            direction
        } else {
            Direction::ALL
                .into_iter()
                .filter(|d| *d != direction)
                .find(|d| self.is_safe_direction(*d, bounds))
                .unwrap_or(direction)
        };
        if chosen != direction {
            debug!(requested = %direction, chosen = %chosen, "autopilot override");
        }
        self.direction = Some(chosen);
        chosen
    }

    fn next_head(&self, direction: Direction) -> Square {
        let (dx, dy) = direction.offset(f64::from(self.unit()));
        self.head().translate(dx, dy)
    }

    fn collides_with_body(&self, head: &Square) -> Option<usize> {
        self.body
            .iter()
            .enumerate()
            .skip(EXEMPT_SEGMENTS)
            .find(|(_, seg)| head.duplicated(*seg))
            .map(|(i, _)| i)
    }
}
