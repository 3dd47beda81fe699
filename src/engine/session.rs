use rand::Rng;
use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::error::{MovementError, Result};
use crate::geometry::Point;

use super::{ArenaConfig, Direction, Food, Obstacle, PlaceFood, PlaceObstacle, RotationStep, Snake};

slotmap::new_key_type! {
    /// Unique identifier for an obstacle in a session.
    pub struct ObstacleId;
}

/// Input fed to a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn and move one unit; refused reversals do not move.
    Turn(Direction),
    /// Append a segment at the tail.
    Grow,
    /// Steer towards the requested heading when safe, then move.
    Autopilot(Direction),
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    SelfCollision,
    OutOfBounds,
    ObstacleCollision,
    /// No cell left for new food: the board is won.
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    GameOver(GameOverReason),
}

/// One game: the snake, its obstacles and the current food.
///
/// Callers alternate [`GameSession::apply`] for player input and
/// [`GameSession::advance`] for the world tick.
#[derive(Debug)]
pub struct GameSession {
    config: ArenaConfig,
    snake: Snake,
    obstacles: SlotMap<ObstacleId, Obstacle>,
    food: Option<Food>,
    eaten: Option<Food>,
    score: u32,
    status: SessionStatus,
    collisions: Vec<Point>,
}

impl GameSession {
    /// Sets up a session: the arena is rounded up to the movement unit, then
    /// the snake, the obstacles and the first food are placed in that order.
    ///
    /// # Errors
    ///
    /// Returns a placement error if an obstacle or the first food finds no
    /// free cell, or a geometry error if the snake head cannot be built.
    pub fn new<R: Rng + ?Sized>(config: ArenaConfig, rng: &mut R) -> Result<Self> {
        let count = config.obstacle_count();
        let config = config.optimized();
        let snake = Snake::new(&config, rng)?;

        let mut obstacles = SlotMap::with_key();
        for _ in 0..count {
            let obstacle = PlaceObstacle::new(&config, &snake)
                .avoiding(obstacles.values())
                .execute(rng)?;
            obstacles.insert(obstacle);
        }
        let food = PlaceFood::new(&config, &snake)
            .avoiding(obstacles.values())
            .execute(rng)?;

        debug!(
            width = config.width(),
            height = config.height(),
            edge = config.edge(),
            obstacles = obstacles.len(),
            "session started"
        );
        Ok(Self {
            config,
            snake,
            obstacles,
            food: Some(food),
            eaten: None,
            score: 0,
            status: SessionStatus::Running,
            collisions: Vec::new(),
        })
    }

    /// The optimized configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn obstacles(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> + '_ {
        self.obstacles.iter()
    }

    #[must_use]
    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id)
    }

    /// Obstacles whose outline currently crosses the snake.
    #[must_use]
    pub fn touched_obstacles(&self) -> Vec<ObstacleId> {
        let hit = self.snake.intersected_obstacles(self.obstacles.values());
        self.obstacles
            .iter()
            .filter(|(_, o)| hit.iter().any(|h| std::ptr::eq(*h, *o)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Food waiting to be eaten, `None` once the board is cleared.
    #[must_use]
    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    /// Food swallowed on the last tick, if any.
    #[must_use]
    pub fn eaten_food(&self) -> Option<&Food> {
        self.eaten.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, SessionStatus::GameOver(_))
    }

    /// Points where the snake met an obstacle on the last tick.
    #[must_use]
    pub fn collisions(&self) -> &[Point] {
        &self.collisions
    }

    /// Applies one player command. Finished sessions ignore input.
    pub fn apply(&mut self, command: Command) -> SessionStatus {
        if self.is_over() {
            return self.status;
        }
        let moved = match command {
            Command::Turn(direction) => {
                if self.snake.set_direction(direction) {
                    self.snake.step()
                } else {
                    Ok(())
                }
            }
            Command::Grow => {
                self.snake.grow();
                Ok(())
            }
            Command::Autopilot(direction) => {
                self.snake.set_safe_direction(direction, &self.config.bounds());
                self.snake.step()
            }
        };
        if let Err(MovementError::SelfCollision { segment }) = moved {
            debug!(segment, "snake bit itself");
            self.status = SessionStatus::GameOver(GameOverReason::SelfCollision);
        }
        self.status
    }

    /// Runs one world tick: bounds check, obstacle rotation and collision,
    /// then food consumption.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SessionStatus {
        if self.is_over() {
            return self.status;
        }
        self.eaten = None;
        self.collisions.clear();

        let bounds = self.config.bounds();
        if !self.snake.all_int_points().iter().all(|p| bounds.contains(p)) {
            return self.finish(GameOverReason::OutOfBounds);
        }

        for (id, obstacle) in &mut self.obstacles {
            if let Err(err) = obstacle.rotate() {
                warn!(?id, %err, "obstacle rotation rejected, obstacle stops rotating");
                *obstacle = obstacle.clone().with_rotation(obstacle.pivot(), RotationStep::Static);
            }
        }
        let hits = self.snake.find_intersections(self.obstacles.values());
        if !hits.is_empty() {
            self.collisions = hits;
            return self.finish(GameOverReason::ObstacleCollision);
        }

        let eaten = match &self.food {
            Some(food) if self.snake.contains_food(food) => self.food.take(),
            _ => None,
        };
        if let Some(food) = eaten {
            self.snake.grow();
            let gained = u32::try_from(food.all_int_points().len()).unwrap_or(u32::MAX);
            self.score = self.score.saturating_add(gained);
            debug!(gained, score = self.score, "food eaten");
            self.eaten = Some(food);

            match PlaceFood::new(&self.config, &self.snake)
                .avoiding(self.obstacles.values())
                .execute(rng)
            {
                Ok(next) => self.food = Some(next),
                Err(_) => {
                    self.score = u32::MAX;
                    return self.finish(GameOverReason::Cleared);
                }
            }
        }
        self.status
    }

    fn finish(&mut self, reason: GameOverReason) -> SessionStatus {
        debug!(?reason, score = self.score, "game over");
        self.status = SessionStatus::GameOver(reason);
        self.status
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn session(seed: u64, config: ArenaConfig) -> (GameSession, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = GameSession::new(config, &mut rng).unwrap();
        (s, rng)
    }

    /// Replaces the random layout with a known one.
    fn staged(session: &mut GameSession, head: Point, food: Option<Food>) {
        session.snake = Snake::at(head, session.config.edge()).unwrap();
        session.obstacles.clear();
        session.food = food;
    }

    #[test]
    fn new_session_optimizes_and_seeds() {
        let config = ArenaConfig::new(25, 40, 2).unwrap().with_obstacles(true);
        let (s, _) = session(1, config);
        assert_eq!((s.config().width(), s.config().height()), (27, 42));
        assert_eq!(s.obstacles().count(), 3);
        assert!(s.food().is_some());
        assert_eq!(s.status(), SessionStatus::Running);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn no_obstacles_unless_enabled() {
        let (s, _) = session(2, ArenaConfig::new(30, 30, 2).unwrap());
        assert_eq!(s.obstacles().count(), 0);
    }

    #[test]
    fn turn_moves_the_snake() {
        let (mut s, _) = session(3, ArenaConfig::new(30, 30, 2).unwrap());
        staged(&mut s, Point::new(9.0, 9.0), None);
        assert_eq!(s.apply(Command::Turn(Direction::East)), SessionStatus::Running);
        assert_eq!(s.snake().head().vertices()[0], Point::new(12.0, 9.0));
    }

    #[test]
    fn refused_reversal_does_not_move() {
        let (mut s, _) = session(4, ArenaConfig::new(30, 30, 2).unwrap());
        staged(&mut s, Point::new(9.0, 9.0), None);
        s.apply(Command::Grow);
        s.apply(Command::Turn(Direction::East));
        s.apply(Command::Turn(Direction::West));
        assert_eq!(s.snake().head().vertices()[0], Point::new(12.0, 9.0));
        assert_eq!(s.snake().direction(), Some(Direction::East));
    }

    #[test]
    fn leaving_the_board_ends_the_game() {
        let (mut s, mut rng) = session(5, ArenaConfig::new(30, 30, 2).unwrap());
        staged(&mut s, Point::new(0.0, 0.0), None);
        s.apply(Command::Turn(Direction::North));
        assert_eq!(s.advance(&mut rng), SessionStatus::GameOver(GameOverReason::OutOfBounds));
        assert!(s.is_over());
        assert_eq!(s.apply(Command::Turn(Direction::South)), s.status());
    }

    #[test]
    fn biting_itself_ends_the_game() {
        let (mut s, _) = session(6, ArenaConfig::new(30, 30, 2).unwrap());
        staged(&mut s, Point::new(3.0, 3.0), None);
        for _ in 0..3 {
            s.apply(Command::Grow);
        }
        for d in [Direction::East, Direction::South, Direction::West] {
            s.apply(Command::Turn(d));
        }
        assert_eq!(
            s.apply(Command::Turn(Direction::North)),
            SessionStatus::GameOver(GameOverReason::SelfCollision)
        );
    }

    #[test]
    fn eating_scores_the_food_points() {
        let (mut s, mut rng) = session(7, ArenaConfig::new(30, 30, 2).unwrap());
        let food = Food::square(Point::new(12.0, 9.0), 2).unwrap();
        staged(&mut s, Point::new(9.0, 9.0), Some(food));
        s.apply(Command::Turn(Direction::East));
        assert_eq!(s.advance(&mut rng), SessionStatus::Running);
        assert_eq!(s.score(), 9);
        assert_eq!(s.snake().len(), 2);
        assert!(s.eaten_food().is_some());
        assert!(s.food().is_some());
        s.advance(&mut rng);
        assert!(s.eaten_food().is_none());
    }

    #[test]
    fn obstacle_contact_ends_the_game() {
        let (mut s, mut rng) = session(8, ArenaConfig::new(30, 30, 2).unwrap());
        staged(&mut s, Point::new(9.0, 9.0), None);
        let id = s.obstacles.insert(Obstacle::square(Point::new(11.0, 11.0), 2).unwrap());
        assert_eq!(
            s.advance(&mut rng),
            SessionStatus::GameOver(GameOverReason::ObstacleCollision)
        );
        assert_eq!(s.collisions(), &[Point::new(11.0, 11.0)]);
        assert!(s.obstacle(id).is_some());
    }

    #[test]
    fn rotating_obstacles_turn_every_tick() {
        let (mut s, mut rng) = session(9, ArenaConfig::new(30, 30, 2).unwrap());
        staged(&mut s, Point::new(0.0, 0.0), None);
        let id = s.obstacles.insert(
            Obstacle::square(Point::new(20.0, 20.0), 2)
                .unwrap()
                .with_rotation(Point::new(20.0, 20.0), RotationStep::Half),
        );
        s.advance(&mut rng);
        assert_eq!(
            s.obstacle(id).unwrap().shape().to_string(),
            "Square: [(20,20), (18,20), (18,18), (20,18)]"
        );
    }

    #[test]
    fn crossing_outlines_are_reported() {
        let (mut s, _) = session(10, ArenaConfig::new(30, 30, 4).unwrap());
        staged(&mut s, Point::new(0.0, 0.0), None);
        let id = s.obstacles.insert(Obstacle::rectangle(Point::new(2.0, 1.0), 2, 6).unwrap());
        s.obstacles.insert(Obstacle::square(Point::new(20.0, 20.0), 2).unwrap());
        assert_eq!(s.touched_obstacles(), vec![id]);
    }

    #[test]
    fn cleared_board_saturates_the_score() {
        let (mut s, mut rng) = session(11, ArenaConfig::new(10, 10, 1).unwrap());
        let food = Food::square(Point::new(2.0, 0.0), 1).unwrap();
        staged(&mut s, Point::new(0.0, 0.0), Some(food));
        // Wall off every lattice cell except the one being eaten.
        for x in (0..10).step_by(2) {
            for y in (0..10).step_by(2) {
                if (x, y) != (2, 0) {
                    s.obstacles.insert(Obstacle::square(Point::lattice(x, y), 1).unwrap());
                }
            }
        }
        s.apply(Command::Turn(Direction::East));
        assert_eq!(s.advance(&mut rng), SessionStatus::GameOver(GameOverReason::Cleared));
        assert_eq!(s.score(), u32::MAX);
        assert!(s.food().is_none());
    }
}
