pub mod config;
pub mod direction;
pub mod food;
pub mod obstacle;
pub mod placement;
pub mod session;
pub mod snake;

pub use config::{ArenaConfig, Bounds, RasterMode, MIN_ARENA_SIDE};
pub use direction::Direction;
pub use food::Food;
pub use obstacle::{Obstacle, RotationStep};
pub use placement::{PlaceFood, PlaceObstacle};
pub use session::{Command, GameOverReason, GameSession, ObstacleId, SessionStatus};
pub use snake::Snake;
