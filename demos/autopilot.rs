//! Headless autopilot run: seeds a session, steers the snake towards the food
//! and prints the board after every tick.
//!
//! ```text
//! cargo run --example autopilot            # seed 0
//! cargo run --example autopilot -- 42      # custom seed
//! RUST_LOG=gridsnake=debug cargo run --example autopilot
//! ```

use std::io;

use gridsnake::engine::{ArenaConfig, Command, Direction, GameSession, SessionStatus};
use gridsnake::render::Board;
use gridsnake::score::ScoreBook;
use gridsnake::GridsnakeError;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_TICKS: usize = 200;

/// Heading that closes the larger gap between the head and the food.
fn towards_food(session: &GameSession) -> Direction {
    let Some(food) = session.food() else {
        return Direction::East;
    };
    let head = session.snake().head().centroid();
    let target = food.shape().centroid();
    let (dx, dy) = (target.x() - head.x(), target.y() - head.y());
    if dx.abs() >= dy.abs() {
        if dx >= 0.0 { Direction::East } else { Direction::West }
    } else if dy >= 0.0 {
        Direction::South
    } else {
        Direction::North
    }
}

fn main() -> Result<(), GridsnakeError> {
    // Default: WARN for everything, INFO for gridsnake.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("gridsnake=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);

    let config = ArenaConfig::new(30, 20, 2)?.with_obstacles(true);
    let mut session = GameSession::new(config, &mut rng)?;

    for tick in 0..MAX_TICKS {
        session.apply(Command::Autopilot(towards_food(&session)));
        let status = session.advance(&mut rng);
        println!("tick {tick}  score {}\n{}\n", session.score(), Board::render(&session));
        if let SessionStatus::GameOver(reason) = status {
            println!("game over: {reason:?}");
            break;
        }
    }

    let mut book = ScoreBook::new();
    book.record(session.score(), "autopilot")?;
    book.write(io::stdout().lock())?;
    Ok(())
}
