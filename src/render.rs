//! Text board for a [`GameSession`].

use std::fmt;

use crate::engine::{GameSession, RasterMode};
use crate::geometry::Point;

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Head,
    Tail,
    Food,
    EatenFood,
    Obstacle,
    Collision,
}

impl Tile {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Head => 'H',
            Tile::Tail => 'T',
            Tile::Food => 'F',
            Tile::EatenFood => '#',
            Tile::Obstacle => 'O',
            Tile::Collision => 'X',
        }
    }
}

/// Row-major grid of tiles; later paints win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = usize::try_from(u64::from(width) * u64::from(height)).unwrap_or(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; len],
        }
    }

    /// Draws a fresh board for the session: obstacles, food, swallowed food,
    /// the snake and finally the collision markers.
    #[must_use]
    pub fn render(session: &GameSession) -> Self {
        let config = session.config();
        let mut board = Self::new(config.width(), config.height());
        let filled = config.raster() == RasterMode::Filled;
        let points = |all: Vec<Point>, outline: Vec<Point>| if filled { all } else { outline };

        for (_, obstacle) in session.obstacles() {
            board.paint(
                &points(obstacle.all_int_points(), obstacle.boundary_int_points()),
                Tile::Obstacle,
            );
        }
        if let Some(food) = session.food() {
            board.paint(&points(food.all_int_points(), food.boundary_int_points()), Tile::Food);
        }
        if let Some(food) = session.eaten_food() {
            board.paint(
                &points(food.all_int_points(), food.boundary_int_points()),
                Tile::EatenFood,
            );
        }

        let snake = session.snake();
        let body = points(snake.all_int_points(), snake.boundary_int_points());
        let side = usize::try_from(snake.unit()).unwrap_or(usize::MAX);
        let head_len = if filled { side.saturating_mul(side) } else { side.saturating_mul(4) };
        let (head, tail) = body.split_at(head_len.min(body.len()));
        board.paint(tail, Tile::Tail);
        board.paint(head, Tile::Head);

        board.paint(session.collisions(), Tile::Collision);
        board
    }

    /// Sets every on-board point to `tile`; points off the board are skipped.
    pub fn paint(&mut self, points: &[Point], tile: Tile) {
        for p in points {
            let (x, y) = p.cell();
            if let Some(i) = self.index(x, y) {
                self.tiles[i] = tile;
            }
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile at cell `(x, y)`, `None` off the board.
    #[must_use]
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Number of cells showing `tile`.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u32::try_from(y).ok().filter(|y| *y < self.height)?;
        usize::try_from(u64::from(y) * u64::from(self.width) + u64::from(x)).ok()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::try_from(self.width).unwrap_or(usize::MAX);
        if width == 0 {
            return Ok(());
        }
        for (i, row) in self.tiles.chunks(width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}
