use std::fmt;

use crate::error::MovementError;

/// Heading of the snake, stored as one of the four cardinal angles.
///
/// Angles follow screen coordinates: 0° moves towards +x, 90° towards -y
/// (up the board), 180° towards -x and 270° towards +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    /// Candidate order used when searching for a safe heading.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// # Errors
    ///
    /// Returns [`MovementError::InvalidDirection`] for anything other than
    /// 0, 90, 180 or 270.
    pub fn from_degrees(degrees: i32) -> Result<Self, MovementError> {
        match degrees {
            0 => Ok(Direction::East),
            90 => Ok(Direction::North),
            180 => Ok(Direction::West),
            270 => Ok(Direction::South),
            other => Err(MovementError::InvalidDirection(other)),
        }
    }

    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Direction::East => 0,
            Direction::North => 90,
            Direction::West => 180,
            Direction::South => 270,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }

    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Translation applied to the head for one move of `unit` cells.
    #[must_use]
    pub fn offset(self, unit: f64) -> (f64, f64) {
        match self {
            Direction::East => (unit, 0.0),
            Direction::North => (0.0, -unit),
            Direction::West => (-unit, 0.0),
            Direction::South => (0.0, unit),
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = MovementError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(value)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}
