use thiserror::Error;

/// Top-level error type for the gridsnake kernel.
#[derive(Debug, Error)]
pub enum GridsnakeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Movement(#[from] MovementError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Shape validity violations detected at construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("coincident defining points at ({x}, {y})")]
    CoincidentPoints { x: f64, y: f64 },

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("vertices {index}, {index}+1, {index}+2 are collinear")]
    CollinearVertices { index: usize },

    #[error("edges {first} and {second} intersect")]
    SelfIntersecting { first: usize, second: usize },

    #[error("{shape} needs exactly {expected} vertices, got {found}")]
    VertexCount {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("rectangle diagonals are degenerate")]
    DegenerateDiagonals,

    #[error("corner at vertex {corner} is not a right angle")]
    NotRightAngle { corner: usize },

    #[error("square edges have unequal lengths")]
    UnequalEdges,

    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),
}

/// Errors from the whitespace-separated shape text format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid integer token {0:?}")]
    InvalidNumber(String),

    #[error("declared {declared} vertices but {found} coordinate pairs follow")]
    CountMismatch { declared: usize, found: usize },
}

/// Arena or snake configuration outside the allowed ranges.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("arena {width}x{height} is below the 10x10 minimum")]
    ArenaTooSmall { width: u32, height: u32 },

    #[error("snake edge {edge} must be at least 1 and less than a fifth of {limit}")]
    EdgeOutOfRange { edge: u32, limit: u32 },
}

/// Errors raised by the movement state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MovementError {
    #[error("invalid direction {0}, expected 0, 90, 180 or 270")]
    InvalidDirection(i32),

    #[error("self-collision: the head would land on segment {segment}")]
    SelfCollision { segment: usize },
}

/// Placement search ran out of candidate cells.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no free cell left for {0}")]
    Exhausted(&'static str),
}

/// Errors from the score record contract.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("malformed score record on line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("player name {0:?} must be non-empty and contain no whitespace")]
    InvalidName(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`GridsnakeError`].
pub type Result<T> = std::result::Result<T, GridsnakeError>;
