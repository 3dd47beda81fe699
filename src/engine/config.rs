use crate::error::ConfigError;
use crate::geometry::Point;

/// Smallest arena side accepted, in cells.
pub const MIN_ARENA_SIDE: u32 = 10;

/// Which lattice points of a shape are drawn and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterMode {
    /// Outline points only.
    #[default]
    Outline,
    /// Every point of the filled area.
    Filled,
}

/// Validated arena and snake parameters for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    width: u32,
    height: u32,
    edge: u32,
    obstacles: bool,
    raster: RasterMode,
}

impl ArenaConfig {
    /// Creates a configuration without obstacles, drawn as outlines.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ArenaTooSmall`] when either side is below
    /// [`MIN_ARENA_SIDE`], and [`ConfigError::EdgeOutOfRange`] unless
    /// `1 <= edge` and `5 * edge < min(width, height)`.
    pub fn new(width: u32, height: u32, edge: u32) -> Result<Self, ConfigError> {
        if width < MIN_ARENA_SIDE || height < MIN_ARENA_SIDE {
            return Err(ConfigError::ArenaTooSmall { width, height });
        }
        let limit = width.min(height);
        if edge == 0 || edge.saturating_mul(5) >= limit {
            return Err(ConfigError::EdgeOutOfRange { edge, limit });
        }
        Ok(Self {
            width,
            height,
            edge,
            obstacles: false,
            raster: RasterMode::Outline,
        })
    }

    #[must_use]
    pub fn with_obstacles(mut self, enabled: bool) -> Self {
        self.obstacles = enabled;
        self
    }

    #[must_use]
    pub fn with_raster(mut self, raster: RasterMode) -> Self {
        self.raster = raster;
        self
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side length of a snake segment.
    #[must_use]
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Movement unit: the snake's stride and the placement lattice step.
    #[must_use]
    pub fn unit(&self) -> u32 {
        self.edge + 1
    }

    #[must_use]
    pub fn obstacles_enabled(&self) -> bool {
        self.obstacles
    }

    #[must_use]
    pub fn raster(&self) -> RasterMode {
        self.raster
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.width,
            height: self.height,
        }
    }

    /// Rounds both sides up to the next multiple of the movement unit so the
    /// snake lattice tiles the arena exactly.
    #[must_use]
    pub fn optimized(&self) -> Self {
        let unit = self.unit();
        Self {
            width: self.width.div_ceil(unit) * unit,
            height: self.height.div_ceil(unit) * unit,
            ..*self
        }
    }

    /// Number of obstacles seeded at session start.
    ///
    /// The shorter side divided by its leading power of ten, rounded up:
    /// 100 gives 1, 25 gives 3.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        if !self.obstacles {
            return 0;
        }
        let side = self.width.min(self.height);
        let scale = 10_u32.pow(side.ilog10());
        usize::try_from(side.div_ceil(scale)).unwrap_or(usize::MAX)
    }
}

/// Half-open playing field `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        p.x() >= 0.0
            && p.y() >= 0.0
            && p.x() < f64::from(self.width)
            && p.y() < f64::from(self.height)
    }
}
