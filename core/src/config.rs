use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// Fraction of cells holding a mine in every preset.
pub const DEFAULT_MINE_DENSITY: f64 = 0.15;

/// Named grid sizes offered by the game menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridPreset {
    #[default]
    Beginner,
    Intermediate,
    Large,
    Expert,
}

impl GridPreset {
    pub const ALL: [GridPreset; 4] = [
        GridPreset::Beginner,
        GridPreset::Intermediate,
        GridPreset::Large,
        GridPreset::Expert,
    ];

    /// `(rows, cols)` of the preset.
    pub const fn size(self) -> Coord2 {
        use GridPreset::*;
        match self {
            Beginner => (8, 8),
            Intermediate => (16, 16),
            Large => (24, 24),
            Expert => (16, 30),
        }
    }

    /// Menu label, `cols x rows`.
    pub const fn label(self) -> &'static str {
        use GridPreset::*;
        match self {
            Beginner => "8x8",
            Intermediate => "16x16",
            Large => "24x24",
            Expert => "30x16 (Expert)",
        }
    }
}

impl fmt::Display for GridPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GridPreset {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        use GridPreset::*;
        match s.trim().to_ascii_lowercase().as_str() {
            "8x8" | "beginner" => Ok(Beginner),
            "16x16" | "intermediate" => Ok(Intermediate),
            "24x24" | "large" => Ok(Large),
            "30x16" | "30x16 (expert)" | "expert" => Ok(Expert),
            _ => Err(GameError::UnknownPreset),
        }
    }
}

/// Everything needed to lay out a new session.
///
/// Missing fields fall back to the beginner preset, so a host can deserialize
/// a partial config such as `{"seed": 7}`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mine_density: f64,
    /// Fixed RNG seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub const fn new(rows: Coord, cols: Coord, mine_density: f64) -> Self {
        Self {
            rows,
            cols,
            mine_density,
            seed: None,
        }
    }

    pub const fn from_preset(preset: GridPreset) -> Self {
        let (rows, cols) = preset.size();
        Self::new(rows, cols, DEFAULT_MINE_DENSITY)
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// `floor(rows * cols * mine_density)`, validated to leave at least one
    /// safe cell.
    pub fn num_mines(&self) -> Result<CellCount> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if !self.mine_density.is_finite() || self.mine_density < 0.0 {
            return Err(GameError::InvalidDensity);
        }

        let total_cells = self.total_cells();
        let mines = (f64::from(total_cells) * self.mine_density).floor();
        if mines >= f64::from(total_cells) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(mines as CellCount)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_preset(GridPreset::default())
    }
}

impl From<GridPreset> for SessionConfig {
    fn from(preset: GridPreset) -> Self {
        Self::from_preset(preset)
    }
}
