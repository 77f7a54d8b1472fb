//! Grid sizing for a game.

use crate::common::GridError;

/// Side length used when no explicit size is configured.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Smallest accepted side length.
///
/// With both sides at least this long, every ship of the standard fleet can
/// always be placed after the shorter ones, whatever their positions.
pub const MIN_GRID_SIZE: usize = 10;

/// Dimensions of a sea grid. Every random range in the crate is derived
/// from these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    width: usize,
    height: usize,
}

impl GridConfig {
    /// Create a configuration, rejecting grids too small for the fleet.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width < MIN_GRID_SIZE || height < MIN_GRID_SIZE {
            return Err(GridError::GridTooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
        }
    }
}
