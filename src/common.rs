//! Error types shared by the grid, the player and the game session.

use crate::ship::ShipKind;

/// Reasons a ship could not be placed. The grid is left untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one cell of the ship would fall outside the grid.
    ShipOutOfBounds,
    /// A cell is already occupied by another ship.
    ShipOverlaps(ShipKind),
    /// A cell has already been shot at.
    TileAlreadyShot { row: usize, col: usize },
    /// The tile sequence does not match the ship's length.
    LengthMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::ShipOverlaps(other) => {
                write!(f, "Ship placement overlaps with the {}", other)
            }
            PlacementError::TileAlreadyShot { row, col } => {
                write!(f, "Tile ({}, {}) has already been shot at", row, col)
            }
            PlacementError::LengthMismatch { expected, actual } => write!(
                f,
                "Ship needs {} tiles but {} were given",
                expected, actual
            ),
        }
    }
}

/// Errors returned by attacks, tile lookups and game turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column is outside the grid.
    TileOutOfBounds { row: usize, col: usize },
    /// The player has no opponent grid to shoot at.
    NoEnemy,
    /// The targeting strategy produced no coordinate.
    NoTarget,
    /// Requested grid is smaller than the fleet allows.
    GridTooSmall { width: usize, height: usize },
    /// The game is already decided.
    GameOver,
    /// Placement failure surfaced through a wider operation.
    Placement(PlacementError),
}

impl From<PlacementError> for GridError {
    fn from(err: PlacementError) -> Self {
        GridError::Placement(err)
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::TileOutOfBounds { row, col } => {
                write!(f, "Tile ({}, {}) is outside the grid", row, col)
            }
            GridError::NoEnemy => write!(f, "No enemy grid to shoot at"),
            GridError::NoTarget => write!(f, "No target was selected"),
            GridError::GridTooSmall { width, height } => write!(
                f,
                "Grid {}x{} is smaller than {}x{}",
                width,
                height,
                crate::config::MIN_GRID_SIZE,
                crate::config::MIN_GRID_SIZE
            ),
            GridError::GameOver => write!(f, "The game is already over"),
            GridError::Placement(e) => write!(f, "Placement error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
