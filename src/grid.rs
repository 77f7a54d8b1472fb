//! Sea grid state: ship placement, tile state and attack resolution.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::attack::{AttackOutcome, AttackResult};
use crate::common::{GridError, PlacementError};
use crate::config::GridConfig;
use crate::ship::{Heading, Ship, ShipKind};

/// What an observer sees at a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileView {
    /// Open water, not shot.
    Sea,
    /// Shot, nothing there.
    Miss,
    /// A ship segment, not shot. Only visible to the grid's owner.
    Ship,
    /// Shot, ship segment hit.
    Hit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tile {
    ship: Option<ShipKind>,
    shot: bool,
}

impl Tile {
    fn view(&self) -> TileView {
        match (self.ship, self.shot) {
            (None, false) => TileView::Sea,
            (None, true) => TileView::Miss,
            (Some(_), false) => TileView::Ship,
            (Some(_), true) => TileView::Hit,
        }
    }
}

/// One player's sea: the fleet plus a row-major table of tiles.
///
/// Listeners registered with [`SeaGrid::on_changed`] run synchronously after
/// every successful placement and every attack. They must not reach back
/// into the grid.
pub struct SeaGrid {
    config: GridConfig,
    ships: [Ship; ShipKind::COUNT],
    tiles: Vec<Tile>,
    ships_killed: usize,
    listeners: Vec<Box<dyn FnMut()>>,
}

impl SeaGrid {
    /// Empty grid with every ship undeployed.
    pub fn new(config: GridConfig) -> Self {
        let cells = config.width() * config.height();
        Self {
            config,
            ships: ShipKind::ALL.map(Ship::new),
            tiles: alloc::vec![Tile::default(); cells],
            ships_killed: 0,
            listeners: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.config.width()
    }

    pub fn height(&self) -> usize {
        self.config.height()
    }

    /// True if (`row`, `col`) lies on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.width() + col)
        } else {
            Err(GridError::TileOutOfBounds { row, col })
        }
    }

    /// Owner's view of a tile; unshot ships show as [`TileView::Ship`].
    pub fn tile(&self, row: usize, col: usize) -> Result<TileView, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.tiles[idx].view())
    }

    /// Ship of the given class.
    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.index()]
    }

    /// The fleet in deployment order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// True when every ship has been placed.
    pub fn all_deployed(&self) -> bool {
        self.ships.iter().all(Ship::is_deployed)
    }

    /// Number of ships placed so far.
    pub fn ships_deployed(&self) -> usize {
        self.ships.iter().filter(|s| s.is_deployed()).count()
    }

    /// Number of ships sunk.
    pub fn ships_killed(&self) -> usize {
        self.ships_killed
    }

    /// Register a listener fired after each change to the grid.
    pub fn on_changed<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener();
        }
    }

    /// Tiles a ship of `kind` would cover starting at (`row`, `col`).
    fn footprint(
        &self,
        row: usize,
        col: usize,
        kind: ShipKind,
        heading: Heading,
    ) -> Result<Vec<(usize, usize)>, PlacementError> {
        let (dr, dc) = heading.step();
        let span = kind.length() - 1;
        if !self.contains(row, col) || !self.contains(row + dr * span, col + dc * span) {
            return Err(PlacementError::ShipOutOfBounds);
        }
        Ok((0..kind.length())
            .map(|i| (row + dr * i, col + dc * i))
            .collect())
    }

    /// Place or relocate `kind` so that its first tile is (`row`, `col`).
    ///
    /// Tiles held by the same ship do not count as overlap. Tiles that were
    /// already shot cannot be covered, so a moved ship always starts
    /// undamaged. On error the grid is unchanged and no notification fires.
    pub fn move_ship(
        &mut self,
        row: usize,
        col: usize,
        kind: ShipKind,
        heading: Heading,
    ) -> Result<(), PlacementError> {
        let cells = self.footprint(row, col, kind, heading)?;
        for &(r, c) in &cells {
            let tile = self.tiles[r * self.width() + c];
            match tile.ship {
                Some(other) if other != kind => return Err(PlacementError::ShipOverlaps(other)),
                _ if tile.shot => return Err(PlacementError::TileAlreadyShot { row: r, col: c }),
                _ => {}
            }
        }

        let width = self.width();
        let ship = &mut self.ships[kind.index()];
        let previous = ship.tiles().to_vec();
        let was_sunk = ship.is_sunk();
        ship.place(heading, cells.clone())?;
        if was_sunk {
            self.ships_killed -= 1;
        }

        for (r, c) in previous {
            self.tiles[r * width + c].ship = None;
        }
        for (r, c) in cells {
            self.tiles[r * width + c].ship = Some(kind);
        }
        log::trace!("{} moved to ({}, {}) {:?}", kind, row, col, heading);
        self.notify();
        Ok(())
    }

    /// Resolve an attack on (`row`, `col`).
    ///
    /// Coordinates outside the grid are rejected without mutation. A tile
    /// that was already shot reports `AlreadyShot` and changes nothing.
    pub fn hit_tile(&mut self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        let idx = self.index(row, col)?;
        let result = self.resolve(idx, row, col);
        log::trace!("attack ({}, {}) -> {:?}", row, col, result.outcome());
        self.notify();
        Ok(result)
    }

    fn resolve(&mut self, idx: usize, row: usize, col: usize) -> AttackResult {
        let tile = &mut self.tiles[idx];
        if tile.shot {
            return AttackResult::new(AttackOutcome::AlreadyShot, row, col, None);
        }
        tile.shot = true;

        let Some(kind) = tile.ship else {
            return AttackResult::new(AttackOutcome::Miss, row, col, None);
        };
        let ship = &mut self.ships[kind.index()];
        ship.register_hit();
        if ship.is_sunk() {
            self.ships_killed += 1;
            AttackResult::new(AttackOutcome::Destroyed, row, col, Some(kind))
        } else {
            AttackResult::new(AttackOutcome::Hit, row, col, Some(kind))
        }
    }
}

impl fmt::Debug for SeaGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeaGrid")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("ships", &self.ships)
            .field("ships_killed", &self.ships_killed)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
