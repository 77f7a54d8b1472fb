//! Ship classes, headings and the per-ship damage record.

use alloc::vec::Vec;
use core::fmt;

use crate::common::PlacementError;

/// Class of a ship. Each class has a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Tug,
    Submarine,
    Destroyer,
    Battleship,
    AircraftCarrier,
}

impl ShipKind {
    /// Number of ship classes in a fleet.
    pub const COUNT: usize = 5;

    /// Every class, in deployment order.
    pub const ALL: [ShipKind; ShipKind::COUNT] = [
        ShipKind::Tug,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Battleship,
        ShipKind::AircraftCarrier,
    ];

    /// Number of tiles a ship of this class occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Tug => 1,
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Battleship => 4,
            ShipKind::AircraftCarrier => 5,
        }
    }

    /// Position of this class in [`ShipKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Tug => "Tug",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Battleship => "Battleship",
            ShipKind::AircraftCarrier => "Aircraft Carrier",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a ship extends from its first tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    /// Increasing row.
    UpDown,
    /// Increasing column.
    LeftRight,
}

impl Heading {
    /// Row and column step between consecutive tiles.
    pub const fn step(self) -> (usize, usize) {
        match self {
            Heading::UpDown => (1, 0),
            Heading::LeftRight => (0, 1),
        }
    }
}

/// A single ship of a fleet: where it sits and how much damage it took.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    heading: Heading,
    tiles: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    /// An undeployed ship of the given class.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            heading: Heading::LeftRight,
            tiles: Vec::new(),
            hits: 0,
        }
    }

    /// Record the tiles the ship occupies, replacing any earlier placement
    /// and clearing its damage. Nothing changes if the tile count is wrong.
    pub fn place(
        &mut self,
        heading: Heading,
        tiles: Vec<(usize, usize)>,
    ) -> Result<(), PlacementError> {
        let expected = self.kind.length();
        if tiles.len() != expected {
            return Err(PlacementError::LengthMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        self.heading = heading;
        self.tiles = tiles;
        self.hits = 0;
        Ok(())
    }

    /// Count one more hit. The grid guarantees each tile is hit at most once.
    ///
    /// # Panics
    ///
    /// Panics if the ship is already sunk.
    pub fn register_hit(&mut self) {
        assert!(self.hits < self.kind.length(), "ship hit more often than it is long");
        self.hits += 1;
    }

    /// True once every tile of the ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.kind.length()
    }

    /// True once the ship has tiles on the grid.
    pub fn is_deployed(&self) -> bool {
        !self.tiles.is_empty()
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Occupied tiles, starting from the origin.
    pub fn tiles(&self) -> &[(usize, usize)] {
        &self.tiles
    }

    /// First tile of the ship, if deployed.
    pub fn origin(&self) -> Option<(usize, usize)> {
        self.tiles.first().copied()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {:?}, origin: {:?}, heading: {:?}, hits: {}/{} }}",
            self.kind,
            self.origin(),
            self.heading,
            self.hits,
            self.kind.length(),
        )
    }
}
