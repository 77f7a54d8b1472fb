//! Outcome of a single attack.

use core::fmt;

use crate::ship::ShipKind;

/// Classification of one `hit_tile` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The tile held no ship.
    Miss,
    /// A ship was hit but is still afloat.
    Hit,
    /// The hit sank the ship.
    Destroyed,
    /// The tile had been shot before; nothing changed.
    AlreadyShot,
}

/// Immutable record of an attack: what happened, where, and to which ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    outcome: AttackOutcome,
    row: usize,
    col: usize,
    ship: Option<ShipKind>,
}

impl AttackResult {
    pub(crate) fn new(
        outcome: AttackOutcome,
        row: usize,
        col: usize,
        ship: Option<ShipKind>,
    ) -> Self {
        Self {
            outcome,
            row,
            col,
            ship,
        }
    }

    pub fn outcome(&self) -> AttackOutcome {
        self.outcome
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Ship involved; present for `Hit` and `Destroyed`.
    pub fn ship(&self) -> Option<ShipKind> {
        self.ship
    }

    /// True for `Hit` and `Destroyed`.
    pub fn is_hit(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Hit | AttackOutcome::Destroyed)
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.outcome, self.ship) {
            (AttackOutcome::Miss, _) => write!(f, "missed"),
            (AttackOutcome::Hit, _) => write!(f, "hit something!"),
            (AttackOutcome::Destroyed, Some(kind)) => {
                write!(f, "destroyed the enemy's {}", kind)
            }
            (AttackOutcome::Destroyed, None) => write!(f, "destroyed an enemy ship"),
            (AttackOutcome::AlreadyShot, _) => {
                write!(f, "have already attacked [{},{}]!", self.col, self.row)
            }
        }
    }
}
