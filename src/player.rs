//! A player: its own fleet, a view of the enemy, and shooting statistics.

use alloc::rc::Rc;
use core::cell::{Ref, RefCell};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::attack::{AttackOutcome, AttackResult};
use crate::common::{GridError, PlacementError};
use crate::config::GridConfig;
use crate::grid::SeaGrid;
use crate::ship::{Heading, Ship, ShipKind};
use crate::view::SeaView;

/// Points awarded per hit.
const HIT_POINTS: i32 = 12;
/// Points lost per own ship sunk.
const SHIP_LOST_PENALTY: i32 = 20;

/// How a player picks the next tile to shoot.
///
/// Implemented by the AI and by the interactive command line player; a
/// [`Player`] itself does not care which one drives it.
pub trait Targeting {
    /// Choose the next coordinate to attack on `enemy`, or `None` if no
    /// target can be produced.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &SeaView) -> Option<(usize, usize)>;

    /// Inform the strategy of the result of its last shot.
    fn handle_attack_result(&mut self, _result: &AttackResult) {}
}

/// Snapshot of a player's counters, suitable for a HUD or a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub ships_lost: usize,
    pub score: i32,
}

pub struct Player {
    grid: Rc<RefCell<SeaGrid>>,
    enemy: Option<SeaView>,
    shots: u32,
    hits: u32,
    misses: u32,
}

impl Player {
    /// Create a player and deploy its fleet at random.
    pub fn new<R: Rng>(config: GridConfig, rng: &mut R) -> Self {
        let mut player = Self::undeployed(config);
        player.randomize_deployment(rng);
        player
    }

    /// Create a player whose ships still have to be placed.
    pub fn undeployed(config: GridConfig) -> Self {
        Self {
            grid: Rc::new(RefCell::new(SeaGrid::new(config))),
            enemy: None,
            shots: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Full access to the player's own grid.
    pub fn grid(&self) -> Ref<'_, SeaGrid> {
        self.grid.borrow()
    }

    /// Read-only handle on this player's grid, for the opponent.
    pub fn sea_view(&self) -> SeaView {
        SeaView::new(Rc::clone(&self.grid))
    }

    /// Set the grid this player shoots at.
    pub fn set_enemy(&mut self, enemy: SeaView) {
        self.enemy = Some(enemy);
    }

    pub fn enemy(&self) -> Option<&SeaView> {
        self.enemy.as_ref()
    }

    /// Register a listener on the player's own grid.
    pub fn on_changed<F>(&self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.grid.borrow_mut().on_changed(listener);
    }

    /// Place or relocate one of the player's ships.
    pub fn move_ship(
        &mut self,
        row: usize,
        col: usize,
        kind: ShipKind,
        heading: Heading,
    ) -> Result<(), PlacementError> {
        self.grid.borrow_mut().move_ship(row, col, kind, heading)
    }

    /// Shoot at the enemy grid.
    ///
    /// Coordinates outside the enemy grid are rejected before anything is
    /// counted. Every other call counts as a shot; `AlreadyShot` results add
    /// neither a hit nor a miss.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        let enemy = self.enemy.as_ref().ok_or(GridError::NoEnemy)?;
        if !enemy.contains(row, col) {
            return Err(GridError::TileOutOfBounds { row, col });
        }
        self.shots += 1;
        let result = enemy.hit_tile(row, col)?;
        match result.outcome() {
            AttackOutcome::Hit | AttackOutcome::Destroyed => self.hits += 1,
            AttackOutcome::Miss => self.misses += 1,
            AttackOutcome::AlreadyShot => {}
        }
        Ok(result)
    }

    /// True when every ship has been placed.
    pub fn ready_to_deploy(&self) -> bool {
        self.grid.borrow().all_deployed()
    }

    /// True when the whole fleet has been sunk.
    pub fn is_destroyed(&self) -> bool {
        self.grid.borrow().ships_killed() == ShipKind::COUNT
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Damage dealt minus wasted shots and own losses; zero once destroyed.
    pub fn score(&self) -> i32 {
        if self.is_destroyed() {
            return 0;
        }
        let lost = self.grid.borrow().ships_killed() as i32;
        self.hits as i32 * HIT_POINTS - self.shots as i32 - lost * SHIP_LOST_PENALTY
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            shots: self.shots,
            hits: self.hits,
            misses: self.misses,
            ships_lost: self.grid.borrow().ships_killed(),
            score: self.score(),
        }
    }

    /// The ship of the given class.
    pub fn ship(&self, kind: ShipKind) -> Ref<'_, Ship> {
        Ref::map(self.grid.borrow(), |g| g.ship(kind))
    }

    /// The fleet in deployment order.
    pub fn ships(&self) -> Ref<'_, [Ship]> {
        Ref::map(self.grid.borrow(), |g| g.ships())
    }

    /// Place every ship at a random position. Earlier placements are
    /// replaced.
    pub fn randomize_deployment<R: Rng>(&mut self, rng: &mut R) {
        for kind in ShipKind::ALL {
            self.place_randomly(kind, rng);
        }
    }

    /// Draw random origins and headings for `kind` until one fits.
    ///
    /// There is no retry limit; grids of at least
    /// [`MIN_GRID_SIZE`](crate::config::MIN_GRID_SIZE) always leave room.
    pub fn place_randomly<R: Rng>(&mut self, kind: ShipKind, rng: &mut R) {
        let mut grid = self.grid.borrow_mut();
        let (height, width) = (grid.height(), grid.width());
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let heading = if rng.random() {
                Heading::UpDown
            } else {
                Heading::LeftRight
            };
            let row = rng.random_range(0..height);
            let col = rng.random_range(0..width);
            if grid.move_ship(row, col, kind, heading).is_ok() {
                break;
            }
        }
        log::debug!("deployed {} after {} attempt(s)", kind, attempts);
    }
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("grid", &*self.grid.borrow())
            .field("has_enemy", &self.enemy.is_some())
            .field("shots", &self.shots)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
