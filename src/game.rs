//! Two-player game session: wiring, turn order and end of game.

use rand::rngs::SmallRng;

use crate::attack::{AttackOutcome, AttackResult};
use crate::common::GridError;
use crate::player::{Player, Targeting};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Index of the player whose fleet survived.
    Over { winner: usize },
}

/// Owns both players and decides whose turn it is.
#[derive(Debug)]
pub struct BattleGame {
    players: [Player; 2],
    current: usize,
    status: GameStatus,
}

impl BattleGame {
    /// Start a game between two players, each aiming at the other's grid.
    /// The first player moves first.
    pub fn new(mut first: Player, mut second: Player) -> Self {
        first.set_enemy(second.sea_view());
        second.set_enemy(first.sea_view());
        Self {
            players: [first, second],
            current: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the player whose turn it is.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn winner(&self) -> Option<usize> {
        match self.status {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    /// Fire the current player's shot. The turn passes only after a miss.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        if self.status != GameStatus::InProgress {
            return Err(GridError::GameOver);
        }
        let other = 1 - self.current;
        let result = self.players[self.current].shoot(row, col)?;

        if self.players[other].is_destroyed() {
            self.status = GameStatus::Over {
                winner: self.current,
            };
            log::info!(
                "player {} wins after {} shots",
                self.current + 1,
                self.players[self.current].shots()
            );
        } else if result.outcome() == AttackOutcome::Miss {
            self.current = other;
        }
        Ok(result)
    }

    /// Let `targeting` choose a tile for the current player and shoot it.
    pub fn take_turn(
        &mut self,
        targeting: &mut dyn Targeting,
        rng: &mut SmallRng,
    ) -> Result<AttackResult, GridError> {
        if self.status != GameStatus::InProgress {
            return Err(GridError::GameOver);
        }
        let enemy = self.players[self.current]
            .enemy()
            .ok_or(GridError::NoEnemy)?
            .clone();
        let (row, col) = targeting
            .select_target(rng, &enemy)
            .ok_or(GridError::NoTarget)?;
        let result = self.shoot(row, col)?;
        targeting.handle_attack_result(&result);
        Ok(result)
    }
}
