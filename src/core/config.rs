//! Match configuration.
//!
//! `MatchConfig` carries the player count and every rule constant the
//! turn controller and stage machine read. Hosts can build one in code or
//! deserialize it from their own settings source; `validate` runs before any
//! match is created.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::deck::DECK_SIZE;

/// Fewest players a match can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match can seat.
pub const MAX_PLAYERS: usize = 5;

/// Rule constants for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seats at the table (2-5).
    pub player_count: usize,

    /// Cards dealt to each player at setup.
    pub starting_hand_size: usize,

    /// Cards drawn at the start of each turn.
    pub draws_per_turn: usize,

    /// Plays allowed per turn.
    pub actions_per_turn: u32,

    /// Hand size enforced by the end-of-turn discard.
    pub hand_limit: usize,

    /// Complete property sets needed to win.
    pub sets_to_win: usize,

    /// Amount demanded by a debt collection card.
    pub debt_amount: u32,

    /// Amount each opponent pays on a birthday card.
    pub birthday_amount: u32,

    /// Cards drawn by a Pass Go card.
    pub pass_go_draws: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            starting_hand_size: 5,
            draws_per_turn: 2,
            actions_per_turn: 3,
            hand_limit: 7,
            sets_to_win: 3,
            debt_amount: 5,
            birthday_amount: 2,
            pass_go_draws: 2,
        }
    }
}

impl MatchConfig {
    /// Standard rules for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Override the per-turn action budget.
    #[must_use]
    pub fn with_actions_per_turn(mut self, actions: u32) -> Self {
        self.actions_per_turn = actions;
        self
    }

    /// Override the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Override the number of complete sets needed to win.
    #[must_use]
    pub fn with_sets_to_win(mut self, sets: usize) -> Self {
        self.sets_to_win = sets;
        self
    }

    /// Check the configuration can produce a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.actions_per_turn == 0 {
            return Err(ConfigError::ZeroActionBudget);
        }
        if self.sets_to_win == 0 {
            return Err(ConfigError::ZeroWinThreshold);
        }

        let needed = self.player_count * self.starting_hand_size + self.draws_per_turn;
        if needed > DECK_SIZE {
            return Err(ConfigError::DeckTooSmall {
                deck: DECK_SIZE,
                needed,
            });
        }

        Ok(())
    }
}
