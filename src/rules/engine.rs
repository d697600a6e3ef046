//! Rules engine trait.
//!
//! A host drives a match through three calls:
//! - `setup`: build the initial state from a config and an RNG
//! - `apply_move`: validate and apply one move, or reject it untouched
//! - `is_terminal`: the match result, once there is one
//!
//! `legal_moves` enumerates moves a player can submit right now. It is
//! used by bots, random playouts and tests.

use serde::{Deserialize, Serialize};

use crate::core::action::Move;
use crate::core::config::MatchConfig;
use crate::core::error::{ConfigError, MoveError};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::MatchState;
use crate::stage::Stage;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// What an accepted move did, for the host to relay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move ended the turn.
    pub turn_ended: bool,

    /// Player whose turn it is after the move.
    pub current_player: PlayerId,

    /// Stage open after the move.
    pub stage: Option<Stage>,

    /// Set when the move decided the match.
    pub result: Option<GameResult>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move` validates fully before writing. `Err` means the state
///   is exactly as it was.
/// - `legal_moves` returns only moves `apply_move` would accept, and an
///   empty vec when the player cannot act.
/// - Implementations hold no per-match state; one engine serves any number
///   of matches.
pub trait RulesEngine {
    /// Build the initial state: deck shuffled, hands dealt, first turn begun.
    fn setup(&self, config: MatchConfig, rng: GameRng) -> Result<MatchState, ConfigError>;

    /// Moves `player` may submit now.
    fn legal_moves(&self, state: &MatchState, player: PlayerId) -> Vec<Move>;

    /// Validate and apply one move.
    fn apply_move(&self, state: &mut MatchState, player: PlayerId, mv: &Move) -> Result<MoveOutcome, MoveError>;

    /// Returns `Some(result)` if the match has ended, `None` if it continues.
    fn is_terminal(&self, state: &MatchState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Can `player` submit any move right now?
    fn can_act(&self, state: &MatchState, player: PlayerId) -> bool {
        !self.legal_moves(state, player).is_empty()
    }
}
