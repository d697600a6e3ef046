//! Core engine types: players, RNG, configuration, moves, errors, state.
//!
//! Everything a match needs that is not a card or a rule lives here.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{CardIndices, Move, MoveRecord};
pub use error::{ConfigError, MoveError, RejectionKind, SnapshotError};
pub use state::{Debt, MatchState, PendingAction, PlayerState, TurnCursor};
