//! # dhandho-engine
//!
//! Rules engine for Dhandho, a property-trading card game for 2-5 players.
//!
//! Players bank money, lay down properties of seven colors and play action
//! cards that collect debts, steal properties or swap them. The first
//! player to hold three complete property sets wins.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: a match is one `MatchState` value. The engine has
//!    no globals, and a host can run any number of matches side by side.
//!
//! 2. **All or Nothing**: a move is validated completely before anything
//!    is written. A rejected move returns `Err(MoveError)` and leaves the
//!    state untouched.
//!
//! 3. **Stages as Data**: an action card that needs another player's
//!    answer opens a named `Stage`. The cursor lists who may act and the
//!    stage lists which moves they may make.
//!
//! 4. **Deterministic**: all randomness comes from an injected `GameRng`,
//!    so a seed reproduces a match exactly.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, moves, errors, match state
//! - `cards`: catalog, card instances, property collections, deck builder
//! - `zones`: ordered piles (draw, discard, hand, bank)
//! - `stage`: stage machine for interactive action cards
//! - `turn`: turn controller (draw, plays, end of turn)
//! - `rules`: `RulesEngine` trait and the `Dhandho` implementation
//! - `host`: registry mapping match ids to match states
//!
//! ## Example
//!
//! ```
//! use dhandho_engine::{Dhandho, GameRng, Move, PlayerId, RulesEngine};
//!
//! let mut state = dhandho_engine::setup(2, GameRng::new(42)).unwrap();
//! let outcome = Dhandho
//!     .apply_move(&mut state, PlayerId::new(0), &Move::PlayMoney { card_index: 0 })
//!     .unwrap();
//!
//! assert_eq!(state.actions_remaining, 2);
//! assert!(!outcome.turn_ended);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod stage;
mod turn;
pub mod rules;
pub mod host;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    MatchConfig,
    Move, MoveRecord,
    ConfigError, MoveError, RejectionKind, SnapshotError,
    MatchState, PlayerState, PendingAction, Debt,
};

pub use crate::cards::{ActionKind, Card, CardFace, CardId, Color, PropertyCollection};

pub use crate::zones::Pile;

pub use crate::stage::Stage;

pub use crate::rules::{setup, Dhandho, GameResult, MoveOutcome, RulesEngine};

pub use crate::host::{HostError, MatchId, MatchRegistry};
