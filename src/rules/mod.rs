//! Rules: the `RulesEngine` trait and the Dhandho rules that implement it.
//!
//! The turn controller and the stage machine hold the individual rules.
//! `Dhandho` sequences them: it authorizes each move, dispatches it,
//! records it and settles the turn and the match result.

pub mod dhandho;
pub mod engine;

pub use dhandho::{is_winner, setup, Dhandho};
pub use engine::{GameResult, MoveOutcome, RulesEngine};
