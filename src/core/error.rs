//! Error types.
//!
//! - `ConfigError`: bad setup parameters; no match is created.
//! - `MoveError`: a rejected move. The match state is left untouched and
//!   the same player may submit a corrected move.
//! - `SnapshotError`: a snapshot could not be encoded or decoded.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Color;
use crate::stage::Stage;

/// Errors raised while validating a `MatchConfig`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("player count {count} outside {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error("actions per turn must be at least 1")]
    ZeroActionBudget,
    #[error("sets needed to win must be at least 1")]
    ZeroWinThreshold,
    #[error("a {deck}-card deck cannot deal {needed} opening cards")]
    DeckTooSmall { deck: usize, needed: usize },
}

/// Broad class of a rejected move, for hosts that only relay "try again".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionKind {
    /// Out-of-range index, wrong card type, no budget, wrong stage, or a
    /// broken steal/swap rule.
    InvalidMove,
    /// Targeting yourself or a seat that does not exist.
    IllegalTarget,
}

/// Reasons a move is rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MoveError {
    #[error("the match is over")]
    MatchOver,
    #[error("{0} cannot act right now")]
    NotYourTurn(PlayerId),
    #[error("{name} is not allowed during {stage}")]
    StageActive { stage: Stage, name: &'static str },
    #[error("{name} can only be played inside its stage")]
    OutsideStage { name: &'static str },
    #[error("no actions remaining this turn")]
    NoActionsRemaining,
    #[error("card index {index} out of range for {len} cards")]
    CardIndexOutOfRange { index: usize, len: usize },
    #[error("card index {0} selected twice")]
    DuplicateCardIndex(usize),
    #[error("card at index {index} is not a {expected} card")]
    WrongCardKind { index: usize, expected: &'static str },
    #[error("no action is pending")]
    NoPendingAction,
    #[error("{0} owes nothing")]
    NoDebtOwed(PlayerId),
    #[error("{0} has already paid")]
    AlreadyPaid(PlayerId),
    #[error("selected cards are worth {paid}, {owed} is owed")]
    InsufficientPayment { paid: u32, owed: u32 },
    #[error("payment can only be skipped with an empty bank")]
    BankNotEmpty,
    #[error("{0} set is not complete")]
    SetNotComplete(Color),
    #[error("{0} set is complete and cannot be split")]
    SetComplete(Color),
    #[error("no {color} property at index {index}")]
    PropertyIndexOutOfRange { color: Color, index: usize },
    #[error("{0} is not seated in this match")]
    UnknownPlayer(PlayerId),
    #[error("cannot target yourself")]
    SelfTarget,
}

impl MoveError {
    #[must_use]
    pub fn kind(&self) -> RejectionKind {
        match self {
            MoveError::UnknownPlayer(_) | MoveError::SelfTarget => RejectionKind::IllegalTarget,
            _ => RejectionKind::InvalidMove,
        }
    }
}

/// Errors from encoding or decoding a match snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(MoveError::SelfTarget.kind(), RejectionKind::IllegalTarget);
        assert_eq!(MoveError::UnknownPlayer(PlayerId::new(9)).kind(), RejectionKind::IllegalTarget);
        assert_eq!(MoveError::NoActionsRemaining.kind(), RejectionKind::InvalidMove);
        assert_eq!(MoveError::SetComplete(Color::Red).kind(), RejectionKind::InvalidMove);
    }

    #[test]
    fn test_messages() {
        let err = MoveError::InsufficientPayment { paid: 3, owed: 5 };
        assert_eq!(err.to_string(), "selected cards are worth 3, 5 is owed");

        let err = MoveError::StageActive {
            stage: Stage::PayingDebt,
            name: "playMoney",
        };
        assert_eq!(err.to_string(), "playMoney is not allowed during payingDebt");

        let err = ConfigError::PlayerCount { count: 6, min: 2, max: 5 };
        assert_eq!(err.to_string(), "player count 6 outside 2..=5");
    }
}
