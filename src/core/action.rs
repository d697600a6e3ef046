//! Moves: the requests a host submits on behalf of a player.
//!
//! `Move` is a closed enum. Its serde form is the wire contract hosts relay
//! from clients: `{"payDebt": {"cardIndices": [0, 2]}}`, or a bare string
//! such as `"endTurn"` for moves without arguments. Variant and field names
//! are fixed; `Move::name` returns the same move name.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Color;

/// Indices into a bank selected for a payment.
///
/// SmallVec keeps typical selections (1-4 cards) off the heap.
pub type CardIndices = SmallVec<[usize; 4]>;

/// A move request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Move {
    // === Main turn ===
    /// Bank the hand card at `card_index`.
    PlayMoney { card_index: usize },
    /// Lay down the property card at `card_index`.
    PlayProperty { card_index: usize },
    /// Play the action card at `card_index`.
    PlayAction { card_index: usize },
    /// End the turn early.
    EndTurn,

    // === Stage moves ===
    SelectDebtTarget { target: PlayerId },
    PayDebt { card_indices: CardIndices },
    SkipPayment,
    PayBirthday { card_indices: CardIndices },
    SelectSetToSteal { target: PlayerId, color: Color },
    SelectPropertyToSteal { target: PlayerId, color: Color, property_index: usize },
    SelectPropertySwap {
        my_color: Color,
        my_index: usize,
        target: PlayerId,
        their_color: Color,
        their_index: usize,
    },
    PlayJustSayNo,
    AcceptAction,
}

impl Move {
    /// Wire name of this move.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Move::PlayMoney { .. } => "playMoney",
            Move::PlayProperty { .. } => "playProperty",
            Move::PlayAction { .. } => "playAction",
            Move::EndTurn => "endTurn",
            Move::SelectDebtTarget { .. } => "selectDebtTarget",
            Move::PayDebt { .. } => "payDebt",
            Move::SkipPayment => "skipPayment",
            Move::PayBirthday { .. } => "payBirthday",
            Move::SelectSetToSteal { .. } => "selectSetToSteal",
            Move::SelectPropertyToSteal { .. } => "selectPropertyToSteal",
            Move::SelectPropertySwap { .. } => "selectPropertySwap",
            Move::PlayJustSayNo => "playJustSayNo",
            Move::AcceptAction => "acceptAction",
        }
    }

    /// Does this move spend the turn's action budget?
    #[must_use]
    pub const fn spends_action(&self) -> bool {
        matches!(
            self,
            Move::PlayMoney { .. } | Move::PlayProperty { .. } | Move::PlayAction { .. }
        )
    }

    /// Payment helper.
    #[must_use]
    pub fn pay_debt(indices: &[usize]) -> Self {
        Move::PayDebt {
            card_indices: SmallVec::from_slice(indices),
        }
    }

    /// Payment helper.
    #[must_use]
    pub fn pay_birthday(indices: &[usize]) -> Self {
        Move::PayBirthday {
            card_indices: SmallVec::from_slice(indices),
        }
    }
}

/// A successfully applied move with metadata for history.
///
/// Used for replay and for hosts that relay a move log to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move taken.
    pub action: Move,

    /// Turn number when the move was applied.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Move, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
