//! Card instances.
//!
//! A `Card` is immutable once the deck is built. Its identity is the
//! `CardId` assigned by the deck builder, unique within one match.

use serde::{Deserialize, Serialize};

use super::catalog::{ActionKind, Color};

/// Instance identifier of a card within one match's deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What is printed on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardFace {
    Property { name: String, color: Color, value: u32 },
    Action { kind: ActionKind },
    Money { value: u32 },
}

/// A single card in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub face: CardFace,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, face: CardFace) -> Self {
        Self { id, face }
    }

    /// Value when sitting in a bank. Action cards are worth nothing.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self.face {
            CardFace::Property { value, .. } | CardFace::Money { value } => value,
            CardFace::Action { .. } => 0,
        }
    }

    /// Color, if this is a property card.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self.face {
            CardFace::Property { color, .. } => Some(color),
            _ => None,
        }
    }

    /// Action kind, if this is an action card.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.face {
            CardFace::Action { kind } => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_money(&self) -> bool {
        matches!(self.face, CardFace::Money { .. })
    }
}
