//! A player's laid-down properties, grouped by color.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::catalog::{is_set_complete, Color};

/// Property cards on the table for one player.
///
/// Holds exactly one sequence per color, indexed by `Color::index`, so a
/// duplicate container for a color cannot exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCollection {
    sets: [Vec<Card>; Color::COUNT],
}

impl PropertyCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards held in `color`.
    #[must_use]
    pub fn get(&self, color: Color) -> &[Card] {
        &self.sets[color.index()]
    }

    /// Card at `index` within `color`.
    #[must_use]
    pub fn card(&self, color: Color, index: usize) -> Option<&Card> {
        self.sets[color.index()].get(index)
    }

    /// Add a card to the end of the `color` sequence.
    ///
    /// Callers pass the card's own color.
    pub fn push(&mut self, color: Color, card: Card) {
        debug_assert_eq!(card.color(), Some(color));
        self.sets[color.index()].push(card);
    }

    /// Add a property card to the sequence of its own color.
    ///
    /// Hands the card back if it is not a property.
    pub fn place(&mut self, card: Card) -> Result<(), Card> {
        match card.color() {
            Some(color) => {
                self.sets[color.index()].push(card);
                Ok(())
            }
            None => Err(card),
        }
    }

    /// Remove and return the card at `index` within `color`.
    pub fn remove(&mut self, color: Color, index: usize) -> Option<Card> {
        let set = &mut self.sets[color.index()];
        (index < set.len()).then(|| set.remove(index))
    }

    /// Empty the `color` sequence, returning its cards in order.
    pub fn take_all(&mut self, color: Color) -> Vec<Card> {
        std::mem::take(&mut self.sets[color.index()])
    }

    /// Append whole cards to `color`.
    pub fn extend(&mut self, color: Color, cards: Vec<Card>) {
        self.sets[color.index()].extend(cards);
    }

    /// Does this player hold a complete `color` set?
    #[must_use]
    pub fn is_complete(&self, color: Color) -> bool {
        is_set_complete(self.get(color), color)
    }

    /// Colors whose sets are complete, in catalog order.
    pub fn complete_colors(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL.into_iter().filter(|&c| self.is_complete(c))
    }

    /// Number of complete sets.
    #[must_use]
    pub fn complete_set_count(&self) -> usize {
        self.complete_colors().count()
    }

    /// Total property cards across every color.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.sets.iter().map(Vec::len).sum()
    }

    /// Iterate over (color, cards) in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &[Card])> {
        Color::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}
