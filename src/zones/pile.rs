//! Ordered card zones.
//!
//! A `Pile` is used for every zone: draw pile, discard pile, hands and
//! banks. Only the draw pile's order is meaningful; its top is the end of
//! the vec, so drawing is a `pop`.

use serde::{Deserialize, Serialize};

use crate::cards::catalog::bank_total;
use crate::cards::Card;
use crate::core::rng::GameRng;

/// An ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Put a card on top (end).
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Take the top card.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Remove the cards at `indices`.
    ///
    /// Indices must be in range and distinct. Removal runs from the highest
    /// index down so earlier positions stay valid.
    pub fn take_many(&mut self, indices: &[usize]) -> Vec<Card> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
            .into_iter()
            .filter_map(|index| self.take(index))
            .collect()
    }

    /// Remove every card.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Bank value of the whole pile.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        bank_total(&self.cards)
    }

    /// Sum of the values at `indices`, skipping out-of-range positions.
    #[must_use]
    pub fn value_at(&self, indices: &[usize]) -> u32 {
        indices
            .iter()
            .filter_map(|&i| self.cards.get(i))
            .map(Card::value)
            .sum()
    }

    /// Move cards from the end of this pile onto `discard` until at most
    /// `limit` remain. Returns how many were discarded.
    pub fn discard_down_to(&mut self, limit: usize, discard: &mut Pile) -> usize {
        let mut discarded = 0;
        while self.cards.len() > limit {
            if let Some(card) = self.cards.pop() {
                discard.push(card);
                discarded += 1;
            }
        }
        discarded
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}

/// Draw one card, reshuffling `discard` into `draw` first if `draw` is empty.
///
/// Returns `None` only when both piles are empty.
pub fn draw_with_reshuffle(draw: &mut Pile, discard: &mut Pile, rng: &mut GameRng) -> Option<Card> {
    if draw.is_empty() && !discard.is_empty() {
        log::debug!("draw pile empty, reshuffling {} discarded cards", discard.len());
        draw.extend(discard.take_all());
        draw.shuffle(rng);
    }
    draw.pop_top()
}
