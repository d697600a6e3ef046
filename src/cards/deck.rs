//! Deck builder.
//!
//! Expands the catalog into the full multiset of cards, assigns each card
//! its instance id, and shuffles with the injected `GameRng`.

use super::card::{Card, CardFace, CardId};
use super::catalog::{ActionKind, Color, MONEY_DENOMINATIONS};
use crate::core::rng::GameRng;

/// Number of property cards in the deck.
pub const PROPERTY_CARDS: usize = 19;

/// Number of action cards in the deck.
pub const ACTION_CARDS: usize = 27;

/// Number of money cards in the deck.
pub const MONEY_CARDS: usize = 20;

/// Total cards in play for the whole match.
pub const DECK_SIZE: usize = PROPERTY_CARDS + ACTION_CARDS + MONEY_CARDS;

/// Every card in catalog order: properties, then actions, then money.
#[must_use]
pub fn unshuffled_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u32;
    let mut push = |face: CardFace| {
        deck.push(Card::new(CardId::new(next_id), face));
        next_id += 1;
    };

    for color in Color::ALL {
        let set = color.set();
        for &name in set.cards {
            push(CardFace::Property {
                name: name.to_string(),
                color,
                value: set.value,
            });
        }
    }

    for kind in ActionKind::ALL {
        for _ in 0..kind.quantity() {
            push(CardFace::Action { kind });
        }
    }

    for (value, quantity) in MONEY_DENOMINATIONS {
        for _ in 0..quantity {
            push(CardFace::Money { value });
        }
    }

    deck
}

/// Build and shuffle a full deck. The last card is the top of the pile.
#[must_use]
pub fn build_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = unshuffled_deck();
    rng.shuffle(&mut deck);
    deck
}
