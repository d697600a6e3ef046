//! Shared fixtures for the integration tests.
//!
//! Fixtures move real cards between zones rather than minting new ones, so
//! the 66-card total holds in every test.

#![allow(dead_code)]

use dhandho_engine::cards::{ActionKind, Card, CardFace, Color};
use dhandho_engine::{GameRng, MatchState, PlayerId};

pub fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

/// Standard match with a fixed seed.
pub fn new_match(players: usize) -> MatchState {
    dhandho_engine::setup(players, GameRng::new(2024)).expect("valid player count")
}

/// Remove the first card matching `wanted` from the draw pile, the discard
/// pile or any hand, in that order.
pub fn take_card(state: &mut MatchState, wanted: impl Fn(&Card) -> bool) -> Card {
    if let Some(i) = state.draw_pile.cards().iter().position(&wanted) {
        return state.draw_pile.take(i).expect("index from position");
    }
    if let Some(i) = state.discard_pile.cards().iter().position(&wanted) {
        return state.discard_pile.take(i).expect("index from position");
    }
    for player in PlayerId::all(state.player_count()) {
        if let Some(i) = state.players[player].hand.cards().iter().position(&wanted) {
            return state.players[player].hand.take(i).expect("index from position");
        }
    }
    panic!("no matching card outside banks and tables");
}

/// Put a matching card at the end of `player`'s hand. Returns its index.
pub fn give(state: &mut MatchState, player: PlayerId, wanted: impl Fn(&Card) -> bool) -> usize {
    let card = take_card(state, wanted);
    let hand = &mut state.players[player].hand;
    hand.push(card);
    hand.len() - 1
}

pub fn give_action(state: &mut MatchState, player: PlayerId, kind: ActionKind) -> usize {
    give(state, player, |c| c.action_kind() == Some(kind))
}

pub fn give_property(state: &mut MatchState, player: PlayerId, color: Color) -> usize {
    give(state, player, |c| c.color() == Some(color))
}

/// Lay `count` properties of `color` on `player`'s table.
pub fn lay(state: &mut MatchState, player: PlayerId, color: Color, count: usize) {
    for _ in 0..count {
        let card = take_card(state, |c| c.color() == Some(color));
        state.players[player].properties.push(color, card);
    }
}

/// Lay a complete set of `color`.
pub fn complete(state: &mut MatchState, player: PlayerId, color: Color) {
    lay(state, player, color, color.set_size());
}

/// Move a money card of `value` into `player`'s bank.
pub fn bank(state: &mut MatchState, player: PlayerId, value: u32) {
    let card = take_card(state, |c| c.face == CardFace::Money { value });
    state.players[player].bank.push(card);
}

/// Empty every hand into the discard pile.
pub fn clear_hands(state: &mut MatchState) {
    for player in PlayerId::all(state.player_count()) {
        let cards = state.players[player].hand.take_all();
        state.discard_pile.extend(cards);
    }
}
