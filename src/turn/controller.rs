use crate::cards::CardFace;
use crate::core::error::MoveError;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;
use crate::rules::is_winner;
use crate::stage;

/// Start `player`'s turn: main stage, full budget, opening draw.
pub(crate) fn begin_turn(state: &mut MatchState, player: PlayerId) {
    state.cursor.begin_turn(player);
    state.actions_remaining = state.config.actions_per_turn;
    let drawn = state.draw_cards(player, state.config.draws_per_turn);
    log::debug!(
        "turn {} begins for {player}: drew {drawn}, hand {}",
        state.turn_number,
        state.players[player].hand.len()
    );
}

/// Budget and hand-index checks shared by the three plays.
fn check_play(state: &MatchState, player: PlayerId, index: usize) -> Result<&CardFace, MoveError> {
    if state.actions_remaining == 0 {
        return Err(MoveError::NoActionsRemaining);
    }
    let hand = &state.players[player].hand;
    hand.get(index)
        .map(|card| &card.face)
        .ok_or(MoveError::CardIndexOutOfRange { index, len: hand.len() })
}

/// Bank any hand card.
pub(crate) fn play_money(state: &mut MatchState, player: PlayerId, index: usize) -> Result<(), MoveError> {
    check_play(state, player, index)?;

    let seat = &mut state.players[player];
    if let Some(card) = seat.hand.take(index) {
        seat.bank.push(card);
    }
    state.actions_remaining -= 1;
    Ok(())
}

/// Lay a property card into the sequence of its color.
pub(crate) fn play_property(state: &mut MatchState, player: PlayerId, index: usize) -> Result<(), MoveError> {
    let CardFace::Property { color, .. } = *check_play(state, player, index)? else {
        return Err(MoveError::WrongCardKind { index, expected: "property" });
    };

    let seat = &mut state.players[player];
    if let Some(card) = seat.hand.take(index) {
        seat.properties.push(color, card);
    }
    state.actions_remaining -= 1;
    Ok(())
}

/// Discard an action card, spend the budget, then apply its effect.
pub(crate) fn play_action(state: &mut MatchState, player: PlayerId, index: usize) -> Result<(), MoveError> {
    let CardFace::Action { kind } = *check_play(state, player, index)? else {
        return Err(MoveError::WrongCardKind { index, expected: "action" });
    };

    if let Some(card) = state.players[player].hand.take(index) {
        state.discard_pile.push(card);
    }
    state.actions_remaining -= 1;
    stage::route_action(state, player, kind);
    Ok(())
}

/// Explicit `endTurn`. Abandons an open selection stage together with any
/// pending action it was resolving.
pub(crate) fn request_end_turn(state: &mut MatchState) {
    if let Some(open) = state.stage() {
        log::debug!("{} abandons {open}", state.current_player());
        state.pending_action = None;
        state.cursor.close_stage();
    }
    state.actions_remaining = 0;
}

/// End the current turn: discard down to the hand limit and check the
/// win condition. Returns the current player if they have won.
pub(crate) fn end_turn(state: &mut MatchState) -> Option<PlayerId> {
    let player = state.current_player();
    state.actions_remaining = 0;

    let limit = state.config.hand_limit;
    let seat = &mut state.players[player];
    let discarded = seat.hand.discard_down_to(limit, &mut state.discard_pile);
    log::debug!("turn {} ends for {player}: discarded {discarded}", state.turn_number);

    is_winner(state, player).then_some(player)
}

/// Pass the turn to the next seat.
pub(crate) fn advance(state: &mut MatchState) {
    let next = state.current_player().next(state.player_count());
    state.turn_number += 1;
    state.move_sequence = 0;
    begin_turn(state, next);
}
