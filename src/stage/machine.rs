//! Stage transitions and the stage moves that resolve them.
//!
//! Every function validates completely before its first write, so an `Err`
//! leaves the match untouched. Callers have already checked that `player`
//! may act and that the move is on the open stage's menu.

use smallvec::SmallVec;

use super::Stage;
use crate::cards::{ActionKind, Color};
use crate::core::error::MoveError;
use crate::core::player::PlayerId;
use crate::core::state::{Debt, MatchState, PendingAction};

/// Apply the effect of an action card `player` just played.
///
/// The card is already in the discard pile and the budget already spent.
pub(crate) fn route_action(state: &mut MatchState, player: PlayerId, kind: ActionKind) {
    log::debug!("{player} plays {}", kind.name());

    match kind {
        ActionKind::PassGo => {
            let count = state.config.pass_go_draws;
            state.draw_cards(player, count);
        }
        ActionKind::DebtCollection => {
            let amount = state.config.debt_amount;
            let opponents: Vec<PlayerId> = state.players.others(player).collect();
            if let [debtor] = opponents[..] {
                state.debt_owed.insert(debtor, Debt { amount, creditor: player });
                open(state, Stage::PayingDebt, vec![debtor]);
            } else {
                state.pending_action = Some(PendingAction::DebtCollection { amount, creditor: player });
                open(state, Stage::SelectDebtTarget, vec![player]);
            }
        }
        ActionKind::Birthday => {
            let opponents: Vec<PlayerId> = state.players.others(player).collect();
            state.pending_action = Some(PendingAction::Birthday { collector: player });
            state.birthday_payments = opponents.iter().map(|&p| (p, None)).collect();
            open(state, Stage::PayingBirthday, opponents);
        }
        ActionKind::StealSet => open(state, Stage::SelectPropertySet, vec![player]),
        ActionKind::StealSingleProperty => open(state, Stage::SelectSingleProperty, vec![player]),
        ActionKind::SwapProperty => open(state, Stage::SelectPropertiesForSwap, vec![player]),
        ActionKind::BlockAction => {
            state.pending_action = None;
        }
    }
}

fn open(state: &mut MatchState, stage: Stage, players: Vec<PlayerId>) {
    log::debug!("stage {stage} opened for {players:?}");
    state.cursor.open_stage(stage, players);
}

fn close(state: &mut MatchState) {
    if let Some(stage) = state.cursor.stage {
        log::debug!("stage {stage} closed");
    }
    state.cursor.close_stage();
}

/// Open a response window for `responder` against the pending action.
pub(crate) fn open_response_window(state: &mut MatchState, responder: PlayerId) -> Result<(), MoveError> {
    if state.pending_action.is_none() {
        return Err(MoveError::NoPendingAction);
    }
    if !state.players.contains(responder) {
        return Err(MoveError::UnknownPlayer(responder));
    }
    open(state, Stage::RespondToAction, vec![responder]);
    Ok(())
}

/// `target` must be seated and must not be `player`.
fn check_target(state: &MatchState, player: PlayerId, target: PlayerId) -> Result<(), MoveError> {
    if !state.players.contains(target) {
        return Err(MoveError::UnknownPlayer(target));
    }
    if target == player {
        return Err(MoveError::SelfTarget);
    }
    Ok(())
}

/// Indices must be in range and pairwise distinct.
fn check_indices(indices: &[usize], len: usize) -> Result<(), MoveError> {
    let mut sorted: SmallVec<[usize; 8]> = SmallVec::from_slice(indices);
    sorted.sort_unstable();
    for (i, &index) in sorted.iter().enumerate() {
        if index >= len {
            return Err(MoveError::CardIndexOutOfRange { index, len });
        }
        if i > 0 && sorted[i - 1] == index {
            return Err(MoveError::DuplicateCardIndex(index));
        }
    }
    Ok(())
}

/// Move bank cards from `payer` to `payee` to cover `owed`.
///
/// A payer whose whole bank is worth less than `owed` hands over the
/// entire bank whatever `indices` says. Otherwise the selection must be
/// valid and cover the debt, and exactly those cards move. Returns the
/// value transferred.
fn settle_payment(
    state: &mut MatchState,
    payer: PlayerId,
    payee: PlayerId,
    owed: u32,
    indices: &[usize],
) -> Result<u32, MoveError> {
    let bank = &state.players.get(payer).ok_or(MoveError::UnknownPlayer(payer))?.bank;
    let bankrupt = bank.total_value() < owed;
    if !bankrupt {
        check_indices(indices, bank.len())?;
        let paid = bank.value_at(indices);
        if paid < owed {
            return Err(MoveError::InsufficientPayment { paid, owed });
        }
    }

    let (from, to) = state
        .players
        .pair_mut(payer, payee)
        .ok_or(MoveError::UnknownPlayer(payee))?;
    let cards = if bankrupt {
        from.bank.take_all()
    } else {
        from.bank.take_many(indices)
    };
    let paid: u32 = cards.iter().map(|c| c.value()).sum();
    log::debug!("{payer} pays {paid} to {payee} ({} cards, owed {owed})", cards.len());
    to.bank.extend(cards);
    Ok(paid)
}

pub(crate) fn select_debt_target(
    state: &mut MatchState,
    player: PlayerId,
    target: PlayerId,
) -> Result<(), MoveError> {
    let Some(PendingAction::DebtCollection { amount, creditor }) = state.pending_action else {
        return Err(MoveError::NoPendingAction);
    };
    check_target(state, creditor, target)?;

    log::debug!("{player} sends a debt of {amount} to {target}");
    state.debt_owed.insert(target, Debt { amount, creditor });
    state.pending_action = None;
    open(state, Stage::PayingDebt, vec![target]);
    Ok(())
}

pub(crate) fn pay_debt(state: &mut MatchState, player: PlayerId, indices: &[usize]) -> Result<(), MoveError> {
    let debt = *state.debt_owed.get(&player).ok_or(MoveError::NoDebtOwed(player))?;
    settle_payment(state, player, debt.creditor, debt.amount, indices)?;
    state.debt_owed.remove(&player);
    close(state);
    Ok(())
}

pub(crate) fn skip_payment(state: &mut MatchState, player: PlayerId) -> Result<(), MoveError> {
    if !state.debt_owed.contains_key(&player) {
        return Err(MoveError::NoDebtOwed(player));
    }
    if !state.players[player].bank.is_empty() {
        return Err(MoveError::BankNotEmpty);
    }
    log::debug!("{player} skips payment with an empty bank");
    state.debt_owed.remove(&player);
    close(state);
    Ok(())
}

pub(crate) fn pay_birthday(state: &mut MatchState, player: PlayerId, indices: &[usize]) -> Result<(), MoveError> {
    let Some(PendingAction::Birthday { collector }) = state.pending_action else {
        return Err(MoveError::NoPendingAction);
    };
    match state.birthday_payments.get(&player) {
        None => return Err(MoveError::NoDebtOwed(player)),
        Some(Some(_)) => return Err(MoveError::AlreadyPaid(player)),
        Some(None) => {}
    }

    let owed = state.config.birthday_amount;
    let paid = settle_payment(state, player, collector, owed, indices)?;
    state.birthday_payments.insert(player, Some(paid));
    state.cursor.active_players.retain(|&p| p != player);

    if state.birthday_payments.values().all(Option::is_some) {
        state.pending_action = None;
        state.birthday_payments.clear();
        close(state);
    }
    Ok(())
}

pub(crate) fn select_set_to_steal(
    state: &mut MatchState,
    player: PlayerId,
    target: PlayerId,
    color: Color,
) -> Result<(), MoveError> {
    check_target(state, player, target)?;
    if !state.players[target].properties.is_complete(color) {
        return Err(MoveError::SetNotComplete(color));
    }

    let stolen = state.players[target].properties.take_all(color);
    log::debug!("{player} steals the {color} set ({} cards) from {target}", stolen.len());
    state.players[player].properties.extend(color, stolen);
    close(state);
    Ok(())
}

pub(crate) fn select_property_to_steal(
    state: &mut MatchState,
    player: PlayerId,
    target: PlayerId,
    color: Color,
    index: usize,
) -> Result<(), MoveError> {
    check_target(state, player, target)?;
    let properties = &state.players[target].properties;
    if properties.is_complete(color) {
        return Err(MoveError::SetComplete(color));
    }
    if properties.card(color, index).is_none() {
        return Err(MoveError::PropertyIndexOutOfRange { color, index });
    }

    let (thief, victim) = state
        .players
        .pair_mut(player, target)
        .ok_or(MoveError::UnknownPlayer(target))?;
    if let Some(card) = victim.properties.remove(color, index) {
        log::debug!("{player} steals {} from {target}", card.id);
        thief.properties.push(color, card);
    }
    close(state);
    Ok(())
}

pub(crate) fn select_property_swap(
    state: &mut MatchState,
    player: PlayerId,
    my: (Color, usize),
    target: PlayerId,
    their: (Color, usize),
) -> Result<(), MoveError> {
    let (my_color, my_index) = my;
    let (their_color, their_index) = their;

    check_target(state, player, target)?;
    let mine = &state.players[player].properties;
    let theirs = &state.players[target].properties;
    if mine.is_complete(my_color) {
        return Err(MoveError::SetComplete(my_color));
    }
    if theirs.is_complete(their_color) {
        return Err(MoveError::SetComplete(their_color));
    }
    if mine.card(my_color, my_index).is_none() {
        return Err(MoveError::PropertyIndexOutOfRange { color: my_color, index: my_index });
    }
    if theirs.card(their_color, their_index).is_none() {
        return Err(MoveError::PropertyIndexOutOfRange { color: their_color, index: their_index });
    }

    let (me, them) = state
        .players
        .pair_mut(player, target)
        .ok_or(MoveError::UnknownPlayer(target))?;
    if let (Some(given), Some(taken)) = (
        me.properties.remove(my_color, my_index),
        them.properties.remove(their_color, their_index),
    ) {
        log::debug!("{player} swaps {} for {} with {target}", given.id, taken.id);
        them.properties.push(my_color, given);
        me.properties.push(their_color, taken);
    }
    close(state);
    Ok(())
}

pub(crate) fn play_just_say_no(state: &mut MatchState, player: PlayerId) -> Result<(), MoveError> {
    if state.pending_action.is_none() {
        return Err(MoveError::NoPendingAction);
    }
    log::debug!("{player} blocks the pending action");
    resolve_response(state);
    Ok(())
}

pub(crate) fn accept_action(state: &mut MatchState, player: PlayerId) -> Result<(), MoveError> {
    log::debug!("{player} accepts the pending action");
    resolve_response(state);
    Ok(())
}

fn resolve_response(state: &mut MatchState) {
    state.pending_action = None;
    state.birthday_payments.clear();
    close(state);
}
