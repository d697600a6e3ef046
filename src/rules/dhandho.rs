//! The Dhandho rules.
//!
//! `Dhandho` is stateless. Every call takes the `MatchState` it works on,
//! so one value serves every match a host runs.
//!
//! ## Move pipeline
//!
//! 1. **Authorize**: match not over, player seated and active, move on the
//!    menu of the open stage (or the main menu when no stage is open).
//! 2. **Dispatch**: the turn controller or the stage machine validates the
//!    arguments and applies the move.
//! 3. **Record**: append to the move history.
//! 4. **Settle**: end the turn if the budget is spent and no stage is open,
//!    scan every player for a winner, pass the turn on.

use crate::cards::{build_deck, CardFace};
use crate::core::action::{CardIndices, Move};
use crate::core::config::MatchConfig;
use crate::core::error::{ConfigError, MoveError};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::{MatchState, PendingAction};
use crate::stage::{self, Stage, MAIN_MENU};
use crate::turn;
use crate::zones::Pile;

use super::engine::{GameResult, MoveOutcome, RulesEngine};

/// The Dhandho rules engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dhandho;

/// Standard match for `player_count` players.
///
/// ```
/// use dhandho_engine::core::{GameRng, PlayerId};
///
/// let state = dhandho_engine::setup(2, GameRng::new(7)).unwrap();
/// assert_eq!(state.current_player(), PlayerId::new(0));
/// assert_eq!(state.players[PlayerId::new(0)].hand.len(), 7);
/// assert_eq!(state.players[PlayerId::new(1)].hand.len(), 5);
/// ```
pub fn setup(player_count: usize, rng: GameRng) -> Result<MatchState, ConfigError> {
    Dhandho.setup(MatchConfig::new(player_count), rng)
}

/// Does `player` hold enough complete sets to win?
#[must_use]
pub fn is_winner(state: &MatchState, player: PlayerId) -> bool {
    state
        .player(player)
        .is_some_and(|seat| seat.properties.complete_set_count() >= state.config.sets_to_win)
}

impl Dhandho {
    /// Open a response window for `responder` against the pending action.
    ///
    /// Hosts call this to offer a block before the pending action resolves.
    /// The responder then answers with `playJustSayNo` or `acceptAction`.
    pub fn open_response_window(&self, state: &mut MatchState, responder: PlayerId) -> Result<(), MoveError> {
        if state.is_over() {
            return Err(MoveError::MatchOver);
        }
        stage::open_response_window(state, responder)
    }

    fn authorize(state: &MatchState, player: PlayerId, mv: &Move) -> Result<(), MoveError> {
        if state.is_over() {
            return Err(MoveError::MatchOver);
        }
        if !state.players.contains(player) {
            return Err(MoveError::UnknownPlayer(player));
        }
        if !state.cursor.is_active(player) {
            return Err(MoveError::NotYourTurn(player));
        }

        let name = mv.name();
        match state.stage() {
            None if MAIN_MENU.contains(&name) => Ok(()),
            None => Err(MoveError::OutsideStage { name }),
            Some(open) if open.permits(mv) => Ok(()),
            Some(open) if open.is_selection() && *mv == Move::EndTurn => Ok(()),
            Some(open) => Err(MoveError::StageActive { stage: open, name }),
        }
    }

    fn dispatch(state: &mut MatchState, player: PlayerId, mv: &Move) -> Result<(), MoveError> {
        match mv {
            Move::PlayMoney { card_index } => turn::play_money(state, player, *card_index),
            Move::PlayProperty { card_index } => turn::play_property(state, player, *card_index),
            Move::PlayAction { card_index } => turn::play_action(state, player, *card_index),
            Move::EndTurn => {
                turn::request_end_turn(state);
                Ok(())
            }
            Move::SelectDebtTarget { target } => stage::select_debt_target(state, player, *target),
            Move::PayDebt { card_indices } => stage::pay_debt(state, player, card_indices),
            Move::SkipPayment => stage::skip_payment(state, player),
            Move::PayBirthday { card_indices } => stage::pay_birthday(state, player, card_indices),
            Move::SelectSetToSteal { target, color } => stage::select_set_to_steal(state, player, *target, *color),
            Move::SelectPropertyToSteal {
                target,
                color,
                property_index,
            } => stage::select_property_to_steal(state, player, *target, *color, *property_index),
            Move::SelectPropertySwap {
                my_color,
                my_index,
                target,
                their_color,
                their_index,
            } => stage::select_property_swap(
                state,
                player,
                (*my_color, *my_index),
                *target,
                (*their_color, *their_index),
            ),
            Move::PlayJustSayNo => stage::play_just_say_no(state, player),
            Move::AcceptAction => stage::accept_action(state, player),
        }
    }

    fn settle(state: &mut MatchState) -> MoveOutcome {
        let turn_ended = state.stage().is_none() && state.actions_remaining == 0;
        if turn_ended {
            if let Some(winner) = turn::end_turn(state) {
                Self::declare(state, winner);
            }
        }

        if state.result.is_none() {
            let winner = state.players.player_ids().find(|&p| is_winner(state, p));
            if let Some(winner) = winner {
                Self::declare(state, winner);
            }
        }

        if turn_ended && state.result.is_none() {
            turn::advance(state);
        }

        MoveOutcome {
            turn_ended,
            current_player: state.current_player(),
            stage: state.stage(),
            result: state.result,
        }
    }

    fn declare(state: &mut MatchState, winner: PlayerId) {
        log::info!(
            "{winner} wins on turn {} with {} complete sets",
            state.turn_number,
            state.players[winner].properties.complete_set_count()
        );
        state.result = Some(GameResult { winner });
    }
}

/// Highest-value-first selection covering `owed`, or nothing when the
/// whole bank falls short and the bankruptcy rule takes over.
fn payment_selection(bank: &Pile, owed: u32) -> CardIndices {
    let mut selection = CardIndices::new();
    if bank.total_value() < owed {
        return selection;
    }

    let mut by_value: Vec<usize> = (0..bank.len()).collect();
    by_value.sort_by_key(|&i| std::cmp::Reverse(bank.get(i).map_or(0, |c| c.value())));
    let mut paid = 0;
    for index in by_value {
        if paid >= owed {
            break;
        }
        paid += bank.get(index).map_or(0, |c| c.value());
        selection.push(index);
    }
    selection
}

impl RulesEngine for Dhandho {
    fn setup(&self, config: MatchConfig, mut rng: GameRng) -> Result<MatchState, ConfigError> {
        let deck = build_deck(&mut rng);
        let hand_size = config.starting_hand_size;
        let seed = rng.seed();
        let mut state = MatchState::new(config, deck, rng)?;

        for player in PlayerId::all(state.player_count()) {
            state.draw_cards(player, hand_size);
        }
        turn::begin_turn(&mut state, PlayerId::new(0));

        log::info!("match created: {} players, seed {seed}", state.player_count());
        Ok(state)
    }

    fn legal_moves(&self, state: &MatchState, player: PlayerId) -> Vec<Move> {
        let mut moves = Vec::new();
        if state.is_over() || !state.cursor.is_active(player) {
            return moves;
        }
        let Some(seat) = state.player(player) else {
            return moves;
        };

        let Some(open) = state.stage() else {
            if state.actions_remaining > 0 {
                for (card_index, card) in seat.hand.cards().iter().enumerate() {
                    moves.push(Move::PlayMoney { card_index });
                    match card.face {
                        CardFace::Property { .. } => moves.push(Move::PlayProperty { card_index }),
                        CardFace::Action { .. } => moves.push(Move::PlayAction { card_index }),
                        CardFace::Money { .. } => {}
                    }
                }
            }
            moves.push(Move::EndTurn);
            return moves;
        };

        match open {
            Stage::SelectDebtTarget => {
                if let Some(PendingAction::DebtCollection { creditor, .. }) = state.pending_action {
                    moves.extend(state.players.others(creditor).map(|target| Move::SelectDebtTarget { target }));
                }
            }
            Stage::PayingDebt => {
                if let Some(debt) = state.debt_owed.get(&player) {
                    if seat.bank.is_empty() {
                        moves.push(Move::SkipPayment);
                    }
                    moves.push(Move::PayDebt {
                        card_indices: payment_selection(&seat.bank, debt.amount),
                    });
                }
            }
            Stage::PayingBirthday => {
                if matches!(state.birthday_payments.get(&player), Some(None)) {
                    moves.push(Move::PayBirthday {
                        card_indices: payment_selection(&seat.bank, state.config.birthday_amount),
                    });
                }
            }
            Stage::SelectPropertySet => {
                for (target, other) in state.players.iter().filter(|(p, _)| *p != player) {
                    moves.extend(
                        other
                            .properties
                            .complete_colors()
                            .map(|color| Move::SelectSetToSteal { target, color }),
                    );
                }
            }
            Stage::SelectSingleProperty => {
                for (target, other) in state.players.iter().filter(|(p, _)| *p != player) {
                    for (color, cards) in other.properties.iter() {
                        if other.properties.is_complete(color) {
                            continue;
                        }
                        moves.extend((0..cards.len()).map(|property_index| Move::SelectPropertyToSteal {
                            target,
                            color,
                            property_index,
                        }));
                    }
                }
            }
            Stage::SelectPropertiesForSwap => {
                let swappable = |props: &crate::cards::PropertyCollection| {
                    props
                        .iter()
                        .filter(|(color, _)| !props.is_complete(*color))
                        .flat_map(|(color, cards)| (0..cards.len()).map(move |i| (color, i)))
                        .collect::<Vec<_>>()
                };
                let mine = swappable(&seat.properties);
                for (target, other) in state.players.iter().filter(|(p, _)| *p != player) {
                    let theirs = swappable(&other.properties);
                    for &(my_color, my_index) in &mine {
                        for &(their_color, their_index) in &theirs {
                            moves.push(Move::SelectPropertySwap {
                                my_color,
                                my_index,
                                target,
                                their_color,
                                their_index,
                            });
                        }
                    }
                }
            }
            Stage::RespondToAction => {
                if state.pending_action.is_some() {
                    moves.push(Move::PlayJustSayNo);
                }
                moves.push(Move::AcceptAction);
            }
        }

        if open.is_selection() && player == state.current_player() {
            moves.push(Move::EndTurn);
        }
        moves
    }

    fn apply_move(&self, state: &mut MatchState, player: PlayerId, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let applied = Self::authorize(state, player, mv).and_then(|()| Self::dispatch(state, player, mv));
        if let Err(err) = &applied {
            log::debug!("rejected {} from {player}: {err}", mv.name());
        }
        applied?;

        state.record(player, mv.clone());
        Ok(Self::settle(state))
    }

    fn is_terminal(&self, state: &MatchState) -> Option<GameResult> {
        state.result
    }
}
