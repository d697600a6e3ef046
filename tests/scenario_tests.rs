//! End-to-end match scenarios.
//!
//! Each test starts from `setup` and plays through the public move API,
//! the way a host relaying client requests would.

mod common;

use common::{complete, give_action, give_property, lay, p};
use dhandho_engine::cards::{ActionKind, Color};
use dhandho_engine::{
    Dhandho, GameResult, GameRng, MatchConfig, MatchRegistry, MatchState, Move, MoveError, RulesEngine, Stage,
};

/// Test banking the first card of the opening hand.
#[test]
fn test_scenario_play_money() {
    let mut state = dhandho_engine::setup(2, GameRng::new(31)).unwrap();
    let hand_before = state.players[p(0)].hand.len();
    let card = state.players[p(0)].hand.cards()[0].id;

    Dhandho
        .apply_move(&mut state, p(0), &Move::PlayMoney { card_index: 0 })
        .unwrap();

    let seat = &state.players[p(0)];
    assert_eq!(seat.bank.len(), 1);
    assert_eq!(seat.bank.cards()[0].id, card);
    assert_eq!(seat.hand.len(), hand_before - 1);
    assert_eq!(state.actions_remaining, 2);
}

/// Test a debt against a lone opponent with nothing in the bank.
#[test]
fn test_scenario_debt_with_empty_bank() {
    let mut state = dhandho_engine::setup(2, GameRng::new(32)).unwrap();
    let index = give_action(&mut state, p(0), ActionKind::DebtCollection);

    Dhandho
        .apply_move(&mut state, p(0), &Move::PlayAction { card_index: index })
        .unwrap();
    assert_eq!(state.stage(), Some(Stage::PayingDebt));
    assert_eq!(state.cursor.active_players, vec![p(1)]);

    Dhandho.apply_move(&mut state, p(1), &Move::SkipPayment).unwrap();

    assert!(state.debt_owed.is_empty());
    assert!(state.players[p(0)].bank.is_empty());
    assert!(state.players[p(1)].bank.is_empty());
    assert_eq!(state.stage(), None);
    assert_eq!(state.current_player(), p(0));
}

/// Test three complete sets win at the end of the turn.
#[test]
fn test_scenario_win_at_end_of_turn() {
    let mut state = dhandho_engine::setup(2, GameRng::new(33)).unwrap();
    complete(&mut state, p(0), Color::Pink);
    complete(&mut state, p(0), Color::DarkBlue);
    complete(&mut state, p(0), Color::LightGreen);

    let outcome = Dhandho.apply_move(&mut state, p(0), &Move::EndTurn).unwrap();

    assert!(outcome.turn_ended);
    assert_eq!(outcome.result, Some(GameResult { winner: p(0) }));
    assert_eq!(Dhandho.is_terminal(&state), Some(GameResult { winner: p(0) }));
    assert_eq!(state.current_player(), p(0));
    assert_eq!(
        Dhandho.apply_move(&mut state, p(0), &Move::PlayMoney { card_index: 0 }),
        Err(MoveError::MatchOver)
    );
    assert!(Dhandho.legal_moves(&state, p(0)).is_empty());
}

/// Test completing the third set mid-turn decides the match at once.
#[test]
fn test_scenario_win_by_laying_last_property() {
    let mut state = dhandho_engine::setup(3, GameRng::new(34)).unwrap();
    complete(&mut state, p(0), Color::Red);
    complete(&mut state, p(0), Color::Yellow);
    lay(&mut state, p(0), Color::Pink, 1);
    let last = give_property(&mut state, p(0), Color::Pink);

    let outcome = Dhandho
        .apply_move(&mut state, p(0), &Move::PlayProperty { card_index: last })
        .unwrap();

    assert!(!outcome.turn_ended);
    assert_eq!(outcome.result, Some(GameResult { winner: p(0) }));
}

/// Test a lowered win threshold ends the match on the first complete set.
#[test]
fn test_scenario_single_set_match() {
    let config = MatchConfig::new(2).with_sets_to_win(1);
    let mut state = Dhandho.setup(config, GameRng::new(37)).unwrap();
    lay(&mut state, p(0), Color::Pink, 1);
    let last = give_property(&mut state, p(0), Color::Pink);

    let outcome = Dhandho
        .apply_move(&mut state, p(0), &Move::PlayProperty { card_index: last })
        .unwrap();

    assert_eq!(outcome.result, Some(GameResult { winner: p(0) }));
    assert_eq!(state.players[p(0)].properties.complete_set_count(), 1);
}

/// Test stealing the set that completes a third.
#[test]
fn test_scenario_win_by_theft() {
    let mut state = dhandho_engine::setup(2, GameRng::new(35)).unwrap();
    complete(&mut state, p(0), Color::Green);
    complete(&mut state, p(0), Color::Black);
    complete(&mut state, p(1), Color::Red);
    let index = give_action(&mut state, p(0), ActionKind::StealSet);

    Dhandho
        .apply_move(&mut state, p(0), &Move::PlayAction { card_index: index })
        .unwrap();
    let outcome = Dhandho
        .apply_move(&mut state, p(0), &Move::SelectSetToSteal { target: p(1), color: Color::Red })
        .unwrap();

    assert_eq!(outcome.result, Some(GameResult { winner: p(0) }));
    assert_eq!(state.players[p(0)].properties.complete_set_count(), 3);
}

/// Test a snapshot taken mid-match plays on identically.
#[test]
fn test_snapshot_replays_identically() {
    let mut live = dhandho_engine::setup(3, GameRng::new(36)).unwrap();
    Dhandho.apply_move(&mut live, p(0), &Move::EndTurn).unwrap();
    let mut restored = MatchState::from_bytes(&live.to_bytes().unwrap()).unwrap();

    for _ in 0..12 {
        let player = live.current_player();
        Dhandho.apply_move(&mut live, player, &Move::EndTurn).unwrap();
        Dhandho.apply_move(&mut restored, player, &Move::EndTurn).unwrap();
    }
    assert_eq!(live.to_bytes().unwrap(), restored.to_bytes().unwrap());
}

/// Test a host running two matches through the registry.
#[test]
fn test_scenario_registry() {
    let mut registry = MatchRegistry::new();
    let first = registry.create(MatchConfig::new(2), GameRng::new(1)).unwrap();
    let second = registry.create(MatchConfig::new(4), GameRng::new(2)).unwrap();

    registry
        .apply(first, p(0), &Move::PlayMoney { card_index: 0 })
        .unwrap();

    assert_eq!(registry.get(first).unwrap().actions_remaining, 2);
    assert_eq!(registry.get(second).unwrap().actions_remaining, 3);
    assert!(!registry.legal_moves(second, p(0)).unwrap().is_empty());
    assert!(registry.legal_moves(second, p(1)).unwrap().is_empty());
}
