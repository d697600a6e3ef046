//! Match state: the single authoritative snapshot of one match.
//!
//! ## MatchState
//!
//! - Draw and discard piles (shared, owned by the match)
//! - Per-player hand, bank and property collection
//! - Action budget for the current turn
//! - Pending action and the debt/birthday payment trackers
//! - Turn/stage cursor: current player, open stage, players allowed to act
//! - Move history and the match result
//! - RNG for reshuffles
//!
//! The engine keeps no global state. Every operation takes a `MatchState`
//! explicitly, and a host may own any number of them.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::MatchConfig;
use super::error::{ConfigError, SnapshotError};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, PropertyCollection};
use crate::rules::GameResult;
use crate::stage::Stage;
use crate::zones::{draw_with_reshuffle, Pile};

/// Zones owned by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hand: Pile,
    pub bank: Pile,
    pub properties: PropertyCollection,
}

impl PlayerState {
    /// Cards this player holds across hand, bank and table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.bank.len() + self.properties.card_count()
    }
}

/// An action card effect waiting on another player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PendingAction {
    /// The creditor still has to pick who pays.
    DebtCollection { amount: u32, creditor: PlayerId },
    /// Every opponent owes the collector.
    Birthday { collector: PlayerId },
}

/// An outstanding debt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub amount: u32,
    pub creditor: PlayerId,
}

/// Whose turn it is and who may act right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCursor {
    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Open stage, `None` for the main turn.
    pub stage: Option<Stage>,

    /// Players allowed to act. One player normally, every opponent at once
    /// while a birthday is collected.
    pub active_players: Vec<PlayerId>,
}

impl TurnCursor {
    fn new(player: PlayerId) -> Self {
        Self {
            current_player: player,
            stage: None,
            active_players: vec![player],
        }
    }

    /// Is `player` allowed to submit a move?
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active_players.contains(&player)
    }

    /// Open `stage` for `players`.
    pub fn open_stage(&mut self, stage: Stage, players: Vec<PlayerId>) {
        self.stage = Some(stage);
        self.active_players = players;
    }

    /// Close any stage and hand control back to the current player.
    pub fn close_stage(&mut self) {
        self.stage = None;
        self.active_players = vec![self.current_player];
    }

    /// Start `player`'s turn in the main stage.
    pub fn begin_turn(&mut self, player: PlayerId) {
        *self = Self::new(player);
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Rules this match runs under.
    pub config: MatchConfig,

    /// Draw pile; the top card is the last element.
    pub draw_pile: Pile,

    pub discard_pile: Pile,

    pub players: PlayerMap<PlayerState>,

    /// Plays left this turn, always within `0..=config.actions_per_turn`.
    pub actions_remaining: u32,

    /// Action waiting for a target or for payments.
    pub pending_action: Option<PendingAction>,

    /// Outstanding debts by debtor.
    pub debt_owed: FxHashMap<PlayerId, Debt>,

    /// Birthday payments by opponent: `None` until that opponent pays.
    pub birthday_payments: FxHashMap<PlayerId, Option<u32>>,

    pub cursor: TurnCursor,

    /// Turn number, starting at 1.
    pub turn_number: u32,

    /// Move counter within the current turn.
    pub move_sequence: u32,

    /// Every applied move, in order.
    pub history: Vector<MoveRecord>,

    /// Set once a player wins.
    pub result: Option<GameResult>,

    /// Randomness for reshuffles.
    pub rng: GameRng,
}

impl MatchState {
    /// Empty table for `config.player_count` players, holding `deck` as the
    /// draw pile. Dealing and the first turn are the rules engine's job.
    ///
    /// Fails when `config` does not validate.
    pub fn new(config: MatchConfig, deck: Vec<Card>, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let first = PlayerId::new(0);
        Ok(Self {
            players: PlayerMap::with_default(config.player_count),
            actions_remaining: config.actions_per_turn,
            config,
            draw_pile: Pile::from_cards(deck),
            discard_pile: Pile::new(),
            pending_action: None,
            debt_owed: FxHashMap::default(),
            birthday_payments: FxHashMap::default(),
            cursor: TurnCursor::new(first),
            turn_number: 1,
            move_sequence: 0,
            history: Vector::new(),
            result: None,
            rng,
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.cursor.current_player
    }

    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        self.cursor.stage
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Draw up to `count` cards into `player`'s hand, reshuffling the
    /// discard pile when the draw pile runs out. Stops quietly when both
    /// piles are empty. Returns how many cards were drawn.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            match draw_with_reshuffle(&mut self.draw_pile, &mut self.discard_pile, &mut self.rng) {
                Some(card) => {
                    self.players[player].hand.push(card);
                    drawn += 1;
                }
                None => {
                    log::warn!("{player} drew {drawn} of {count}: draw and discard piles are empty");
                    break;
                }
            }
        }
        drawn
    }

    /// Cards across every zone. Constant for the whole match.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(|(_, p)| p.card_count()).sum::<usize>()
    }

    /// Record a successful move in the history.
    pub fn record(&mut self, player: PlayerId, action: super::action::Move) {
        let sequence = self.move_sequence;
        self.move_sequence += 1;
        self.history
            .push_back(MoveRecord::new(player, action, self.turn_number, sequence));
    }

    /// Encode a snapshot for host-side persistence.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
