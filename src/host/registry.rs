use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::action::Move;
use crate::core::config::MatchConfig;
use crate::core::error::{ConfigError, MoveError};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::MatchState;
use crate::rules::{Dhandho, MoveOutcome, RulesEngine};

/// Registry key for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.0)
    }
}

/// Errors from routing a move through the registry.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HostError {
    #[error("{0} does not exist")]
    UnknownMatch(MatchId),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Every live match a host owns, keyed by `MatchId`.
#[derive(Debug, Default)]
pub struct MatchRegistry<R: RulesEngine = Dhandho> {
    rules: R,
    matches: FxHashMap<MatchId, MatchState>,
    next_id: u64,
}

impl MatchRegistry<Dhandho> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(Dhandho)
    }
}

impl<R: RulesEngine> MatchRegistry<R> {
    /// Registry driving every match with `rules`.
    pub fn with_rules(rules: R) -> Self {
        Self {
            rules,
            matches: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Set up a new match and register it.
    pub fn create(&mut self, config: MatchConfig, rng: GameRng) -> Result<MatchId, ConfigError> {
        let state = self.rules.setup(config, rng)?;
        let id = MatchId(self.next_id);
        self.next_id += 1;
        self.matches.insert(id, state);
        log::debug!("{id} registered ({} live)", self.matches.len());
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: MatchId) -> Option<&MatchState> {
        self.matches.get(&id)
    }

    /// Apply `mv` to match `id`.
    pub fn apply(&mut self, id: MatchId, player: PlayerId, mv: &Move) -> Result<MoveOutcome, HostError> {
        let state = self.matches.get_mut(&id).ok_or(HostError::UnknownMatch(id))?;
        Ok(self.rules.apply_move(state, player, mv)?)
    }

    /// Moves `player` may submit in match `id`.
    pub fn legal_moves(&self, id: MatchId, player: PlayerId) -> Result<Vec<Move>, HostError> {
        let state = self.matches.get(&id).ok_or(HostError::UnknownMatch(id))?;
        Ok(self.rules.legal_moves(state, player))
    }

    /// Drop a match, returning its final state.
    pub fn remove(&mut self, id: MatchId) -> Option<MatchState> {
        self.matches.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.matches.keys().copied()
    }
}
