//! Deterministic random number generation for deck shuffles.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine never reaches for thread-local randomness;
//!   every shuffle draws from the `GameRng` handed to setup
//! - **Deterministic**: same seed produces the identical deck order
//! - **Serializable**: O(1) state capture and restore, so a snapshot of a
//!   match reshuffles the discard pile exactly like the live match would
//!
//! ```
//! use dhandho_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used for deck building and reshuffles.
///
/// Uses ChaCha8 for speed while keeping a reproducible, seekable stream.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "GameRngState", from = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed, for live matches.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..=max`.
    pub fn index_through(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Fisher-Yates shuffle in place.
    ///
    /// Walks from the last index down to 1, swapping each slot with a
    /// uniformly chosen index in `[0, i]`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_through(i);
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        GameRng::from_state(&state)
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses the ChaCha8 word position so serialization is O(1) regardless of
/// how many shuffles have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Starting seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index_through(1000), rng2.index_through(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index_through(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index_through(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();

        rng.shuffle(&mut data);
        assert_ne!(data, (1..=20).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(3);
        let mut empty: Vec<u8> = vec![];
        let mut single = vec![9];

        rng.shuffle(&mut empty);
        rng.shuffle(&mut single);

        assert!(empty.is_empty());
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // 3 elements -> 6 permutations, each expected 1/6 of the time.
        let mut rng = GameRng::new(2024);
        let trials = 60_000;
        let mut counts: FxHashMap<[u8; 3], u32> = FxHashMap::default();

        for _ in 0..trials {
            let mut perm = [0u8, 1, 2];
            rng.shuffle(&mut perm);
            *counts.entry(perm).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = trials / 6;
        for (perm, count) in counts {
            let deviation = (count as i64 - expected as i64).abs();
            assert!(deviation < 600, "{perm:?} drawn {count} times, expected ~{expected}");
        }
    }

    #[test]
    fn test_entropy_seed_replays() {
        let mut live = GameRng::from_entropy();
        let mut replay = GameRng::new(live.seed());

        for _ in 0..20 {
            assert_eq!(live.index_through(1000), replay.index_through(1000));
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.index_through(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.index_through(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.index_through(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_serde_through_state() {
        let mut rng = GameRng::new(11);
        rng.index_through(50);

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: GameRng = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed(), 11);
        assert_eq!(restored.index_through(1000), rng.index_through(1000));
    }
}
