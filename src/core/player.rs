//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index at the table, 0-based. Turn order is ascending seat index,
//! wrapping around at the player count.
//!
//! ## PlayerMap
//!
//! One entry per seated player, backed by a `Vec` for O(1) access.
//! The player count is fixed when the match is set up.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    ///
    /// Computed from the player count passed in, never from a cached order.
    ///
    /// ```
    /// use dhandho_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a match with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use dhandho_engine::core::{PlayerId, PlayerMap};
///
/// let mut banked: PlayerMap<u32> = PlayerMap::with_default(3);
/// banked[PlayerId::new(1)] += 5;
///
/// assert_eq!(banked[PlayerId::new(1)], 5);
/// assert_eq!(banked.others(PlayerId::new(1)).count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per seat from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= u8::MAX as usize, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a map with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Does this seat exist?
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Checked access, `None` for a seat outside the match.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Checked mutable access.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Mutable access to two distinct seats at once.
    ///
    /// Returns `None` if either seat is missing or both are the same seat.
    /// Used by the cross-player transfers (payments, theft, swaps).
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> Option<(&mut T, &mut T)> {
        let (ia, ib) = (a.index(), b.index());
        if ia == ib || ia >= self.data.len() || ib >= self.data.len() {
            return None;
        }
        if ia < ib {
            let (left, right) = self.data.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.data.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }

    /// Every seat except `player`, in seat order.
    pub fn others(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> {
        self.player_ids().filter(move |&p| p != player)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_for_every_count() {
        for count in 2..=5 {
            let last = PlayerId::new(count as u8 - 1);
            assert_eq!(last.next(count), PlayerId::new(0));
            assert_eq!(PlayerId::new(0).next(count), PlayerId::new(1));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerId::new(3)), "Player 3");
    }

    #[test]
    fn test_checked_access() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 * 10);

        assert_eq!(map.get(PlayerId::new(1)), Some(&10));
        assert_eq!(map.get(PlayerId::new(2)), None);
        assert!(map.contains(PlayerId::new(0)));
        assert!(!map.contains(PlayerId::new(7)));
    }

    #[test]
    fn test_pair_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        {
            let (a, b) = map.pair_mut(PlayerId::new(2), PlayerId::new(0)).unwrap();
            std::mem::swap(a, b);
        }
        assert_eq!(map[PlayerId::new(0)], 2);
        assert_eq!(map[PlayerId::new(2)], 0);

        assert!(map.pair_mut(PlayerId::new(1), PlayerId::new(1)).is_none());
        assert!(map.pair_mut(PlayerId::new(1), PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_others() {
        let map: PlayerMap<()> = PlayerMap::with_default(4);
        let others: Vec<_> = map.others(PlayerId::new(2)).collect();

        assert_eq!(others, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(3)]);
    }

    #[test]
    fn test_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
