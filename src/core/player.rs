//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are **1-based**: a game with `n` players
//! uses ids `1..=n`, matching how scores and claimed boxes are reported to
//! consumers. Cells use `Option<PlayerId>` for "unclaimed" rather than a
//! sentinel id.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier, 1-based.
///
/// The first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. Ids start at 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value (1-based).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index for this player.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use dotnexus::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }

    /// Cyclic successor over `1..=player_count`.
    ///
    /// The last player wraps back to `PlayerId(1)`.
    #[must_use]
    pub fn successor(self, player_count: usize) -> PlayerId {
        if self.0 as usize >= player_count {
            PlayerId(1)
        } else {
            PlayerId(self.0 + 1)
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player, indexed by `PlayerId`.
///
/// ## Example
///
/// ```
/// use dotnexus::{PlayerId, PlayerMap};
///
/// let mut claimed: PlayerMap<u32> = PlayerMap::with_value(4, 0);
///
/// claimed[PlayerId::new(2)] = 3;
/// assert_eq!(claimed[PlayerId::new(2)], 3);
/// assert_eq!(claimed[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (1..=player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in player-id order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (1..=self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
