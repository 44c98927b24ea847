//! Game configuration.
//!
//! A board is configured by two small integers: grid size (boxes per side)
//! and player count. Out-of-range values are **clamped** to the nearest valid
//! bound rather than rejected; this mirrors the settings flow of the game,
//! where the configuration surface is a slider, not an error path.
//!
//! Changing either value reinitializes the board wholesale. There is no
//! in-place resize.

use serde::{Deserialize, Serialize};

/// Smallest supported grid size (boxes per side).
pub const MIN_SIZE: usize = 3;
/// Largest supported grid size.
pub const MAX_SIZE: usize = 10;
/// Smallest supported player count.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported player count.
pub const MAX_PLAYERS: usize = 6;

/// Board configuration: grid size and player count.
///
/// Immutable once a session starts; a session applies a [`ConfigUpdate`] by
/// rebuilding its board from a fresh `GridConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    size: usize,
    player_count: usize,
}

impl GridConfig {
    /// Create a configuration, clamping both values into range.
    ///
    /// ```
    /// use dotnexus::GridConfig;
    ///
    /// let config = GridConfig::new(2, 10);
    /// assert_eq!(config.size(), 3);
    /// assert_eq!(config.player_count(), 6);
    /// ```
    #[must_use]
    pub fn new(size: usize, player_count: usize) -> Self {
        Self {
            size: size.clamp(MIN_SIZE, MAX_SIZE),
            player_count: player_count.clamp(MIN_PLAYERS, MAX_PLAYERS),
        }
    }

    /// Grid size in boxes per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Total number of boxes on the board.
    #[must_use]
    pub fn total_boxes(&self) -> usize {
        self.size * self.size
    }

    /// Replace the grid size (clamped).
    #[must_use]
    pub fn with_size(self, size: usize) -> Self {
        Self::new(size, self.player_count)
    }

    /// Replace the player count (clamped).
    #[must_use]
    pub fn with_player_count(self, player_count: usize) -> Self {
        Self::new(self.size, player_count)
    }

    /// Apply a partial update, clamping any provided values.
    #[must_use]
    pub fn apply(self, update: ConfigUpdate) -> Self {
        Self::new(
            update.size.unwrap_or(self.size),
            update.player_count.unwrap_or(self.player_count),
        )
    }
}

impl Default for GridConfig {
    /// The out-of-the-box game: a 5x5 grid for 2 players.
    fn default() -> Self {
        Self::new(5, 2)
    }
}

/// Partial configuration change. Fields left `None` keep their current value.
///
/// ```
/// use dotnexus::{ConfigUpdate, GridConfig};
///
/// let config = GridConfig::default().apply(ConfigUpdate::new().size(8));
/// assert_eq!(config.size(), 8);
/// assert_eq!(config.player_count(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    pub size: Option<usize>,
    pub player_count: Option<usize>,
}

impl ConfigUpdate {
    /// An empty update (keeps everything as-is).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a new grid size.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Request a new player count.
    #[must_use]
    pub fn player_count(mut self, player_count: usize) -> Self {
        self.player_count = Some(player_count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_kept() {
        let config = GridConfig::new(5, 3);
        assert_eq!(config.size(), 5);
        assert_eq!(config.player_count(), 3);
        assert_eq!(config.total_boxes(), 25);
    }

    #[test]
    fn test_size_clamped_low() {
        assert_eq!(GridConfig::new(0, 2).size(), MIN_SIZE);
        assert_eq!(GridConfig::new(2, 2).size(), MIN_SIZE);
    }

    #[test]
    fn test_size_clamped_high() {
        assert_eq!(GridConfig::new(11, 2).size(), MAX_SIZE);
        assert_eq!(GridConfig::new(usize::MAX, 2).size(), MAX_SIZE);
    }

    #[test]
    fn test_player_count_clamped() {
        assert_eq!(GridConfig::new(5, 0).player_count(), MIN_PLAYERS);
        assert_eq!(GridConfig::new(5, 1).player_count(), MIN_PLAYERS);
        assert_eq!(GridConfig::new(5, 10).player_count(), MAX_PLAYERS);
    }

    #[test]
    fn test_default() {
        let config = GridConfig::default();
        assert_eq!(config.size(), 5);
        assert_eq!(config.player_count(), 2);
    }

    #[test]
    fn test_builders_clamp() {
        let config = GridConfig::default().with_size(100).with_player_count(1);
        assert_eq!(config.size(), MAX_SIZE);
        assert_eq!(config.player_count(), MIN_PLAYERS);
    }

    #[test]
    fn test_apply_partial_update() {
        let config = GridConfig::new(4, 3);

        let updated = config.apply(ConfigUpdate::new().size(6));
        assert_eq!(updated.size(), 6);
        assert_eq!(updated.player_count(), 3);

        let unchanged = config.apply(ConfigUpdate::new());
        assert_eq!(unchanged, config);
    }

    #[test]
    fn test_apply_clamps() {
        let config = GridConfig::default().apply(
            ConfigUpdate::new().size(2).player_count(10),
        );
        assert_eq!(config.size(), 3);
        assert_eq!(config.player_count(), 6);
    }

    #[test]
    fn test_serialization() {
        let config = GridConfig::new(7, 4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
