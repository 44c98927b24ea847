//! Per-player claimed-box counts.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Claimed-box tally per player.
///
/// Scores are recorded from the post-move completed-box count: a move that
/// closes two boxes at once adds two in a single [`ScoreBoard::record`] call.
/// Game-over evaluation reads these totals, so recording must happen before
/// the evaluation, never from a stale snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: PlayerMap<u32>,
}

impl ScoreBoard {
    /// All-zero scores for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            totals: PlayerMap::with_value(player_count, 0),
        }
    }

    /// Number of players tracked.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.totals.player_count()
    }

    /// Credit `player` with `boxes` newly claimed boxes.
    pub fn record(&mut self, player: PlayerId, boxes: usize) {
        self.totals[player] += boxes as u32;
    }

    /// A player's claimed-box count.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.totals[player]
    }

    /// Sum of all claimed boxes.
    #[must_use]
    pub fn total_claimed(&self) -> u32 {
        self.totals.iter().map(|(_, score)| score).sum()
    }

    /// Iterate scores in player-id order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.totals.iter().map(|(player, score)| (player, *score))
    }

    /// The full set of players tied for the maximum score.
    ///
    /// Never empty; with all scores equal it contains every player.
    #[must_use]
    pub fn leaders(&self) -> Vec<PlayerId> {
        let highest = self.iter().map(|(_, score)| score).max().unwrap_or(0);
        self.iter()
            .filter(|&(_, score)| score == highest)
            .map(|(player, _)| player)
            .collect()
    }
}
