//! Turn rotation and the extra-turn rule.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Whose turn it is.
///
/// One transition rule, evaluated once per applied move: a mover who
/// completed at least one box keeps the turn (completing two in one move
/// still grants only the one extra turn); otherwise the turn passes to the
/// cyclic successor. Rejected moves never touch the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    current: PlayerId,
    player_count: usize,
}

impl TurnOrder {
    /// Start with player 1 of `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self {
            current: PlayerId::new(1),
            player_count,
        }
    }

    /// The active player.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Number of players in the rotation.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Apply the turn rule after a valid move and return the new active
    /// player.
    pub fn advance(&mut self, completed_any: bool) -> PlayerId {
        if !completed_any {
            self.current = self.current.successor(self.player_count);
        }
        self.current
    }
}
