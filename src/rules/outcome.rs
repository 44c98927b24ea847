//! Game completion and winner resolution.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::scoring::ScoreBoard;

/// Result of a completed game.
///
/// There is always at least one winner: whoever holds the maximum score when
/// the last box is claimed. Two or more players on the maximum is a tie, up
/// to and including an all-way tie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Two or more players share the maximum score.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (or shares the win).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie(players) => players.contains(&player),
        }
    }

    /// All winning players.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Tie(players) => players.clone(),
        }
    }
}

/// Check for completion and resolve winners.
///
/// Returns `Some` exactly when every box is claimed, i.e. the score total
/// equals `size * size`. The scores must already include the triggering
/// move's full completed-box count - both boxes of a double completion -
/// so a move that closes the last two boxes at once ends the game on that
/// move, not one move late.
#[must_use]
pub fn evaluate(scores: &ScoreBoard, size: usize) -> Option<GameResult> {
    if scores.total_claimed() as usize != size * size {
        return None;
    }

    let leaders = scores.leaders();
    Some(match leaders.as_slice() {
        [single] => GameResult::Winner(*single),
        _ => GameResult::Tie(leaders),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);
    const P3: PlayerId = PlayerId::new(3);

    #[test]
    fn test_not_over_until_board_full() {
        let mut scores = ScoreBoard::new(2);
        scores.record(P1, 8);

        assert_eq!(evaluate(&scores, 3), None);
    }

    #[test]
    fn test_single_winner() {
        let mut scores = ScoreBoard::new(2);
        scores.record(P1, 6);
        scores.record(P2, 3);

        let result = evaluate(&scores, 3).unwrap();
        assert_eq!(result, GameResult::Winner(P1));
        assert!(result.is_winner(P1));
        assert!(!result.is_winner(P2));
        assert_eq!(result.winners(), vec![P1]);
    }

    #[test]
    fn test_two_way_tie() {
        let mut scores = ScoreBoard::new(3);
        scores.record(P1, 4);
        scores.record(P3, 4);
        scores.record(P2, 1);

        let result = evaluate(&scores, 3).unwrap();
        assert_eq!(result, GameResult::Tie(vec![P1, P3]));
        assert!(result.is_winner(P1));
        assert!(!result.is_winner(P2));
        assert!(result.is_winner(P3));
    }

    #[test]
    fn test_all_way_tie() {
        let mut scores = ScoreBoard::new(3);
        for player in PlayerId::all(3) {
            scores.record(player, 3);
        }

        let result = evaluate(&scores, 3).unwrap();
        assert_eq!(result, GameResult::Tie(vec![P1, P2, P3]));
    }

    #[test]
    fn test_double_completion_ends_game_immediately() {
        // 7 boxes claimed, then a move closes the final two at once.
        let mut scores = ScoreBoard::new(2);
        scores.record(P1, 4);
        scores.record(P2, 3);
        assert_eq!(evaluate(&scores, 3), None);

        scores.record(P2, 2);
        assert_eq!(evaluate(&scores, 3), Some(GameResult::Winner(P2)));
    }
}
