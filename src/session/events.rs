//! Observer notifications.
//!
//! Consumers (a UI, a notification layer) subscribe to a session and are
//! called synchronously after each committed move. Observers only ever see
//! fully committed post-move state; the session holds nothing per observer
//! beyond the registration list.

use crate::rules::GameResult;
use crate::session::MoveOutcome;

/// Callbacks fired by [`crate::session::GameSession`] after a move commits.
///
/// Both methods default to no-ops so observers implement only what they
/// need. `on_game_over` fires once, immediately after the `on_move_applied`
/// for the move that claimed the last box.
pub trait SessionObserver {
    /// A move was validated, applied, and committed.
    fn on_move_applied(&mut self, outcome: &MoveOutcome) {
        let _ = outcome;
    }

    /// The last box was claimed and winners are resolved.
    fn on_game_over(&mut self, result: &GameResult) {
        let _ = result;
    }
}
