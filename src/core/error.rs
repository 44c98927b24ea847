//! Move validation errors.
//!
//! Every engine failure is a recoverable result value; nothing in the engine
//! panics on bad input. Configuration out-of-range values are not errors at
//! all - they are clamped (see [`crate::core::config`]).

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was rejected.
///
/// Checked in order: game over, then bounds, then already drawn. A rejected
/// move leaves the board, scores, and turn untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The line coordinates exceed the matrix dimensions for that line type.
    #[display("line coordinates are outside the board")]
    OutOfBounds,

    /// The targeted line already has an owner. Lines are never redrawn.
    #[display("that line has already been drawn")]
    AlreadyDrawn,

    /// A move was attempted after the last box was claimed.
    #[display("the game is already over")]
    GameAlreadyOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            MoveError::OutOfBounds.to_string(),
            "line coordinates are outside the board"
        );
        assert_eq!(
            MoveError::AlreadyDrawn.to_string(),
            "that line has already been drawn"
        );
        assert_eq!(
            MoveError::GameAlreadyOver.to_string(),
            "the game is already over"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&MoveError::OutOfBounds);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MoveError::AlreadyDrawn).unwrap();
        let back: MoveError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MoveError::AlreadyDrawn);
    }
}
